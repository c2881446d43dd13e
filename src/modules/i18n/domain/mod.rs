mod ui_strings;

pub use ui_strings::*;
