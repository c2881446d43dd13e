pub mod get_ui_strings;
pub mod language;

pub use get_ui_strings::get_ui_strings_handler;
pub use language::{get_language_handler, set_language_handler, LanguageBody};
