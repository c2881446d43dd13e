pub mod defaults;
pub mod entities;
pub mod language;
pub mod snapshot;

pub use defaults::default_content;
pub use entities::*;
pub use language::{Language, UnsupportedLanguage};
pub use snapshot::{ContentSnapshot, SnapshotError};
