pub mod errors;
pub mod fields;
pub mod photo_policy;
pub mod placeholders;
pub mod working_copy;

pub use errors::EditorError;
pub use fields::{ListItem, ListKind, ScalarField};
pub use photo_policy::PhotoPolicy;
pub use working_copy::{export_file_name, WorkingCopy};
