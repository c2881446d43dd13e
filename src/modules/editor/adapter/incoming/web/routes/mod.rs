pub mod commit;
pub mod fields;
pub mod lists;
pub mod photo;
pub mod responsibilities;
pub mod session;
pub mod transfer;

pub use commit::{reset_editor_handler, save_editor_handler, ResetRequest};
pub use fields::{set_field_handler, SetFieldRequest};
pub use lists::{append_item_handler, remove_item_handler, replace_item_handler, AppendItemRequest};
pub use photo::{remove_photo_handler, upload_photo_handler};
pub use responsibilities::{
    append_responsibility_handler, remove_responsibility_handler,
    replace_responsibility_handler, ResponsibilityRequest,
};
pub use session::{
    open_editor_handler, switch_editor_language_handler, view_editor_handler,
    OpenEditorRequest, SwitchLanguageRequest,
};
pub use transfer::{export_content_handler, import_content_handler};
