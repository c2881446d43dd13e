pub mod content_status;
pub mod get_content;

pub use content_status::{content_status_handler, ContentStatusResponse};
pub use get_content::{get_content_handler, ContentQuery};
