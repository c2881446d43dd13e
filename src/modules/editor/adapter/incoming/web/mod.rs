mod error_response;
pub mod routes;

pub use error_response::editor_error_response;
