use actix_web::HttpResponse;
use tracing::error;

use crate::editor::domain::EditorError;
use crate::shared::api::ApiResponse;

/// Maps editor failures onto the API envelope.
pub fn editor_error_response(e: EditorError) -> HttpResponse {
    let message = e.to_string();

    match e {
        EditorError::IndexOutOfRange { .. } => {
            ApiResponse::not_found("INDEX_OUT_OF_RANGE", &message)
        }
        EditorError::ItemKindMismatch { .. } => {
            ApiResponse::bad_request("ITEM_KIND_MISMATCH", &message)
        }
        EditorError::InvalidPercentage(_) => {
            ApiResponse::bad_request("INVALID_PERCENTAGE", &message)
        }
        EditorError::PhotoTooLarge { .. } => {
            ApiResponse::payload_too_large("PHOTO_TOO_LARGE", &message)
        }
        EditorError::UnsupportedMediaType(_) => {
            ApiResponse::unsupported_media_type("UNSUPPORTED_MEDIA_TYPE", &message)
        }
        EditorError::InvalidImport(_) => ApiResponse::bad_request("INVALID_IMPORT", &message),
        EditorError::SessionClosed => {
            ApiResponse::unauthorized("INVALID_SESSION", "Session is invalid or expired")
        }
        EditorError::Storage(e) => {
            error!("Editor storage failure: {}", e);
            ApiResponse::internal_error()
        }
    }
}
