use serde::Serialize;
use utoipa::ToSchema;

/// Envelope of every 2xx body, e.g. `{"success": true, "data": {...}}`.
/// Documentation-only mirror of what `ApiResponse::success` writes.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Envelope of every rejected request.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable upper-snake code the admin UI switches on.
    #[schema(example = "INVALID_IMPORT")]
    pub code: String,

    #[schema(example = "Imported file is neither bilingual nor legacy content")]
    pub message: String,
}
