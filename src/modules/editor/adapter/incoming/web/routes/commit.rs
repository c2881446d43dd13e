use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AdminSession,
    content::application::ports::incoming::ResetScope,
    editor::{
        adapter::incoming::web::editor_error_response,
        application::ports::incoming::EditorView,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct ResetRequest {
    #[schema(example = "all")]
    pub scope: ResetScope,
}

/// Save the working copy
///
/// Commits both languages in one write.
#[utoipa::path(
    post,
    path = "/api/admin/editor/save",
    tag = "editor",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Saved working copy", body = inline(SuccessResponse<EditorView>)),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 500, description = "Storage failure; nothing was committed", body = ErrorResponse),
    )
)]
#[post("/api/admin/editor/save")]
pub async fn save_editor_handler(
    session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.editor_use_case.save(&session.session_id).await {
        Ok(view) => ApiResponse::success(view),
        Err(e) => editor_error_response(e),
    }
}

/// Reset content to defaults
///
/// Restores one language or both in the committed record, then reloads
/// the working copy from it.
#[utoipa::path(
    post,
    path = "/api/admin/editor/reset",
    tag = "editor",
    security(("BearerAuth" = [])),
    request_body = ResetRequest,
    responses(
        (status = 200, description = "Reloaded working copy", body = inline(SuccessResponse<EditorView>)),
        (status = 400, description = "Unknown scope", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[post("/api/admin/editor/reset")]
pub async fn reset_editor_handler(
    session: AdminSession,
    payload: web::Json<ResetRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .editor_use_case
        .reset(&session.session_id, payload.scope)
        .await
    {
        Ok(view) => ApiResponse::success(view),
        Err(e) => editor_error_response(e),
    }
}
