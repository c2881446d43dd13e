use actix_web::{get, post, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AdminSession,
    content::domain::BilingualContent,
    editor::{
        adapter::incoming::web::editor_error_response,
        application::ports::incoming::ImportOutcome, domain::EditorError,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Export the working copy
///
/// Downloads both languages as `portfolio-content-YYYY-MM-DD.json`.
#[utoipa::path(
    get,
    path = "/api/admin/editor/export",
    tag = "editor",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "JSON file attachment", body = BilingualContent, content_type = "application/json"),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
    )
)]
#[get("/api/admin/editor/export")]
pub async fn export_content_handler(
    session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.editor_use_case.export(&session.session_id).await {
        Ok(exported) => ApiResponse::attachment(&exported.file_name, &exported.content),
        Err(e) => editor_error_response(e),
    }
}

/// Import a content file
///
/// A bilingual `{uk, en}` file replaces the working copy and is committed
/// immediately. A legacy single-language file only fills the active
/// language and must be saved after review.
#[utoipa::path(
    post,
    path = "/api/admin/editor/import",
    tag = "editor",
    security(("BearerAuth" = [])),
    request_body(content = BilingualContent, content_type = "application/json"),
    responses(
        (status = 200, description = "Import applied", body = inline(SuccessResponse<ImportOutcome>)),
        (status = 400, description = "File is not a recognised content snapshot", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[post("/api/admin/editor/import")]
pub async fn import_content_handler(
    session: AdminSession,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let raw = match std::str::from_utf8(&body) {
        Ok(raw) => raw,
        Err(_) => {
            return editor_error_response(EditorError::InvalidImport(
                "file is not valid UTF-8".to_string(),
            ))
        }
    };

    match data.editor_use_case.import(&session.session_id, raw).await {
        Ok(outcome) => ApiResponse::success(outcome),
        Err(e) => editor_error_response(e),
    }
}
