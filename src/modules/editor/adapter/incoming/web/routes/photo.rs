use actix_web::{delete, http::header, post, web, HttpRequest, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AdminSession,
    editor::{
        adapter::incoming::web::editor_error_response,
        application::ports::incoming::EditorView,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Upload the profile photo
///
/// The raw image is the request body and its `Content-Type` must be an
/// `image/*` type. The photo is stored inline in both languages.
#[utoipa::path(
    post,
    path = "/api/admin/editor/photo",
    tag = "editor",
    security(("BearerAuth" = [])),
    request_body(content = Vec<u8>, content_type = "image/*"),
    responses(
        (status = 200, description = "Working copy", body = inline(SuccessResponse<EditorView>)),
        (status = 413, description = "Photo exceeds the size limit", body = ErrorResponse),
        (status = 415, description = "Not an image", body = ErrorResponse),
    )
)]
#[post("/api/admin/editor/photo")]
pub async fn upload_photo_handler(
    session: AdminSession,
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let mime_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    match data
        .editor_use_case
        .upload_photo(&session.session_id, &body, mime_type)
        .await
    {
        Ok(view) => ApiResponse::success(view),
        Err(e) => editor_error_response(e),
    }
}

/// Remove the profile photo
#[utoipa::path(
    delete,
    path = "/api/admin/editor/photo",
    tag = "editor",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Working copy", body = inline(SuccessResponse<EditorView>)),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
    )
)]
#[delete("/api/admin/editor/photo")]
pub async fn remove_photo_handler(
    session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.editor_use_case.remove_photo(&session.session_id).await {
        Ok(view) => ApiResponse::success(view),
        Err(e) => editor_error_response(e),
    }
}
