use actix_web::{delete, post, put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

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

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ResponsibilityRequest {
    /// Omit on append to add a placeholder line.
    #[serde(default)]
    #[schema(example = "Led the migration to Rust")]
    pub text: Option<String>,
}

/// Append a responsibility to an experience
#[utoipa::path(
    post,
    path = "/api/admin/editor/experiences/{experience}/responsibilities",
    tag = "editor",
    security(("BearerAuth" = [])),
    params(("experience" = usize, Path, description = "Experience position")),
    request_body = ResponsibilityRequest,
    responses(
        (status = 200, description = "Working copy", body = inline(SuccessResponse<EditorView>)),
        (status = 404, description = "Experience out of range", body = ErrorResponse),
    )
)]
#[post("/api/admin/editor/experiences/{experience}/responsibilities")]
pub async fn append_responsibility_handler(
    session: AdminSession,
    path: web::Path<usize>,
    payload: web::Json<ResponsibilityRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .editor_use_case
        .append_responsibility(&session.session_id, path.into_inner(), payload.into_inner().text)
        .await
    {
        Ok(view) => ApiResponse::success(view),
        Err(e) => editor_error_response(e),
    }
}

/// Rewrite a responsibility
#[utoipa::path(
    put,
    path = "/api/admin/editor/experiences/{experience}/responsibilities/{index}",
    tag = "editor",
    security(("BearerAuth" = [])),
    params(
        ("experience" = usize, Path, description = "Experience position"),
        ("index" = usize, Path, description = "Responsibility position"),
    ),
    request_body = ResponsibilityRequest,
    responses(
        (status = 200, description = "Working copy", body = inline(SuccessResponse<EditorView>)),
        (status = 400, description = "Missing text", body = ErrorResponse),
        (status = 404, description = "Index out of range", body = ErrorResponse),
    )
)]
#[put("/api/admin/editor/experiences/{experience}/responsibilities/{index}")]
pub async fn replace_responsibility_handler(
    session: AdminSession,
    path: web::Path<(usize, usize)>,
    payload: web::Json<ResponsibilityRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (experience, index) = path.into_inner();

    let Some(text) = payload.into_inner().text else {
        return ApiResponse::bad_request("VALIDATION_ERROR", "text is required");
    };

    match data
        .editor_use_case
        .replace_responsibility(&session.session_id, experience, index, text)
        .await
    {
        Ok(view) => ApiResponse::success(view),
        Err(e) => editor_error_response(e),
    }
}

/// Remove a responsibility
#[utoipa::path(
    delete,
    path = "/api/admin/editor/experiences/{experience}/responsibilities/{index}",
    tag = "editor",
    security(("BearerAuth" = [])),
    params(
        ("experience" = usize, Path, description = "Experience position"),
        ("index" = usize, Path, description = "Responsibility position"),
    ),
    responses(
        (status = 200, description = "Working copy", body = inline(SuccessResponse<EditorView>)),
        (status = 404, description = "Index out of range", body = ErrorResponse),
    )
)]
#[delete("/api/admin/editor/experiences/{experience}/responsibilities/{index}")]
pub async fn remove_responsibility_handler(
    session: AdminSession,
    path: web::Path<(usize, usize)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (experience, index) = path.into_inner();

    match data
        .editor_use_case
        .remove_responsibility(&session.session_id, experience, index)
        .await
    {
        Ok(view) => ApiResponse::success(view),
        Err(e) => editor_error_response(e),
    }
}
