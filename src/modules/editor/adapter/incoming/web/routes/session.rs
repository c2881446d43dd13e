use actix_web::{get, post, put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AdminSession,
    content::domain::Language,
    editor::{
        adapter::incoming::web::editor_error_response,
        application::ports::incoming::EditorView,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct OpenEditorRequest {
    /// Language to start editing in. Defaults to `uk`.
    #[schema(example = "uk")]
    pub language: Option<Language>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SwitchLanguageRequest {
    #[schema(example = "en")]
    pub language: Language,
}

/// Open the editor
///
/// Seeds a fresh working copy from the committed content. Unsaved edits of
/// this session are discarded.
#[utoipa::path(
    post,
    path = "/api/admin/editor/open",
    tag = "editor",
    security(("BearerAuth" = [])),
    request_body(content = OpenEditorRequest, description = "Optional; body may be omitted"),
    responses(
        (status = 200, description = "Working copy", body = inline(SuccessResponse<EditorView>)),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
    )
)]
#[post("/api/admin/editor/open")]
pub async fn open_editor_handler(
    session: AdminSession,
    payload: Option<web::Json<OpenEditorRequest>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = payload.and_then(|p| p.into_inner().language);

    match data
        .editor_use_case
        .open(&session.session_id, language)
        .await
    {
        Ok(view) => ApiResponse::success(view),
        Err(e) => editor_error_response(e),
    }
}

/// Current working copy
#[utoipa::path(
    get,
    path = "/api/admin/editor",
    tag = "editor",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Working copy", body = inline(SuccessResponse<EditorView>)),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
    )
)]
#[get("/api/admin/editor")]
pub async fn view_editor_handler(
    session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.editor_use_case.view(&session.session_id).await {
        Ok(view) => ApiResponse::success(view),
        Err(e) => editor_error_response(e),
    }
}

/// Switch the language being edited
///
/// Edits already made in either language stay in the working copy.
#[utoipa::path(
    put,
    path = "/api/admin/editor/language",
    tag = "editor",
    security(("BearerAuth" = [])),
    request_body = SwitchLanguageRequest,
    responses(
        (status = 200, description = "Working copy", body = inline(SuccessResponse<EditorView>)),
        (status = 400, description = "Unsupported language code", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
    )
)]
#[put("/api/admin/editor/language")]
pub async fn switch_editor_language_handler(
    session: AdminSession,
    payload: web::Json<SwitchLanguageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .editor_use_case
        .switch_language(&session.session_id, payload.language)
        .await
    {
        Ok(view) => ApiResponse::success(view),
        Err(e) => editor_error_response(e),
    }
}
