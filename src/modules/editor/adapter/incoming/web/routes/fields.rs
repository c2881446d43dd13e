use actix_web::{put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AdminSession,
    editor::{
        adapter::incoming::web::editor_error_response,
        application::ports::incoming::EditorView, domain::ScalarField,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetFieldRequest {
    #[schema(example = "hero.name")]
    pub field: ScalarField,
    #[schema(example = "Jane Doe")]
    pub value: String,
}

/// Edit a text field
///
/// Writes the value into the active language of the working copy.
#[utoipa::path(
    put,
    path = "/api/admin/editor/fields",
    tag = "editor",
    security(("BearerAuth" = [])),
    request_body = SetFieldRequest,
    responses(
        (status = 200, description = "Working copy", body = inline(SuccessResponse<EditorView>)),
        (status = 400, description = "Unknown field", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
    )
)]
#[put("/api/admin/editor/fields")]
pub async fn set_field_handler(
    session: AdminSession,
    payload: web::Json<SetFieldRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let SetFieldRequest { field, value } = payload.into_inner();

    match data
        .editor_use_case
        .set_field(&session.session_id, field, value)
        .await
    {
        Ok(view) => ApiResponse::success(view),
        Err(e) => editor_error_response(e),
    }
}
