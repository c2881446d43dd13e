use actix_web::{delete, post, put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AdminSession,
    editor::{
        adapter::incoming::web::editor_error_response,
        application::ports::incoming::EditorView,
        domain::{ListItem, ListKind},
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AppendItemRequest {
    /// Entry to append. When omitted a placeholder in the active language
    /// is added instead.
    #[serde(default)]
    pub item: Option<ListItem>,
}

/// Append a list entry
#[utoipa::path(
    post,
    path = "/api/admin/editor/lists/{list}",
    tag = "editor",
    security(("BearerAuth" = [])),
    params(("list" = ListKind, Path, description = "Target list, e.g. `certificates`")),
    request_body = AppendItemRequest,
    responses(
        (status = 200, description = "Working copy", body = inline(SuccessResponse<EditorView>)),
        (status = 400, description = "Item does not fit the list", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
    )
)]
#[post("/api/admin/editor/lists/{list}")]
pub async fn append_item_handler(
    session: AdminSession,
    path: web::Path<ListKind>,
    payload: web::Json<AppendItemRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .editor_use_case
        .append_item(&session.session_id, path.into_inner(), payload.into_inner().item)
        .await
    {
        Ok(view) => ApiResponse::success(view),
        Err(e) => editor_error_response(e),
    }
}

/// Replace a list entry
#[utoipa::path(
    put,
    path = "/api/admin/editor/lists/{list}/{index}",
    tag = "editor",
    security(("BearerAuth" = [])),
    params(
        ("list" = ListKind, Path, description = "Target list"),
        ("index" = usize, Path, description = "Zero-based position"),
    ),
    request_body = ListItem,
    responses(
        (status = 200, description = "Working copy", body = inline(SuccessResponse<EditorView>)),
        (status = 400, description = "Item does not fit the list", body = ErrorResponse),
        (status = 404, description = "Index out of range", body = ErrorResponse),
    )
)]
#[put("/api/admin/editor/lists/{list}/{index}")]
pub async fn replace_item_handler(
    session: AdminSession,
    path: web::Path<(ListKind, usize)>,
    payload: web::Json<ListItem>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (list, index) = path.into_inner();

    match data
        .editor_use_case
        .replace_item(&session.session_id, list, index, payload.into_inner())
        .await
    {
        Ok(view) => ApiResponse::success(view),
        Err(e) => editor_error_response(e),
    }
}

/// Remove a list entry
///
/// Entries after `index` move up by one.
#[utoipa::path(
    delete,
    path = "/api/admin/editor/lists/{list}/{index}",
    tag = "editor",
    security(("BearerAuth" = [])),
    params(
        ("list" = ListKind, Path, description = "Target list"),
        ("index" = usize, Path, description = "Zero-based position"),
    ),
    responses(
        (status = 200, description = "Working copy", body = inline(SuccessResponse<EditorView>)),
        (status = 404, description = "Index out of range", body = ErrorResponse),
    )
)]
#[delete("/api/admin/editor/lists/{list}/{index}")]
pub async fn remove_item_handler(
    session: AdminSession,
    path: web::Path<(ListKind, usize)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (list, index) = path.into_inner();

    match data
        .editor_use_case
        .remove_item(&session.session_id, list, index)
        .await
    {
        Ok(view) => ApiResponse::success(view),
        Err(e) => editor_error_response(e),
    }
}
