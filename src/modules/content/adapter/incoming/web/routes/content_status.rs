use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AdminSession,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentStatusResponse {
    /// Ukrainian content differs from the bundled default.
    pub uk_customized: bool,
    /// English content differs from the bundled default.
    pub en_customized: bool,
}

/// Per-language customisation flags
///
/// Reports whether the stored content for each language still equals the
/// bundled default.
#[utoipa::path(
    get,
    path = "/api/admin/content/status",
    tag = "content",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Customisation flags", body = inline(SuccessResponse<ContentStatusResponse>)),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
    )
)]
#[get("/api/admin/content/status")]
pub async fn content_status_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    let customization = data.content_store_use_case.customization().await;

    ApiResponse::success(ContentStatusResponse {
        uk_customized: customization.uk,
        en_customized: customization.en,
    })
}
