use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use actix_web::{get, Responder};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    authenticated: bool,
    #[schema(example = "admin")]
    username: String,
}

/// Session check
///
/// Succeeds only while the bearer token is live.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Session is live", body = inline(SuccessResponse<SessionStatusResponse>)),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
    )
)]
#[get("/api/auth/session")]
pub async fn session_status_handler(session: AdminSession) -> impl Responder {
    ApiResponse::success(SessionStatusResponse {
        authenticated: true,
        username: session.username,
    })
}
