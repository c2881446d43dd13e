use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = "Logged out")]
    message: String,
}

/// Operator logout
///
/// Revokes the bearer token and discards any unsaved editor draft.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Logged out", body = inline(SuccessResponse<LogoutResponseBody>)),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_admin_handler(
    session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    data.logout_admin_use_case.execute(&session.session_id).await;
    data.editor_use_case.close(&session.session_id).await;

    ApiResponse::success(LogoutResponseBody {
        message: "Logged out".to_string(),
    })
}
