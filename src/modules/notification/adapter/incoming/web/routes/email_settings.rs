use actix_web::{get, post, put, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AdminSession,
    i18n::adapter::incoming::web::resolve_language_or_response,
    notification::{
        adapter::incoming::web::notification_error_response,
        domain::{ConfiguredSettings, EmailRelaySettings},
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct TestSendQuery {
    /// Language of the test message text.
    #[param(example = "uk")]
    pub lang: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TestSendResponse {
    #[schema(example = "Test message sent")]
    pub message: String,
}

/// Email relay settings
#[utoipa::path(
    get,
    path = "/api/admin/notifications/email",
    tag = "notifications",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Stored settings", body = inline(SuccessResponse<ConfiguredSettings<EmailRelaySettings>>)),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
    )
)]
#[get("/api/admin/notifications/email")]
pub async fn get_email_settings_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    let settings = data.notification_use_case.email_settings().await;
    ApiResponse::success(ConfiguredSettings::from(settings))
}

/// Replace email relay settings
#[utoipa::path(
    put,
    path = "/api/admin/notifications/email",
    tag = "notifications",
    security(("BearerAuth" = [])),
    request_body = EmailRelaySettings,
    responses(
        (status = 200, description = "Settings stored", body = inline(SuccessResponse<ConfiguredSettings<EmailRelaySettings>>)),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[put("/api/admin/notifications/email")]
pub async fn update_email_settings_handler(
    _session: AdminSession,
    payload: web::Json<EmailRelaySettings>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .notification_use_case
        .update_email_settings(payload.into_inner())
        .await
    {
        Ok(settings) => ApiResponse::success(ConfiguredSettings::from(settings)),
        Err(e) => notification_error_response(e),
    }
}

/// Send a test email
///
/// Uses the settings in the body, which need not be saved.
#[utoipa::path(
    post,
    path = "/api/admin/notifications/email/test",
    tag = "notifications",
    security(("BearerAuth" = [])),
    params(TestSendQuery),
    request_body = EmailRelaySettings,
    responses(
        (status = 200, description = "Relay accepted the message", body = inline(SuccessResponse<TestSendResponse>)),
        (status = 400, description = "Required fields are blank", body = ErrorResponse),
        (status = 502, description = "Relay call failed", body = ErrorResponse),
    )
)]
#[post("/api/admin/notifications/email/test")]
pub async fn test_email_settings_handler(
    _session: AdminSession,
    query: web::Query<TestSendQuery>,
    payload: web::Json<EmailRelaySettings>,
    data: web::Data<AppState>,
) -> impl Responder {
    let lang = match resolve_language_or_response(&data, query.lang.as_deref()).await {
        Ok(lang) => lang,
        Err(resp) => return resp,
    };

    match data
        .notification_use_case
        .send_email_test(&payload, lang)
        .await
    {
        Ok(()) => ApiResponse::success(TestSendResponse {
            message: "Test message sent".to_string(),
        }),
        Err(e) => notification_error_response(e),
    }
}
