use actix_web::{get, post, put, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AdminSession,
    i18n::adapter::incoming::web::resolve_language_or_response,
    notification::{
        adapter::incoming::web::notification_error_response,
        domain::{ConfiguredSettings, WebhookSettings},
    },
    shared::api::ApiResponse,
    AppState,
};

use super::email_settings::{TestSendQuery, TestSendResponse};

/// Webhook bridge settings
#[utoipa::path(
    get,
    path = "/api/admin/notifications/webhook",
    tag = "notifications",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Stored settings", body = inline(SuccessResponse<ConfiguredSettings<WebhookSettings>>)),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
    )
)]
#[get("/api/admin/notifications/webhook")]
pub async fn get_webhook_settings_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    let settings = data.notification_use_case.webhook_settings().await;
    ApiResponse::success(ConfiguredSettings::from(settings))
}

/// Replace webhook bridge settings
#[utoipa::path(
    put,
    path = "/api/admin/notifications/webhook",
    tag = "notifications",
    security(("BearerAuth" = [])),
    request_body = WebhookSettings,
    responses(
        (status = 200, description = "Settings stored", body = inline(SuccessResponse<ConfiguredSettings<WebhookSettings>>)),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[put("/api/admin/notifications/webhook")]
pub async fn update_webhook_settings_handler(
    _session: AdminSession,
    payload: web::Json<WebhookSettings>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .notification_use_case
        .update_webhook_settings(payload.into_inner())
        .await
    {
        Ok(settings) => ApiResponse::success(ConfiguredSettings::from(settings)),
        Err(e) => notification_error_response(e),
    }
}

/// Send a test webhook message
///
/// Only the URL is required; the enabled flag is not checked.
#[utoipa::path(
    post,
    path = "/api/admin/notifications/webhook/test",
    tag = "notifications",
    security(("BearerAuth" = [])),
    params(TestSendQuery),
    request_body = WebhookSettings,
    responses(
        (status = 200, description = "Webhook accepted the message", body = inline(SuccessResponse<TestSendResponse>)),
        (status = 400, description = "Webhook URL is blank", body = ErrorResponse),
        (status = 502, description = "Webhook call failed", body = ErrorResponse),
    )
)]
#[post("/api/admin/notifications/webhook/test")]
pub async fn test_webhook_settings_handler(
    _session: AdminSession,
    query: web::Query<TestSendQuery>,
    payload: web::Json<WebhookSettings>,
    data: web::Data<AppState>,
) -> impl Responder {
    let lang = match resolve_language_or_response(&data, query.lang.as_deref()).await {
        Ok(lang) => lang,
        Err(resp) => return resp,
    };

    match data
        .notification_use_case
        .send_webhook_test(&payload, lang)
        .await
    {
        Ok(()) => ApiResponse::success(TestSendResponse {
            message: "Test message sent".to_string(),
        }),
        Err(e) => notification_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::content::domain::Language;
    use crate::notification::application::services::NotificationService;
    use crate::shared::api::custom_json_config;
    use crate::shared::storage::InMemoryKeyValueStore;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, registry_with_session};
    use crate::tests::support::stubs::{StubDeliveryClient, StubLanguagePreference};

    #[actix_web::test]
    async fn disabled_webhook_is_not_configured() {
        let client = Arc::new(StubDeliveryClient::succeeding());
        let service = NotificationService::load(
            Arc::new(InMemoryKeyValueStore::new()),
            client.clone(),
            client,
            "https://site",
        )
        .await;
        let (registry, token) = registry_with_session();
        let state = TestAppStateBuilder::default()
            .with_session_registry(registry)
            .with_notifications(service)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .service(update_webhook_settings_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/admin/notifications/webhook")
            .insert_header(bearer(&token))
            .set_json(json!({ "webhookUrl": "https://hook.example.com/x", "isEnabled": false }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["webhookUrl"], "https://hook.example.com/x");
        assert_eq!(body["data"]["isConfigured"], false);
    }

    #[actix_web::test]
    async fn test_send_uses_preferred_language_by_default() {
        let client = Arc::new(StubDeliveryClient::succeeding());
        let service = NotificationService::load(
            Arc::new(InMemoryKeyValueStore::new()),
            client.clone(),
            client.clone(),
            "https://site",
        )
        .await;
        let (registry, token) = registry_with_session();
        let state = TestAppStateBuilder::default()
            .with_session_registry(registry)
            .with_language_preference(StubLanguagePreference::new(Language::En))
            .with_notifications(service)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .service(test_webhook_settings_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/notifications/webhook/test")
            .insert_header(bearer(&token))
            .set_json(json!({ "webhookUrl": "https://hook.example.com/x", "isEnabled": false }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let sent = client.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].message.starts_with("This is a test message"));
        assert_eq!(sent[0].source, "https://site");
    }
}
