use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use actix_web::{get, HttpResponse, Responder};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LogoutResponseBody, SessionStatusResponse,
};
// Content
use crate::content::adapter::incoming::web::routes::ContentStatusResponse;
use crate::content::application::ports::incoming::{Customization, ResetScope};
use crate::content::domain::{
    AboutContent, BilingualContent, Certificate, ContactInfo, Education, Experience,
    HeroContent, Language, LanguageSkill, PersonalInfoItem, SiteContent, Stat,
};
// Editor
use crate::editor::adapter::incoming::web::routes::{
    AppendItemRequest, OpenEditorRequest, ResetRequest, ResponsibilityRequest, SetFieldRequest,
    SwitchLanguageRequest,
};
use crate::editor::application::ports::incoming::{EditorView, ImportOutcome};
use crate::editor::domain::{ListItem, ListKind, ScalarField};
// I18n
use crate::i18n::adapter::incoming::web::routes::LanguageBody;
use crate::i18n::domain::UiStrings;
// Notifications
use crate::notification::adapter::incoming::web::routes::{ContactReceipt, TestSendResponse};
use crate::notification::application::ports::incoming::DeliveryChannel;
use crate::notification::domain::{ContactMessage, EmailRelaySettings, WebhookSettings};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Bilingual portfolio site content, editor and contact delivery",
    ),
    paths(
        // Public endpoints
        crate::content::adapter::incoming::web::routes::get_content::get_content_handler,
        crate::i18n::adapter::incoming::web::routes::get_ui_strings::get_ui_strings_handler,
        crate::i18n::adapter::incoming::web::routes::language::get_language_handler,
        crate::i18n::adapter::incoming::web::routes::language::set_language_handler,
        crate::notification::adapter::incoming::web::routes::contact::submit_contact_handler,

        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_admin::login_admin_handler,
        crate::auth::adapter::incoming::web::routes::logout_admin::logout_admin_handler,
        crate::auth::adapter::incoming::web::routes::session_status::session_status_handler,

        // Admin content
        crate::content::adapter::incoming::web::routes::content_status::content_status_handler,

        // Editor endpoints
        crate::editor::adapter::incoming::web::routes::session::open_editor_handler,
        crate::editor::adapter::incoming::web::routes::session::view_editor_handler,
        crate::editor::adapter::incoming::web::routes::session::switch_editor_language_handler,
        crate::editor::adapter::incoming::web::routes::fields::set_field_handler,
        crate::editor::adapter::incoming::web::routes::lists::append_item_handler,
        crate::editor::adapter::incoming::web::routes::lists::replace_item_handler,
        crate::editor::adapter::incoming::web::routes::lists::remove_item_handler,
        crate::editor::adapter::incoming::web::routes::responsibilities::append_responsibility_handler,
        crate::editor::adapter::incoming::web::routes::responsibilities::replace_responsibility_handler,
        crate::editor::adapter::incoming::web::routes::responsibilities::remove_responsibility_handler,
        crate::editor::adapter::incoming::web::routes::photo::upload_photo_handler,
        crate::editor::adapter::incoming::web::routes::photo::remove_photo_handler,
        crate::editor::adapter::incoming::web::routes::commit::save_editor_handler,
        crate::editor::adapter::incoming::web::routes::commit::reset_editor_handler,
        crate::editor::adapter::incoming::web::routes::transfer::export_content_handler,
        crate::editor::adapter::incoming::web::routes::transfer::import_content_handler,

        // Notification settings
        crate::notification::adapter::incoming::web::routes::email_settings::get_email_settings_handler,
        crate::notification::adapter::incoming::web::routes::email_settings::update_email_settings_handler,
        crate::notification::adapter::incoming::web::routes::email_settings::test_email_settings_handler,
        crate::notification::adapter::incoming::web::routes::webhook_settings::get_webhook_settings_handler,
        crate::notification::adapter::incoming::web::routes::webhook_settings::update_webhook_settings_handler,
        crate::notification::adapter::incoming::web::routes::webhook_settings::test_webhook_settings_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<SiteContent>,
            ErrorResponse,
            ErrorDetail,

            // Content
            Language,
            SiteContent,
            BilingualContent,
            HeroContent,
            Stat,
            AboutContent,
            PersonalInfoItem,
            Experience,
            Education,
            Certificate,
            LanguageSkill,
            ContactInfo,
            Customization,
            ResetScope,
            ContentStatusResponse,

            // I18n
            UiStrings,
            LanguageBody,

            // Auth DTOs
            LoginRequestDto,
            LoginResponse,
            LogoutResponseBody,
            SessionStatusResponse,

            // Editor
            EditorView,
            ImportOutcome,
            ScalarField,
            ListKind,
            ListItem,
            OpenEditorRequest,
            SwitchLanguageRequest,
            SetFieldRequest,
            AppendItemRequest,
            ResponsibilityRequest,
            ResetRequest,

            // Notifications
            ContactMessage,
            ContactReceipt,
            DeliveryChannel,
            EmailRelaySettings,
            WebhookSettings,
            TestSendResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "content", description = "Published site content"),
        (name = "auth", description = "Operator authentication"),
        (name = "editor", description = "Working-copy editing of both languages"),
        (name = "notifications", description = "Delivery channel settings"),
        (name = "contact", description = "Visitor contact form"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Opaque session token returned by /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}

/// Serves the generated OpenAPI document.
#[get("/api/openapi.json")]
pub async fn openapi_json_handler() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
