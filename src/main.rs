pub mod modules;
pub use modules::auth;
pub use modules::content;
pub use modules::editor;
pub use modules::i18n;
pub use modules::notification;

pub mod api;
pub mod config;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::InMemorySessionRegistry;
use crate::auth::application::domain::entities::AdminCredentials;
use crate::auth::application::ports::outgoing::{PasswordHasher, SessionRegistry};
use crate::auth::application::use_cases::{
    login_admin::{ILoginAdminUseCase, LoginAdminUseCase},
    logout_admin::{ILogoutAdminUseCase, LogoutAdminUseCase},
};
use crate::config::AppConfig;
use crate::content::adapter::outgoing::BundledContentTable;
use crate::content::application::ports::incoming::ContentStoreUseCase;
use crate::content::application::services::ContentStore;
use crate::editor::application::ports::incoming::EditorUseCase;
use crate::editor::application::services::EditorService;
use crate::editor::domain::PhotoPolicy;
use crate::i18n::application::ports::incoming::LanguagePreferenceUseCase;
use crate::i18n::application::services::LanguagePreferenceStore;
use crate::notification::adapter::outgoing::{
    build_http_client, HttpEmailRelayClient, HttpWebhookClient,
};
use crate::notification::application::ports::incoming::NotificationUseCase;
use crate::notification::application::services::NotificationService;
use crate::shared::api::{custom_json_config, raw_payload_config};
use crate::shared::storage::{FileKeyValueStore, KeyValueStore};

use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn KeyValueStore>,
    pub content_store_use_case: Arc<dyn ContentStoreUseCase + Send + Sync>,
    pub language_preference_use_case: Arc<dyn LanguagePreferenceUseCase + Send + Sync>,
    pub login_admin_use_case: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    pub logout_admin_use_case: Arc<dyn ILogoutAdminUseCase + Send + Sync>,
    pub session_registry: Arc<dyn SessionRegistry + Send + Sync>,
    pub editor_use_case: Arc<dyn EditorUseCase + Send + Sync>,
    pub notification_use_case: Arc<dyn NotificationUseCase + Send + Sync>,
}

fn load_env_files() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    load_env_files();
    let config = AppConfig::from_env()?;
    info!(?config, "Configuration loaded");

    // Storage
    let storage: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::open(&config.data_dir).await?);

    // Content and language preference
    let content_store = Arc::new(
        ContentStore::load(storage.clone(), Arc::new(BundledContentTable)).await,
    );
    let language_preference = Arc::new(LanguagePreferenceStore::load(storage.clone()).await);

    // Admin sessions
    let session_registry = Arc::new(InMemorySessionRegistry::new());
    let login_admin_use_case = LoginAdminUseCase::new(
        AdminCredentials {
            username: config.admin_username.clone(),
            password_hash: config.admin_password_hash.clone(),
        },
        Arc::new(Argon2Hasher::from_env()),
        session_registry.clone(),
        config.session_ttl,
    );
    let logout_admin_use_case = LogoutAdminUseCase::new(session_registry.clone());

    // Editor
    let editor_service = EditorService::new(
        content_store.clone(),
        session_registry.clone(),
        PhotoPolicy::new(config.photo_max_bytes),
    );

    // Notifications
    let http_client = build_http_client(config.outbound_timeout)?;
    let notification_service = NotificationService::load(
        storage.clone(),
        Arc::new(HttpEmailRelayClient::new(
            http_client.clone(),
            config.email_relay_endpoint.clone(),
        )),
        Arc::new(HttpWebhookClient::new(http_client)),
        config.public_origin.clone(),
    )
    .await;

    let state = AppState {
        storage,
        content_store_use_case: content_store,
        language_preference_use_case: language_preference,
        login_admin_use_case: Arc::new(login_admin_use_case),
        logout_admin_use_case: Arc::new(logout_admin_use_case),
        session_registry,
        editor_use_case: Arc::new(editor_service),
        notification_use_case: Arc::new(notification_service),
    };

    let server_url = config.bind_address();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .app_data(raw_payload_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::content::adapter::incoming::web::routes as content_routes;
    use crate::editor::adapter::incoming::web::routes as editor_routes;
    use crate::i18n::adapter::incoming::web::routes as i18n_routes;
    use crate::notification::adapter::incoming::web::routes as notification_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(crate::api::openapi::openapi_json_handler);
    // Public
    cfg.service(content_routes::get_content_handler);
    cfg.service(i18n_routes::get_ui_strings_handler);
    cfg.service(i18n_routes::get_language_handler);
    cfg.service(i18n_routes::set_language_handler);
    cfg.service(notification_routes::submit_contact_handler);
    // Auth
    cfg.service(auth_routes::login_admin_handler);
    cfg.service(auth_routes::logout_admin_handler);
    cfg.service(auth_routes::session_status_handler);
    // Admin content
    cfg.service(content_routes::content_status_handler);
    // Editor
    cfg.service(editor_routes::open_editor_handler);
    cfg.service(editor_routes::view_editor_handler);
    cfg.service(editor_routes::switch_editor_language_handler);
    cfg.service(editor_routes::set_field_handler);
    cfg.service(editor_routes::append_item_handler);
    cfg.service(editor_routes::replace_item_handler);
    cfg.service(editor_routes::remove_item_handler);
    cfg.service(editor_routes::append_responsibility_handler);
    cfg.service(editor_routes::replace_responsibility_handler);
    cfg.service(editor_routes::remove_responsibility_handler);
    cfg.service(editor_routes::upload_photo_handler);
    cfg.service(editor_routes::remove_photo_handler);
    cfg.service(editor_routes::save_editor_handler);
    cfg.service(editor_routes::reset_editor_handler);
    cfg.service(editor_routes::export_content_handler);
    cfg.service(editor_routes::import_content_handler);
    // Notifications
    cfg.service(notification_routes::get_email_settings_handler);
    cfg.service(notification_routes::update_email_settings_handler);
    cfg.service(notification_routes::test_email_settings_handler);
    cfg.service(notification_routes::get_webhook_settings_handler);
    cfg.service(notification_routes::update_webhook_settings_handler);
    cfg.service(notification_routes::test_webhook_settings_handler);
}

/// `hash-password <password>` prints an Argon2id PHC string for
/// `ADMIN_PASSWORD_HASH` and exits.
#[tokio::main(flavor = "current_thread")]
#[cfg(not(tarpaulin_include))]
async fn hash_password(password: &str) -> anyhow::Result<()> {
    load_env_files();
    let hash = Argon2Hasher::from_env().hash_password(password).await?;
    println!("{hash}");
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let result = match args.as_slice() {
        [command, password] if command == "hash-password" => hash_password(password),
        [command, ..] if command == "hash-password" => {
            Err(anyhow::anyhow!("usage: portfolio_cms hash-password <password>"))
        }
        _ => start(),
    };

    if let Err(e) = result {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
