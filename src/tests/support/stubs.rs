use std::sync::Mutex;

use async_trait::async_trait;

use crate::auth::application::domain::entities::SessionId;
use crate::auth::application::use_cases::login_admin::{
    ILoginAdminUseCase, LoginAdminResponse, LoginError, LoginRequest,
};
use crate::auth::application::use_cases::logout_admin::ILogoutAdminUseCase;
use crate::content::application::ports::incoming::{
    ContentStoreError, ContentStoreUseCase, Customization, ResetScope,
};
use crate::content::application::ports::outgoing::ContentTable;
use crate::content::domain::{default_content, BilingualContent, Language, SiteContent};
use crate::editor::application::ports::incoming::{
    EditorUseCase, EditorView, ExportedContent, ImportOutcome,
};
use crate::editor::domain::{EditorError, ListItem, ListKind, ScalarField};
use crate::i18n::application::ports::incoming::{
    LanguagePreferenceError, LanguagePreferenceUseCase,
};
use crate::notification::application::ports::incoming::{DeliveryChannel, NotificationUseCase};
use crate::notification::application::ports::outgoing::{
    DeliveryError, EmailRelayClient, WebhookClient,
};
use crate::notification::domain::{
    ContactMessage, EmailRelaySettings, NotificationError, OutboundMessage, WebhookSettings,
};
use crate::shared::storage::{KeyValueStore, StorageError};

//
// ──────────────────────────────────────────────────────────
// Storage
// ──────────────────────────────────────────────────────────
//

/// Every call fails as if the disk were gone.
pub struct FailingKeyValueStore;

#[async_trait]
impl KeyValueStore for FailingKeyValueStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Io("disk unavailable".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io("disk unavailable".to_string()))
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Io("disk unavailable".to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Content
// ──────────────────────────────────────────────────────────
//

/// A default-content table fixed at construction.
pub struct StaticContentTable {
    content: BilingualContent,
}

impl StaticContentTable {
    pub fn new(content: BilingualContent) -> Self {
        Self { content }
    }
}

impl ContentTable for StaticContentTable {
    fn content_for(&self, lang: Language) -> SiteContent {
        self.content.get(lang).clone()
    }
}

/// Serves the bundled defaults and accepts every write without storing it.
pub struct StubContentStore;

#[async_trait]
impl ContentStoreUseCase for StubContentStore {
    async fn get_content(&self, lang: Language) -> SiteContent {
        default_content().get(lang).clone()
    }

    async fn get_bilingual(&self) -> BilingualContent {
        default_content().clone()
    }

    async fn resolve_display(&self, lang: Language) -> SiteContent {
        default_content().get(lang).clone()
    }

    async fn is_customized(&self, _lang: Language) -> bool {
        false
    }

    async fn customization(&self) -> Customization {
        Customization {
            uk: false,
            en: false,
        }
    }

    async fn update_content(
        &self,
        _content: SiteContent,
        _lang: Language,
    ) -> Result<(), ContentStoreError> {
        Ok(())
    }

    async fn update_bilingual_content(
        &self,
        _content: BilingualContent,
    ) -> Result<(), ContentStoreError> {
        Ok(())
    }

    async fn reset_content(&self, _scope: ResetScope) -> Result<(), ContentStoreError> {
        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Language preference
// ──────────────────────────────────────────────────────────
//

pub struct StubLanguagePreference {
    language: Mutex<Language>,
}

impl StubLanguagePreference {
    pub fn new(language: Language) -> Self {
        Self {
            language: Mutex::new(language),
        }
    }
}

#[async_trait]
impl LanguagePreferenceUseCase for StubLanguagePreference {
    async fn current(&self) -> Language {
        *self.language.lock().unwrap()
    }

    async fn set(&self, lang: Language) -> Result<(), LanguagePreferenceError> {
        *self.language.lock().unwrap() = lang;
        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Auth
// ──────────────────────────────────────────────────────────
//

pub struct StubLoginAdminUseCase;

#[async_trait]
impl ILoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

pub struct StubLogoutAdminUseCase;

#[async_trait]
impl ILogoutAdminUseCase for StubLogoutAdminUseCase {
    async fn execute(&self, _session_id: &SessionId) -> bool {
        false
    }
}

//
// ──────────────────────────────────────────────────────────
// Editor
// ──────────────────────────────────────────────────────────
//

/// Rejects every editing call; `close` is a no-op.
pub struct StubEditorUseCase;

#[async_trait]
impl EditorUseCase for StubEditorUseCase {
    async fn open(
        &self,
        _session: &SessionId,
        _language: Option<Language>,
    ) -> Result<EditorView, EditorError> {
        Err(EditorError::SessionClosed)
    }

    async fn view(&self, _session: &SessionId) -> Result<EditorView, EditorError> {
        Err(EditorError::SessionClosed)
    }

    async fn switch_language(
        &self,
        _session: &SessionId,
        _language: Language,
    ) -> Result<EditorView, EditorError> {
        Err(EditorError::SessionClosed)
    }

    async fn set_field(
        &self,
        _session: &SessionId,
        _field: ScalarField,
        _value: String,
    ) -> Result<EditorView, EditorError> {
        Err(EditorError::SessionClosed)
    }

    async fn append_item(
        &self,
        _session: &SessionId,
        _list: ListKind,
        _item: Option<ListItem>,
    ) -> Result<EditorView, EditorError> {
        Err(EditorError::SessionClosed)
    }

    async fn replace_item(
        &self,
        _session: &SessionId,
        _list: ListKind,
        _index: usize,
        _item: ListItem,
    ) -> Result<EditorView, EditorError> {
        Err(EditorError::SessionClosed)
    }

    async fn remove_item(
        &self,
        _session: &SessionId,
        _list: ListKind,
        _index: usize,
    ) -> Result<EditorView, EditorError> {
        Err(EditorError::SessionClosed)
    }

    async fn append_responsibility(
        &self,
        _session: &SessionId,
        _experience: usize,
        _text: Option<String>,
    ) -> Result<EditorView, EditorError> {
        Err(EditorError::SessionClosed)
    }

    async fn replace_responsibility(
        &self,
        _session: &SessionId,
        _experience: usize,
        _index: usize,
        _text: String,
    ) -> Result<EditorView, EditorError> {
        Err(EditorError::SessionClosed)
    }

    async fn remove_responsibility(
        &self,
        _session: &SessionId,
        _experience: usize,
        _index: usize,
    ) -> Result<EditorView, EditorError> {
        Err(EditorError::SessionClosed)
    }

    async fn upload_photo(
        &self,
        _session: &SessionId,
        _bytes: &[u8],
        _mime_type: &str,
    ) -> Result<EditorView, EditorError> {
        Err(EditorError::SessionClosed)
    }

    async fn remove_photo(&self, _session: &SessionId) -> Result<EditorView, EditorError> {
        Err(EditorError::SessionClosed)
    }

    async fn save(&self, _session: &SessionId) -> Result<EditorView, EditorError> {
        Err(EditorError::SessionClosed)
    }

    async fn reset(
        &self,
        _session: &SessionId,
        _scope: ResetScope,
    ) -> Result<EditorView, EditorError> {
        Err(EditorError::SessionClosed)
    }

    async fn export(&self, _session: &SessionId) -> Result<ExportedContent, EditorError> {
        Err(EditorError::SessionClosed)
    }

    async fn import(&self, _session: &SessionId, _raw: &str) -> Result<ImportOutcome, EditorError> {
        Err(EditorError::SessionClosed)
    }

    async fn close(&self, _session: &SessionId) {}
}

//
// ──────────────────────────────────────────────────────────
// Notifications
// ──────────────────────────────────────────────────────────
//

/// Empty settings; nothing is ever delivered.
pub struct StubNotificationUseCase;

#[async_trait]
impl NotificationUseCase for StubNotificationUseCase {
    async fn email_settings(&self) -> EmailRelaySettings {
        EmailRelaySettings::default()
    }

    async fn update_email_settings(
        &self,
        settings: EmailRelaySettings,
    ) -> Result<EmailRelaySettings, NotificationError> {
        Ok(settings)
    }

    async fn webhook_settings(&self) -> WebhookSettings {
        WebhookSettings::default()
    }

    async fn update_webhook_settings(
        &self,
        settings: WebhookSettings,
    ) -> Result<WebhookSettings, NotificationError> {
        Ok(settings)
    }

    async fn send_email_test(
        &self,
        _settings: &EmailRelaySettings,
        _lang: Language,
    ) -> Result<(), NotificationError> {
        Err(NotificationError::NoChannelConfigured)
    }

    async fn send_webhook_test(
        &self,
        _settings: &WebhookSettings,
        _lang: Language,
    ) -> Result<(), NotificationError> {
        Err(NotificationError::NoChannelConfigured)
    }

    async fn submit_contact(
        &self,
        _contact: ContactMessage,
    ) -> Result<DeliveryChannel, NotificationError> {
        Err(NotificationError::NoChannelConfigured)
    }
}

/// Records outbound messages for both channels and answers with a fixed
/// outcome.
pub struct StubDeliveryClient {
    fail: bool,
    sent: Mutex<Vec<OutboundMessage>>,
}

impl StubDeliveryClient {
    pub fn succeeding() -> Self {
        Self {
            fail: false,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, message: &OutboundMessage) -> Result<(), DeliveryError> {
        self.sent.lock().unwrap().push(message.clone());
        if self.fail {
            Err(DeliveryError::Transport("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl EmailRelayClient for StubDeliveryClient {
    async fn send(
        &self,
        _settings: &EmailRelaySettings,
        message: &OutboundMessage,
    ) -> Result<(), DeliveryError> {
        self.record(message)
    }
}

#[async_trait]
impl WebhookClient for StubDeliveryClient {
    async fn post(&self, _webhook_url: &str, message: &OutboundMessage) -> Result<(), DeliveryError> {
        self.record(message)
    }
}
