use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::content::domain::Language;
use crate::notification::domain::{
    ContactMessage, EmailRelaySettings, NotificationError, WebhookSettings,
};

/// The channel a contact submission went out on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryChannel {
    Webhook,
    Email,
}

#[async_trait]
pub trait NotificationUseCase: Send + Sync {
    async fn email_settings(&self) -> EmailRelaySettings;

    /// Replaces the relay settings wholesale and persists them.
    async fn update_email_settings(
        &self,
        settings: EmailRelaySettings,
    ) -> Result<EmailRelaySettings, NotificationError>;

    async fn webhook_settings(&self) -> WebhookSettings;

    async fn update_webhook_settings(
        &self,
        settings: WebhookSettings,
    ) -> Result<WebhookSettings, NotificationError>;

    /// Sends a test message with the given, possibly unsaved, settings.
    /// Persisted settings are never touched.
    async fn send_email_test(
        &self,
        settings: &EmailRelaySettings,
        lang: Language,
    ) -> Result<(), NotificationError>;

    async fn send_webhook_test(
        &self,
        settings: &WebhookSettings,
        lang: Language,
    ) -> Result<(), NotificationError>;

    /// Delivers a visitor submission to the active channel. The webhook
    /// wins when both are configured.
    async fn submit_contact(
        &self,
        contact: ContactMessage,
    ) -> Result<DeliveryChannel, NotificationError>;
}
