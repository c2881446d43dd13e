use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info, warn};

use crate::content::domain::Language;
use crate::notification::application::ports::{
    incoming::{DeliveryChannel, NotificationUseCase},
    outgoing::{DeliveryError, EmailRelayClient, WebhookClient},
};
use crate::notification::application::services::{SettingsError, SettingsStore};
use crate::notification::domain::{
    ContactMessage, EmailRelaySettings, NotificationError, NotificationSettings, OutboundMessage,
    WebhookSettings,
};
use crate::shared::storage::{keys, KeyValueStore};

pub struct NotificationService {
    email: SettingsStore<EmailRelaySettings>,
    webhook: SettingsStore<WebhookSettings>,
    relay_client: Arc<dyn EmailRelayClient>,
    webhook_client: Arc<dyn WebhookClient>,
    /// Public origin stamped into every outbound message.
    source: String,
}

impl NotificationService {
    pub async fn load(
        storage: Arc<dyn KeyValueStore>,
        relay_client: Arc<dyn EmailRelayClient>,
        webhook_client: Arc<dyn WebhookClient>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            email: SettingsStore::load(storage.clone(), keys::EMAIL_SETTINGS).await,
            webhook: SettingsStore::load(storage, keys::WEBHOOK_SETTINGS).await,
            relay_client,
            webhook_client,
            source: source.into(),
        }
    }

    async fn send_via_relay(
        &self,
        settings: &EmailRelaySettings,
        message: &OutboundMessage,
    ) -> Result<(), NotificationError> {
        self.relay_client
            .send(settings, message)
            .await
            .map_err(|e| delivery_failed("email relay", e))
    }

    async fn send_via_webhook(
        &self,
        settings: &WebhookSettings,
        message: &OutboundMessage,
    ) -> Result<(), NotificationError> {
        self.webhook_client
            .post(&settings.webhook_url, message)
            .await
            .map_err(|e| delivery_failed("webhook", e))
    }
}

fn delivery_failed(channel: &str, e: DeliveryError) -> NotificationError {
    warn!(channel, "Notification delivery failed: {}", e);
    NotificationError::DeliveryFailed(e.to_string())
}

fn storage_error(e: SettingsError) -> NotificationError {
    error!("Failed to persist notification settings: {}", e);
    NotificationError::Storage(e.to_string())
}

fn require_fields(settings: &impl NotificationSettings) -> Result<(), NotificationError> {
    let missing = settings.missing_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(NotificationError::MissingRequiredFields(missing))
    }
}

#[async_trait]
impl NotificationUseCase for NotificationService {
    async fn email_settings(&self) -> EmailRelaySettings {
        self.email.get().await
    }

    async fn update_email_settings(
        &self,
        settings: EmailRelaySettings,
    ) -> Result<EmailRelaySettings, NotificationError> {
        self.email.update(settings).await.map_err(storage_error)
    }

    async fn webhook_settings(&self) -> WebhookSettings {
        self.webhook.get().await
    }

    async fn update_webhook_settings(
        &self,
        settings: WebhookSettings,
    ) -> Result<WebhookSettings, NotificationError> {
        self.webhook.update(settings).await.map_err(storage_error)
    }

    async fn send_email_test(
        &self,
        settings: &EmailRelaySettings,
        lang: Language,
    ) -> Result<(), NotificationError> {
        require_fields(settings)?;

        let message = OutboundMessage::test(lang, &self.source, Utc::now());
        self.send_via_relay(settings, &message).await?;

        info!("Email relay test message sent");
        Ok(())
    }

    async fn send_webhook_test(
        &self,
        settings: &WebhookSettings,
        lang: Language,
    ) -> Result<(), NotificationError> {
        require_fields(settings)?;

        let message = OutboundMessage::test(lang, &self.source, Utc::now());
        self.send_via_webhook(settings, &message).await?;

        info!("Webhook test message sent");
        Ok(())
    }

    async fn submit_contact(
        &self,
        contact: ContactMessage,
    ) -> Result<DeliveryChannel, NotificationError> {
        contact.validate()?;
        let message = OutboundMessage::stamp(contact, &self.source, Utc::now());

        let webhook = self.webhook.get().await;
        if webhook.is_configured() {
            self.send_via_webhook(&webhook, &message).await?;
            info!("Contact message delivered via webhook");
            return Ok(DeliveryChannel::Webhook);
        }

        let email = self.email.get().await;
        if email.is_configured() {
            self.send_via_relay(&email, &message).await?;
            info!("Contact message delivered via email relay");
            return Ok(DeliveryChannel::Email);
        }

        warn!("Contact message dropped: no notification channel configured");
        Err(NotificationError::NoChannelConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{mock, predicate::*};

    use crate::shared::storage::InMemoryKeyValueStore;

    mock! {
        pub RelayClientMock {}
        #[async_trait]
        impl EmailRelayClient for RelayClientMock {
            async fn send(
                &self,
                settings: &EmailRelaySettings,
                message: &OutboundMessage,
            ) -> Result<(), DeliveryError>;
        }
    }

    mock! {
        pub WebhookClientMock {}
        #[async_trait]
        impl WebhookClient for WebhookClientMock {
            async fn post(&self, webhook_url: &str, message: &OutboundMessage) -> Result<(), DeliveryError>;
        }
    }

    const ORIGIN: &str = "https://portfolio.example.com";

    fn relay_settings() -> EmailRelaySettings {
        EmailRelaySettings {
            service_id: "svc".into(),
            template_id: "tpl".into(),
            public_key: "key".into(),
            recipient_email: "owner@example.com".into(),
        }
    }

    fn webhook_settings() -> WebhookSettings {
        WebhookSettings {
            webhook_url: "https://hook.example.com/abc".into(),
            is_enabled: true,
        }
    }

    fn contact() -> ContactMessage {
        ContactMessage {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            phone: Some("+380501112233".into()),
            message: "Hello".into(),
        }
    }

    async fn service(
        kv: InMemoryKeyValueStore,
        relay: MockRelayClientMock,
        webhook: MockWebhookClientMock,
    ) -> NotificationService {
        NotificationService::load(Arc::new(kv), Arc::new(relay), Arc::new(webhook), ORIGIN).await
    }

    fn stored(key: &str, value: &impl serde::Serialize) -> (String, String) {
        (key.to_string(), serde_json::to_string(value).unwrap())
    }

    fn kv_with(entries: &[(String, String)]) -> InMemoryKeyValueStore {
        entries
            .iter()
            .fold(InMemoryKeyValueStore::new(), |kv, (k, v)| kv.with_entry(k, v))
    }

    // ──────────────────────────────────────────────────────────
    // Test sends
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_send_with_missing_fields_makes_no_call() {
        let mut relay = MockRelayClientMock::new();
        relay.expect_send().never();
        let svc = service(InMemoryKeyValueStore::new(), relay, MockWebhookClientMock::new()).await;

        let mut settings = relay_settings();
        settings.public_key.clear();
        let result = svc.send_email_test(&settings, Language::Uk).await;

        assert_eq!(
            result,
            Err(NotificationError::MissingRequiredFields(vec!["publicKey"]))
        );
    }

    #[tokio::test]
    async fn test_send_uses_unsaved_settings_and_leaves_store_alone() {
        let mut relay = MockRelayClientMock::new();
        relay
            .expect_send()
            .withf(|settings, message| {
                settings.service_id == "svc"
                    && message.email == "test@example.com"
                    && message.source == ORIGIN
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let svc = service(InMemoryKeyValueStore::new(), relay, MockWebhookClientMock::new()).await;

        svc.send_email_test(&relay_settings(), Language::En)
            .await
            .unwrap();

        assert_eq!(svc.email_settings().await, EmailRelaySettings::default());
    }

    #[tokio::test]
    async fn failed_webhook_test_reports_delivery_failure() {
        let mut webhook = MockWebhookClientMock::new();
        webhook
            .expect_post()
            .with(eq("https://hook.example.com/abc"), always())
            .returning(|_, _| Err(DeliveryError::Transport("connection refused".into())));
        let svc = service(InMemoryKeyValueStore::new(), MockRelayClientMock::new(), webhook).await;

        let result = svc.send_webhook_test(&webhook_settings(), Language::Uk).await;

        assert!(matches!(result, Err(NotificationError::DeliveryFailed(_))));
        assert_eq!(svc.webhook_settings().await, WebhookSettings::default());
    }

    #[tokio::test]
    async fn webhook_test_ignores_enabled_flag() {
        let mut webhook = MockWebhookClientMock::new();
        webhook.expect_post().times(1).returning(|_, _| Ok(()));
        let svc = service(InMemoryKeyValueStore::new(), MockRelayClientMock::new(), webhook).await;

        let mut settings = webhook_settings();
        settings.is_enabled = false;

        assert_eq!(svc.send_webhook_test(&settings, Language::Uk).await, Ok(()));
    }

    // ──────────────────────────────────────────────────────────
    // Contact hand-off
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn webhook_takes_precedence_over_relay() {
        let kv = kv_with(&[
            stored(keys::EMAIL_SETTINGS, &relay_settings()),
            stored(keys::WEBHOOK_SETTINGS, &webhook_settings()),
        ]);
        let mut relay = MockRelayClientMock::new();
        relay.expect_send().never();
        let mut webhook = MockWebhookClientMock::new();
        webhook
            .expect_post()
            .withf(|_, message| message.phone.as_deref() == Some("+380501112233"))
            .times(1)
            .returning(|_, _| Ok(()));
        let svc = service(kv, relay, webhook).await;

        assert_eq!(
            svc.submit_contact(contact()).await,
            Ok(DeliveryChannel::Webhook)
        );
    }

    #[tokio::test]
    async fn disabled_webhook_falls_back_to_relay() {
        let mut disabled = webhook_settings();
        disabled.is_enabled = false;
        let kv = kv_with(&[
            stored(keys::EMAIL_SETTINGS, &relay_settings()),
            stored(keys::WEBHOOK_SETTINGS, &disabled),
        ]);
        let mut relay = MockRelayClientMock::new();
        relay.expect_send().times(1).returning(|_, _| Ok(()));
        let mut webhook = MockWebhookClientMock::new();
        webhook.expect_post().never();
        let svc = service(kv, relay, webhook).await;

        assert_eq!(svc.submit_contact(contact()).await, Ok(DeliveryChannel::Email));
    }

    #[tokio::test]
    async fn no_configured_channel_is_reported() {
        let svc = service(
            InMemoryKeyValueStore::new(),
            MockRelayClientMock::new(),
            MockWebhookClientMock::new(),
        )
        .await;

        assert_eq!(
            svc.submit_contact(contact()).await,
            Err(NotificationError::NoChannelConfigured)
        );
    }

    #[tokio::test]
    async fn invalid_submission_is_rejected_before_delivery() {
        let kv = kv_with(&[stored(keys::WEBHOOK_SETTINGS, &webhook_settings())]);
        let mut webhook = MockWebhookClientMock::new();
        webhook.expect_post().never();
        let svc = service(kv, MockRelayClientMock::new(), webhook).await;

        let mut c = contact();
        c.email = "nope".into();

        assert!(matches!(
            svc.submit_contact(c).await,
            Err(NotificationError::InvalidEmail(_))
        ));
    }

    // ──────────────────────────────────────────────────────────
    // Settings
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn settings_updates_are_independent() {
        let svc = service(
            InMemoryKeyValueStore::new(),
            MockRelayClientMock::new(),
            MockWebhookClientMock::new(),
        )
        .await;

        svc.update_webhook_settings(webhook_settings()).await.unwrap();

        assert_eq!(svc.webhook_settings().await, webhook_settings());
        assert_eq!(svc.email_settings().await, EmailRelaySettings::default());
    }
}
