use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shared behaviour of the two channel settings records.
pub trait NotificationSettings {
    /// Wire names of required fields that are blank. Checked before any
    /// test send.
    fn missing_fields(&self) -> Vec<&'static str>;

    fn is_configured(&self) -> bool;
}

/// EmailJS-compatible relay parameters, stored under `email_settings`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailRelaySettings {
    #[schema(example = "service_abc123")]
    pub service_id: String,
    #[schema(example = "template_xyz789")]
    pub template_id: String,
    #[schema(example = "user_public_key")]
    pub public_key: String,
    /// Optional; forwarded to the template as `to_email`.
    #[schema(example = "owner@example.com")]
    pub recipient_email: String,
}

impl NotificationSettings for EmailRelaySettings {
    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("serviceId", &self.service_id),
            ("templateId", &self.template_id),
            ("publicKey", &self.public_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    fn is_configured(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Webhook bridge parameters, stored under `telegram_settings`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookSettings {
    #[schema(example = "https://hook.example.com/abc")]
    pub webhook_url: String,
    pub is_enabled: bool,
}

impl NotificationSettings for WebhookSettings {
    fn missing_fields(&self) -> Vec<&'static str> {
        if self.webhook_url.trim().is_empty() {
            vec!["webhookUrl"]
        } else {
            Vec::new()
        }
    }

    fn is_configured(&self) -> bool {
        self.missing_fields().is_empty() && self.is_enabled
    }
}

/// A settings record with its derived `isConfigured` flag. The flag is
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfiguredSettings<S> {
    #[serde(flatten)]
    pub settings: S,
    pub is_configured: bool,
}

impl<S: NotificationSettings> From<S> for ConfiguredSettings<S> {
    fn from(settings: S) -> Self {
        let is_configured = settings.is_configured();
        Self {
            settings,
            is_configured,
        }
    }
}
