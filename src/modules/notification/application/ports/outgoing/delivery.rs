use async_trait::async_trait;

use crate::notification::domain::{EmailRelaySettings, OutboundMessage};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeliveryError {
    #[error("Request could not be sent: {0}")]
    Transport(String),

    #[error("Channel responded with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Sends a message through an EmailJS-compatible relay.
#[async_trait]
pub trait EmailRelayClient: Send + Sync {
    async fn send(
        &self,
        settings: &EmailRelaySettings,
        message: &OutboundMessage,
    ) -> Result<(), DeliveryError>;
}

/// Posts a message to a webhook bridge.
#[async_trait]
pub trait WebhookClient: Send + Sync {
    async fn post(&self, webhook_url: &str, message: &OutboundMessage) -> Result<(), DeliveryError>;
}
