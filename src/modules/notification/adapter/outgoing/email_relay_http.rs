use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::notification::application::ports::outgoing::{DeliveryError, EmailRelayClient};
use crate::notification::domain::{EmailRelaySettings, OutboundMessage};

use super::http_client::ensure_success;

pub const DEFAULT_EMAIL_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// EmailJS REST relay.
pub struct HttpEmailRelayClient {
    client: Client,
    endpoint: String,
}

impl HttpEmailRelayClient {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

fn relay_payload(settings: &EmailRelaySettings, message: &OutboundMessage) -> Value {
    let mut params = json!({
        "from_name": message.name,
        "from_email": message.email,
        "message": message.message,
        "to_email": settings.recipient_email,
        "timestamp": message.timestamp,
        "source": message.source,
    });
    if let Some(phone) = &message.phone {
        params["phone"] = json!(phone);
    }

    json!({
        "service_id": settings.service_id,
        "template_id": settings.template_id,
        "user_id": settings.public_key,
        "template_params": params,
    })
}

#[async_trait]
impl EmailRelayClient for HttpEmailRelayClient {
    async fn send(
        &self,
        settings: &EmailRelaySettings,
        message: &OutboundMessage,
    ) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&relay_payload(settings, message))
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        ensure_success(response).await
    }
}
