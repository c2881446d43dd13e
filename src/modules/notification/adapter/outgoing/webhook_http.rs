use async_trait::async_trait;
use reqwest::Client;

use crate::notification::application::ports::outgoing::{DeliveryError, WebhookClient};
use crate::notification::domain::OutboundMessage;

use super::http_client::ensure_success;

/// Posts the stamped message as JSON to the configured webhook URL.
pub struct HttpWebhookClient {
    client: Client,
}

impl HttpWebhookClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WebhookClient for HttpWebhookClient {
    async fn post(&self, webhook_url: &str, message: &OutboundMessage) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(webhook_url)
            .json(message)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        ensure_success(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::notification::adapter::outgoing::build_http_client;
    use crate::notification::domain::ContactMessage;
    use crate::tests::support::http_stub::serve_once;

    fn message() -> OutboundMessage {
        OutboundMessage::stamp(
            ContactMessage {
                name: "Jane".into(),
                email: "jane@example.com".into(),
                phone: None,
                message: "Hello".into(),
            },
            "https://portfolio.example.com",
            chrono::Utc::now(),
        )
    }

    #[tokio::test]
    async fn posts_message_fields_as_json() {
        let (url, request) = serve_once(200, "Accepted").await;
        let client = HttpWebhookClient::new(build_http_client(Duration::from_secs(5)).unwrap());

        client.post(&url, &message()).await.unwrap();

        let captured = request.await.unwrap();
        assert!(captured.contains("\"name\":\"Jane\""));
        assert!(captured.contains("\"source\":\"https://portfolio.example.com\""));
        assert!(!captured.contains("\"phone\""));
    }

    #[tokio::test]
    async fn invalid_url_is_a_transport_error() {
        let client = HttpWebhookClient::new(build_http_client(Duration::from_secs(5)).unwrap());

        let result = client.post("not a url", &message()).await;

        assert!(matches!(result, Err(DeliveryError::Transport(_))));
    }
}
