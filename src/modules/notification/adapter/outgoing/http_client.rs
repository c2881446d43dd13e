use std::time::Duration;

use reqwest::{Client, Response};

use crate::notification::application::ports::outgoing::DeliveryError;

/// One client shared by both channels so connections are pooled.
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("portfolio_cms/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Any non-2xx answer counts as a failed delivery.
pub(super) async fn ensure_success(response: Response) -> Result<(), DeliveryError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    Err(DeliveryError::Rejected {
        status: status.as_u16(),
        body,
    })
}
