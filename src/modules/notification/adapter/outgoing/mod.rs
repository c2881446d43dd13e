mod email_relay_http;
mod http_client;
mod webhook_http;

pub use email_relay_http::{HttpEmailRelayClient, DEFAULT_EMAIL_RELAY_ENDPOINT};
pub use http_client::build_http_client;
pub use webhook_http::HttpWebhookClient;
