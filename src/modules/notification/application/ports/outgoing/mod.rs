mod delivery;

pub use delivery::{DeliveryError, EmailRelayClient, WebhookClient};
