mod contact;
mod errors;
mod settings;

pub use contact::{ContactMessage, OutboundMessage};
pub use errors::NotificationError;
pub use settings::{ConfiguredSettings, EmailRelaySettings, NotificationSettings, WebhookSettings};
