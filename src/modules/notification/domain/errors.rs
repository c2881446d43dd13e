#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NotificationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<&'static str>),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),

    #[error("No notification channel is configured")]
    NoChannelConfigured,

    #[error("Storage error: {0}")]
    Storage(String),
}
