use async_trait::async_trait;

/// Logical storage keys. Every value stored under them is JSON text.
pub mod keys {
    pub const SITE_CONTENT: &str = "site_content";
    pub const SITE_LANGUAGE: &str = "site_language";
    pub const EMAIL_SETTINGS: &str = "email_settings";
    pub const WEBHOOK_SETTINGS: &str = "telegram_settings";
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage I/O error: {0}")]
    Io(String),
}

/// Durable string-keyed storage shared by the content, language and
/// notification stores.
///
/// `set` and `remove` must not return before the value is durable: a read
/// issued after a completed write always observes it.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
