use async_trait::async_trait;

use crate::content::domain::Language;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LanguagePreferenceError {
    #[error("Storage error: {0}")]
    Storage(String),
}

#[async_trait]
pub trait LanguagePreferenceUseCase: Send + Sync {
    async fn current(&self) -> Language;

    /// Updates the preference and persists it before returning.
    async fn set(&self, lang: Language) -> Result<(), LanguagePreferenceError>;
}
