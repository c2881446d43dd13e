use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::content::domain::{BilingualContent, Language, SiteContent};

//
// ──────────────────────────────────────────────────────────
// Reset Scope
// ──────────────────────────────────────────────────────────
//

/// Which part of the record a reset restores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResetScope {
    Uk,
    En,
    All,
}

impl ResetScope {
    pub fn language(self) -> Option<Language> {
        match self {
            ResetScope::Uk => Some(Language::Uk),
            ResetScope::En => Some(Language::En),
            ResetScope::All => None,
        }
    }
}

impl From<Option<Language>> for ResetScope {
    fn from(lang: Option<Language>) -> Self {
        match lang {
            Some(Language::Uk) => ResetScope::Uk,
            Some(Language::En) => ResetScope::En,
            None => ResetScope::All,
        }
    }
}

/// Per-language "differs from the compiled-in default" flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Customization {
    pub uk: bool,
    pub en: bool,
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentStoreError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ContentStoreUseCase: Send + Sync {
    async fn get_content(&self, lang: Language) -> SiteContent;

    async fn get_bilingual(&self) -> BilingualContent;

    /// What visitors see for `lang`.
    async fn resolve_display(&self, lang: Language) -> SiteContent;

    async fn is_customized(&self, lang: Language) -> bool;

    async fn customization(&self) -> Customization;

    async fn update_content(
        &self,
        content: SiteContent,
        lang: Language,
    ) -> Result<(), ContentStoreError>;

    async fn update_bilingual_content(
        &self,
        content: BilingualContent,
    ) -> Result<(), ContentStoreError>;

    async fn reset_content(&self, scope: ResetScope) -> Result<(), ContentStoreError>;
}
