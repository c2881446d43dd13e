use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::content::domain::Language;
use crate::i18n::application::ports::incoming::{
    LanguagePreferenceError, LanguagePreferenceUseCase,
};
use crate::shared::storage::{keys, KeyValueStore};

/// The visitor-facing language toggle, persisted under `site_language`.
pub struct LanguagePreferenceStore {
    storage: Arc<dyn KeyValueStore>,
    current: RwLock<Language>,
}

impl LanguagePreferenceStore {
    /// Unknown or unreadable stored values are ignored in favour of `uk`.
    pub async fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let current = match storage.get(keys::SITE_LANGUAGE).await {
            Ok(Some(raw)) => parse_stored(&raw).unwrap_or_else(|| {
                warn!("Ignoring unknown stored language {:?}", raw);
                Language::default()
            }),
            Ok(None) => Language::default(),
            Err(e) => {
                warn!("Failed to read language preference: {}", e);
                Language::default()
            }
        };

        Self {
            storage,
            current: RwLock::new(current),
        }
    }
}

/// Accepts both the JSON form (`"en"`) and a bare code (`en`).
fn parse_stored(raw: &str) -> Option<Language> {
    serde_json::from_str::<Language>(raw)
        .ok()
        .or_else(|| raw.parse().ok())
}

#[async_trait]
impl LanguagePreferenceUseCase for LanguagePreferenceStore {
    async fn current(&self) -> Language {
        *self.current.read().await
    }

    async fn set(&self, lang: Language) -> Result<(), LanguagePreferenceError> {
        let mut current = self.current.write().await;

        let json = serde_json::to_string(&lang)
            .map_err(|e| LanguagePreferenceError::Storage(e.to_string()))?;
        self.storage
            .set(keys::SITE_LANGUAGE, &json)
            .await
            .map_err(|e| LanguagePreferenceError::Storage(e.to_string()))?;

        *current = lang;
        info!("Language preference set to {}", lang);
        Ok(())
    }
}
