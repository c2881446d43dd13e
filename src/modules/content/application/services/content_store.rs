use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::content::application::ports::{
    incoming::{ContentStoreError, ContentStoreUseCase, Customization, ResetScope},
    outgoing::ContentTable,
};
use crate::content::domain::{
    default_content, BilingualContent, ContentSnapshot, Language, SiteContent,
};
use crate::shared::storage::{keys, KeyValueStore};

/// The single source of truth for displayed content.
///
/// Mutations hold the write lock across the storage write. Storage is written
/// first; memory only changes once the write succeeded.
pub struct ContentStore {
    storage: Arc<dyn KeyValueStore>,
    table: Arc<dyn ContentTable>,
    content: RwLock<BilingualContent>,
}

impl ContentStore {
    /// Loads the stored override, falling back to defaults. Never fails.
    pub async fn load(storage: Arc<dyn KeyValueStore>, table: Arc<dyn ContentTable>) -> Self {
        let content = Self::read_initial(storage.as_ref()).await;

        Self {
            storage,
            table,
            content: RwLock::new(content),
        }
    }

    async fn read_initial(storage: &dyn KeyValueStore) -> BilingualContent {
        let raw = match storage.get(keys::SITE_CONTENT).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return default_content().clone(),
            Err(e) => {
                warn!("Failed to read stored content, using defaults: {}", e);
                return default_content().clone();
            }
        };

        match ContentSnapshot::decode(&raw) {
            Ok(ContentSnapshot::Bilingual(content)) => content,
            Ok(legacy @ ContentSnapshot::Legacy(_)) => {
                let migrated = legacy.into_bilingual(default_content());
                info!("Migrating legacy single-language content to bilingual shape");

                match serde_json::to_string(&migrated) {
                    Ok(json) => {
                        if let Err(e) = storage.set(keys::SITE_CONTENT, &json).await {
                            warn!("Failed to persist migrated content: {}", e);
                        }
                    }
                    Err(e) => warn!("Failed to serialise migrated content: {}", e),
                }

                migrated
            }
            Err(e) => {
                warn!("Stored content is unreadable, using defaults: {}", e);
                default_content().clone()
            }
        }
    }

    async fn persist(&self, content: &BilingualContent) -> Result<(), ContentStoreError> {
        let json = serde_json::to_string(content)
            .map_err(|e| ContentStoreError::Serialization(e.to_string()))?;

        self.storage
            .set(keys::SITE_CONTENT, &json)
            .await
            .map_err(|e| ContentStoreError::Storage(e.to_string()))
    }
}

#[async_trait]
impl ContentStoreUseCase for ContentStore {
    async fn get_content(&self, lang: Language) -> SiteContent {
        self.content.read().await.get(lang).clone()
    }

    async fn get_bilingual(&self) -> BilingualContent {
        self.content.read().await.clone()
    }

    async fn resolve_display(&self, lang: Language) -> SiteContent {
        let content = self.content.read().await;
        let stored = content.get(lang);

        if stored == default_content().get(lang) {
            self.table.content_for(lang)
        } else {
            stored.clone()
        }
    }

    async fn is_customized(&self, lang: Language) -> bool {
        self.content.read().await.get(lang) != default_content().get(lang)
    }

    async fn customization(&self) -> Customization {
        let content = self.content.read().await;
        let defaults = default_content();

        Customization {
            uk: content.uk != defaults.uk,
            en: content.en != defaults.en,
        }
    }

    async fn update_content(
        &self,
        new_content: SiteContent,
        lang: Language,
    ) -> Result<(), ContentStoreError> {
        let mut content = self.content.write().await;

        let photo = new_content.about.profile_photo.clone();
        let mut candidate = content.clone();
        candidate.set(lang, new_content);
        candidate.set_profile_photo(photo);
        self.persist(&candidate).await?;

        *content = candidate;
        info!("Content updated for language {}", lang);
        Ok(())
    }

    async fn update_bilingual_content(
        &self,
        mut new_content: BilingualContent,
    ) -> Result<(), ContentStoreError> {
        new_content.unify_profile_photo();
        let mut content = self.content.write().await;

        self.persist(&new_content).await?;

        *content = new_content;
        info!("Bilingual content updated");
        Ok(())
    }

    async fn reset_content(&self, scope: ResetScope) -> Result<(), ContentStoreError> {
        let mut content = self.content.write().await;
        let defaults = default_content();

        match scope.language() {
            Some(lang) => {
                let mut candidate = content.clone();
                candidate.set(lang, defaults.get(lang).clone());
                self.persist(&candidate).await?;
                *content = candidate;
                info!("Content reset to defaults for language {}", lang);
            }
            None => {
                self.storage
                    .remove(keys::SITE_CONTENT)
                    .await
                    .map_err(|e| ContentStoreError::Storage(e.to_string()))?;
                *content = defaults.clone();
                info!("All content reset to defaults");
            }
        }

        Ok(())
    }
}
