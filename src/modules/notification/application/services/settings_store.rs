use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::shared::storage::KeyValueStore;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// One small settings record under its own storage key.
///
/// `update` replaces the record wholesale; memory changes only after the
/// storage write succeeded.
pub struct SettingsStore<S> {
    storage: Arc<dyn KeyValueStore>,
    key: &'static str,
    current: Mutex<S>,
}

impl<S> SettingsStore<S>
where
    S: Serialize + DeserializeOwned + Default + Clone + Send,
{
    /// Absent or corrupt data yields `S::default()`.
    pub async fn load(storage: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        let current = match storage.get(key).await {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(key, "Stored settings are unreadable, using defaults: {}", e);
                S::default()
            }),
            Ok(None) => S::default(),
            Err(e) => {
                warn!(key, "Failed to read settings, using defaults: {}", e);
                S::default()
            }
        };

        Self {
            storage,
            key,
            current: Mutex::new(current),
        }
    }

    pub async fn get(&self) -> S {
        self.current.lock().await.clone()
    }

    pub async fn update(&self, settings: S) -> Result<S, SettingsError> {
        let mut current = self.current.lock().await;

        let json = serde_json::to_string(&settings)
            .map_err(|e| SettingsError::Serialization(e.to_string()))?;
        self.storage
            .set(self.key, &json)
            .await
            .map_err(|e| SettingsError::Storage(e.to_string()))?;

        *current = settings.clone();
        info!(key = self.key, "Settings updated");
        Ok(settings)
    }
}
