use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::key_value_store::{KeyValueStore, StorageError};

/// Process-local storage. Used by tests and by `DATA_DIR=:memory:` runs.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries_mut().insert(key.to_string(), value.to_string());
        self
    }

    /// Synchronous peek used by assertions.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries_mut().get(key).cloned()
    }

    fn entries_mut(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries_mut().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries_mut().remove(key);
        Ok(())
    }
}
