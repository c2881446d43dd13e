mod file_store;
mod key_value_store;
mod memory_store;

pub use file_store::FileKeyValueStore;
pub use key_value_store::{keys, KeyValueStore, StorageError};
pub use memory_store::InMemoryKeyValueStore;
