//! Key-value store trait and the in-memory implementation.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::types::errors::StorageError;

/// Asynchronous persistent key-value store.
///
/// Values are opaque strings; callers layer their own encoding (the
/// bookmark store and session manager both use JSON). Implementations must
/// be shareable across tasks.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value for `key`, or `None` if nothing is stored.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Non-durable store backed by a `HashMap`.
///
/// Used by tests and the demo binary; everything is lost on drop.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
