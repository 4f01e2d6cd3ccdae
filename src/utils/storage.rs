//! Key-value storage seam for persisted CLI state.
//!
//! The host application owns persistence (browser localStorage, a file, a
//! settings database). This crate only sees it through [`KeyValueStore`] and
//! stores values as JSON strings, the way a browser storage backend would.

use std::collections::HashMap;

use serde::{Serialize, de::DeserializeOwned};

use crate::core::error::StorageError;

/// A string-to-string key-value store.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&mut self, key: &str);
}

/// In-memory [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}

/// Get stored data.
///
/// Returns `None` if the key doesn't exist or deserialization fails.
pub fn get<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let json = store.get_item(key)?;
    serde_json::from_str(&json).ok()
}

/// Store data as JSON.
pub fn set<T: Serialize>(
    store: &mut impl KeyValueStore,
    key: &str,
    data: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(data).map_err(|source| StorageError::Serialization {
        key: key.to_string(),
        source,
    })?;
    store.set_item(key, &json)
}
