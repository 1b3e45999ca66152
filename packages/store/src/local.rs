//! # `localStorage` key-value store: browser-side persistence
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the **web platform**. It is a
//! zero-size handle that looks up `window.localStorage` on every call, so it can be
//! cloned freely into contexts and API clients.
//!
//! Reads swallow errors (a blocked or missing storage reads as empty). Writes
//! report failures so the caller can log them; the in-memory session stays
//! authoritative for the current page either way.

use crate::kv::{KeyValueStore, StorageError};

/// `window.localStorage`-backed store.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
