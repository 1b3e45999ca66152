//! Key-value persistence used by the session and token stores.
//!
//! Implementations live in sibling modules: [`crate::memory`] for tests and
//! native builds, [`crate::local`] for the browser's `localStorage`.

/// Error raised when a value cannot be written.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Synchronous string key-value storage.
///
/// Reads never fail: a missing or unreadable entry is `None`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}
