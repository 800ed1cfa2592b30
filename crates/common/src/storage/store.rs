//! Key-value store trait
//!
//! Abstracts persistent storage to enable testing with in-memory doubles
//! and to support different backends (file store, platform storage).

use async_trait::async_trait;

use super::error::StorageResult;

/// Async string-keyed persistent storage.
///
/// Implementations must tolerate concurrent calls; each operation is
/// independently fallible and callers decide whether an error is fatal.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    /// `Ok(None)` when the key has never been set or was removed.
    ///
    /// # Errors
    /// Returns error if the backing store cannot be read.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns error if the backing store cannot be written.
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove the value stored under `key` (idempotent).
    ///
    /// # Errors
    /// Returns error if the backing store cannot be written.
    async fn remove(&self, key: &str) -> StorageResult<()>;
}
