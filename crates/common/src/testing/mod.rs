//! Test doubles for storage and session signalling
//!
//! In-memory implementations used by unit and integration tests across
//! the workspace. Kept in the library (not behind a feature) so the
//! client crate's tests can reuse them.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::auth::{SessionEndReason, SessionEvents};
use crate::storage::{KeyValueStore, StorageError, StorageResult};

/// In-memory [`KeyValueStore`] for deterministic tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// [`KeyValueStore`] whose every operation fails, for fail-open tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Backend(format!("injected read failure for {key}")))
    }

    async fn set(&self, key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Backend(format!("injected write failure for {key}")))
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        Err(StorageError::Backend(format!("injected remove failure for {key}")))
    }
}

/// [`SessionEvents`] double that records every emitted event.
#[derive(Debug, Default)]
pub struct RecordingSessionEvents {
    count: AtomicUsize,
    last_reason: Mutex<Option<SessionEndReason>>,
}

impl RecordingSessionEvents {
    /// Create a recorder with no events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `session_ended` fired.
    #[must_use]
    pub fn ended_count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reason of the most recent event, if any fired.
    #[must_use]
    pub fn last_reason(&self) -> Option<SessionEndReason> {
        *self.last_reason.lock()
    }
}

impl SessionEvents for RecordingSessionEvents {
    fn session_ended(&self, reason: SessionEndReason) {
        self.count.fetch_add(1, Ordering::SeqCst);
        *self.last_reason.lock() = Some(reason);
    }
}
