//! JSON-file-backed key-value store
//!
//! One JSON object per store file. Writes go through a temp file and an
//! atomic rename so a crash mid-write never corrupts the store. Suitable
//! for the small handful of keys this SDK persists (tokens, timestamps).

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use super::error::StorageResult;
use super::store::KeyValueStore;

/// Persistent [`KeyValueStore`] backed by a single JSON file.
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles; plain reads go lock-free since
    // the rename on the write path is atomic.
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Create a store backed by the file at `path`.
    ///
    /// The file and its parent directory are created lazily on first
    /// write; a missing file reads as an empty store.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), write_lock: Mutex::new(()) }
    }

    async fn read_map(&self) -> StorageResult<HashMap<String, String>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn write_map(&self, map: &HashMap<String, String>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        let bytes = serde_json::to_vec(map)?;
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!(path = %self.path.display(), entries = map.len(), "store written");
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.read_map().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map).await
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map().await?;
        if map.remove(key).is_some() {
            self.write_map(&map).await?;
        }
        Ok(())
    }
}
