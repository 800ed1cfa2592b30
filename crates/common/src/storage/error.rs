//! Storage error types

use thiserror::Error;

/// Errors raised by [`KeyValueStore`](super::KeyValueStore) backends.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Result type alias for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;
