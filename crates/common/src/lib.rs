//! Shared infrastructure for the GateScan SDK.
//!
//! This crate provides the persistent key-value store abstraction, the
//! token store built on top of it, and session-event signalling. The HTTP
//! client in `gatescan-client` consumes these through injection so the
//! storage backend and the navigation layer both stay swappable.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod auth;
pub mod storage;
pub mod testing;

// Re-export commonly used types for convenience
pub use auth::{SessionEndReason, SessionEvents, TokenRecord, TokenStore};
pub use storage::{FileStore, KeyValueStore, StorageError, StorageResult};
