//! Token lifecycle and session signalling
//!
//! This module owns the client-side view of an authenticated session:
//!
//! - **[`types`]**: the stored token record and its validity window
//! - **[`token_store`]**: persistence of tokens over a [`KeyValueStore`]
//! - **[`session`]**: the session-event callback the core fires when the
//!   user must be routed back to the login surface
//!
//! Validity here is a liveness check only (token present and not older
//! than the configured window). The server remains the authority on
//! whether a token is actually accepted; it answers 401 otherwise.
//!
//! [`KeyValueStore`]: crate::storage::KeyValueStore

pub mod session;
pub mod token_store;
pub mod types;

// Re-export commonly used types
pub use session::{NoopSessionEvents, SessionEndReason, SessionEvents};
pub use token_store::TokenStore;
pub use types::TokenRecord;
