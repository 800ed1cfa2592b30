//! Client error types
//!
//! The taxonomy mirrors how callers react: transport trouble propagates
//! as-is, 401 feeds the refresh path, refresh failure ends the session.
//! Every variant is `Clone` so a single refresh failure can be fanned out
//! to all requests queued behind it.

use thiserror::Error;

/// Errors surfaced by the authenticated client.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// Network unreachable, timeout, or connection failure. No retry at
    /// this layer; retry policy belongs to the caller.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("request to {path} failed with status {status}: {message}")]
    Status { status: u16, path: String, message: String },

    /// Authentication state is unusable (e.g. no refresh token stored).
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The response body could not be decoded into the expected type.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invariant violation inside the client itself.
    #[error("internal client error: {0}")]
    Internal(String),
}

impl ClientError {
    /// HTTP status carried by this error, if it came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error is a 401 response.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = std::result::Result<T, ClientError>;
