//! Request descriptor
//!
//! One logical API call as seen by the client hooks: method, path,
//! headers, optional JSON body, and the retried flag that caps the
//! 401-refresh path at a single replay.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Method;
use serde_json::Value;

use super::errors::{ClientError, ClientResult};

/// Descriptor for one logical API call.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    /// Path relative to the configured base URL, including any query.
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
    // Once set this flag is never cleared for the descriptor's lifetime,
    // so a request is replayed after refresh at most once.
    retried: bool,
}

impl RequestDescriptor {
    /// Create a descriptor with no headers or body.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), headers: HeaderMap::new(), body: None, retried: false }
    }

    /// Convenience constructor for a GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Convenience constructor for a POST request with a JSON body.
    #[must_use]
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        let mut descriptor = Self::new(Method::POST, path);
        descriptor.body = Some(body);
        descriptor
    }

    /// Set the `Authorization: Bearer <token>` header, replacing any
    /// previous value.
    ///
    /// # Errors
    /// Returns `ClientError::Config` if the token contains characters
    /// that are invalid in an HTTP header.
    pub fn bearer(&mut self, token: &str) -> ClientResult<()> {
        let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
            ClientError::Config("access token contains invalid header characters".to_string())
        })?;
        self.headers.insert(AUTHORIZATION, value);
        Ok(())
    }

    /// Whether this descriptor has already been replayed after a refresh.
    #[must_use]
    pub fn is_retried(&self) -> bool {
        self.retried
    }

    /// Mark the descriptor as replayed. Irreversible.
    pub(crate) fn mark_retried(&mut self) {
        self.retried = true;
    }
}
