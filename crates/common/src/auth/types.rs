//! Stored token record

use chrono::{DateTime, Duration, Utc};

/// Tokens held for the current session, with their issue timestamp.
///
/// Created on successful login or refresh. A refresh replaces the access
/// token and timestamp; the refresh token survives unless the server
/// rotates it. Logout, refresh failure, and an unrecoverable 401 destroy
/// the record.
#[derive(Debug, Clone)]
pub struct TokenRecord {
    /// Bearer credential attached to authenticated requests.
    pub access_token: String,

    /// Credential exchanged for a new access token without
    /// re-authentication. Absent until a login has completed.
    pub refresh_token: Option<String>,

    /// When the access token was stored.
    pub issued_at: DateTime<Utc>,
}

impl TokenRecord {
    /// Create a record stamped with the current time.
    #[must_use]
    pub fn new(access_token: String, refresh_token: Option<String>) -> Self {
        Self { access_token, refresh_token, issued_at: Utc::now() }
    }

    /// Age of the access token.
    #[must_use]
    pub fn age(&self) -> Duration {
        Utc::now() - self.issued_at
    }

    /// Whether the access token has outlived `validity`.
    #[must_use]
    pub fn is_expired(&self, validity: Duration) -> bool {
        self.age() > validity
    }
}
