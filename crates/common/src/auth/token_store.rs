//! Token persistence over a key-value store
//!
//! Manages the stored token record:
//! - Persists access/refresh tokens plus an issue timestamp
//! - Validity check by age (24 h window by default)
//! - Fail-open reads: storage trouble is logged and reads as "no value",
//!   which then denies authenticated access instead of crashing callers

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use gatescan_domain::constants::TOKEN_VALIDITY_HOURS;
use tracing::{debug, warn};

use super::types::TokenRecord;
use crate::storage::KeyValueStore;

const ACCESS_TOKEN_KEY: &str = "auth.access_token";
const REFRESH_TOKEN_KEY: &str = "auth.refresh_token";
const TOKEN_TIMESTAMP_KEY: &str = "auth.token_timestamp";

/// Domain operations over the persisted token record.
///
/// One instance per process, shared by the authenticated client and the
/// refresh coordinator. Persistence errors never propagate out of this
/// type: writes are logged and dropped, reads are logged and treated as
/// missing values.
pub struct TokenStore<S> {
    store: Arc<S>,
    validity: Duration,
}

impl<S: KeyValueStore> TokenStore<S> {
    /// Create a token store with the default 24 h validity window.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self::with_validity(store, Duration::hours(TOKEN_VALIDITY_HOURS))
    }

    /// Create a token store with a custom validity window.
    #[must_use]
    pub fn with_validity(store: Arc<S>, validity: Duration) -> Self {
        Self { store, validity }
    }

    /// Persist a new access token stamped with the current time.
    ///
    /// The refresh token is written only when supplied (login path); a
    /// refresh that does not rotate it leaves the stored one untouched.
    /// Never fails visibly: storage errors are logged so the caller's
    /// control flow (login, refresh) is not broken by persistence trouble.
    pub async fn set_tokens(&self, access_token: &str, refresh_token: Option<&str>) {
        self.write(ACCESS_TOKEN_KEY, access_token).await;
        self.write(TOKEN_TIMESTAMP_KEY, &Utc::now().timestamp_millis().to_string()).await;

        if let Some(refresh_token) = refresh_token {
            self.write(REFRESH_TOKEN_KEY, refresh_token).await;
        }

        debug!("tokens stored");
    }

    /// Current access token, if any.
    pub async fn access_token(&self) -> Option<String> {
        self.read(ACCESS_TOKEN_KEY).await
    }

    /// Current refresh token, if any.
    pub async fn refresh_token(&self) -> Option<String> {
        self.read(REFRESH_TOKEN_KEY).await
    }

    /// Remove every stored token key (logout, refresh failure).
    pub async fn clear_tokens(&self) {
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, TOKEN_TIMESTAMP_KEY] {
            if let Err(err) = self.store.remove(key).await {
                warn!(key, error = %err, "failed to remove stored value");
            }
        }

        debug!("tokens cleared");
    }

    /// Assemble the stored record, if both access token and timestamp are
    /// present.
    pub async fn record(&self) -> Option<TokenRecord> {
        let access_token = self.read(ACCESS_TOKEN_KEY).await?;
        let issued_at = self.read_timestamp().await?;
        let refresh_token = self.read(REFRESH_TOKEN_KEY).await;

        Some(TokenRecord { access_token, refresh_token, issued_at })
    }

    /// Liveness check: access token and timestamp both present, age within
    /// the validity window.
    ///
    /// Does not validate the token's signature or server-side revocation;
    /// the server is the final authority and answers 401 otherwise.
    pub async fn has_valid_token(&self) -> bool {
        match self.record().await {
            Some(record) => !record.is_expired(self.validity),
            None => false,
        }
    }

    async fn read_timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = self.read(TOKEN_TIMESTAMP_KEY).await?;
        let millis = match raw.parse::<i64>() {
            Ok(millis) => millis,
            Err(err) => {
                warn!(error = %err, "stored token timestamp is not a number");
                return None;
            }
        };

        Utc.timestamp_millis_opt(millis).single()
    }

    async fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "failed to read stored value");
                None
            }
        }
    }

    async fn write(&self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value).await {
            warn!(key, error = %err, "failed to persist value");
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for auth::token_store.
    use super::*;
    use crate::storage::KeyValueStore;
    use crate::testing::{FailingStore, MemoryStore};

    fn create_store() -> TokenStore<MemoryStore> {
        TokenStore::new(Arc::new(MemoryStore::new()))
    }

    /// Validates `TokenStore::set_tokens` behavior for the login path
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms `access_token()` equals `Some("T1")`.
    /// - Confirms `refresh_token()` equals `Some("R1")`.
    /// - Ensures `has_valid_token()` evaluates to true immediately after.
    #[tokio::test]
    async fn test_set_tokens_with_refresh() {
        let tokens = create_store();

        tokens.set_tokens("T1", Some("R1")).await;

        assert_eq!(tokens.access_token().await, Some("T1".to_string()));
        assert_eq!(tokens.refresh_token().await, Some("R1".to_string()));
        assert!(tokens.has_valid_token().await);
    }

    /// Validates `TokenStore::set_tokens` behavior for the refresh path
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms the access token is replaced.
    /// - Confirms the stored refresh token is left untouched.
    #[tokio::test]
    async fn test_refresh_keeps_existing_refresh_token() {
        let tokens = create_store();

        tokens.set_tokens("T1", Some("R1")).await;
        tokens.set_tokens("T2", None).await;

        assert_eq!(tokens.access_token().await, Some("T2".to_string()));
        assert_eq!(tokens.refresh_token().await, Some("R1".to_string()));
    }

    /// Validates `TokenStore::clear_tokens` behavior for the logout
    /// scenario.
    ///
    /// Assertions:
    /// - Ensures every token accessor returns `None` afterwards.
    /// - Ensures `has_valid_token()` evaluates to false.
    #[tokio::test]
    async fn test_clear_tokens() {
        let tokens = create_store();

        tokens.set_tokens("T1", Some("R1")).await;
        tokens.clear_tokens().await;

        assert_eq!(tokens.access_token().await, None);
        assert_eq!(tokens.refresh_token().await, None);
        assert!(!tokens.has_valid_token().await);
    }

    /// Validates `TokenStore::has_valid_token` behavior for the aged token
    /// scenario.
    ///
    /// Assertions:
    /// - Ensures a token older than the window reads as invalid even though
    ///   the access token is still present.
    #[tokio::test]
    async fn test_has_valid_token_rejects_aged_token() {
        let store = Arc::new(MemoryStore::new());
        let tokens = TokenStore::new(store.clone());

        tokens.set_tokens("T1", None).await;

        // Backdate the stored timestamp past the 24 h window.
        let stale = (Utc::now() - Duration::hours(25)).timestamp_millis();
        store.set(TOKEN_TIMESTAMP_KEY, &stale.to_string()).await.unwrap();

        assert!(!tokens.has_valid_token().await);
        assert_eq!(tokens.access_token().await, Some("T1".to_string()));
    }

    /// Validates `TokenStore::has_valid_token` behavior for the missing
    /// field scenarios.
    ///
    /// Assertions:
    /// - Ensures a missing timestamp reads as invalid.
    /// - Ensures a missing access token reads as invalid.
    #[tokio::test]
    async fn test_has_valid_token_requires_both_fields() {
        let store = Arc::new(MemoryStore::new());
        let tokens = TokenStore::new(store.clone());

        // Access token without timestamp
        store.set(ACCESS_TOKEN_KEY, "T1").await.unwrap();
        assert!(!tokens.has_valid_token().await);

        // Timestamp without access token
        store.remove(ACCESS_TOKEN_KEY).await.unwrap();
        store.set(TOKEN_TIMESTAMP_KEY, &Utc::now().timestamp_millis().to_string()).await.unwrap();
        assert!(!tokens.has_valid_token().await);
    }

    /// Validates `TokenStore::has_valid_token` behavior for the corrupt
    /// timestamp scenario.
    ///
    /// Assertions:
    /// - Ensures a non-numeric stored timestamp reads as invalid rather
    ///   than panicking.
    #[tokio::test]
    async fn test_corrupt_timestamp_reads_as_invalid() {
        let store = Arc::new(MemoryStore::new());
        let tokens = TokenStore::new(store.clone());

        store.set(ACCESS_TOKEN_KEY, "T1").await.unwrap();
        store.set(TOKEN_TIMESTAMP_KEY, "not-a-number").await.unwrap();

        assert!(!tokens.has_valid_token().await);
    }

    /// Validates fail-open behavior when the backing store errors.
    ///
    /// Assertions:
    /// - Ensures `set_tokens` and `clear_tokens` complete without
    ///   propagating the storage failure.
    /// - Ensures reads degrade to `None` / invalid.
    #[tokio::test]
    async fn test_storage_errors_never_propagate() {
        let tokens = TokenStore::new(Arc::new(FailingStore));

        tokens.set_tokens("T1", Some("R1")).await;
        tokens.clear_tokens().await;

        assert_eq!(tokens.access_token().await, None);
        assert_eq!(tokens.refresh_token().await, None);
        assert!(!tokens.has_valid_token().await);
    }

    /// Validates `TokenStore::record` assembly from stored keys.
    ///
    /// Assertions:
    /// - Ensures the assembled record carries both tokens and a timestamp
    ///   close to now.
    #[tokio::test]
    async fn test_record_assembly() {
        let tokens = create_store();

        tokens.set_tokens("T1", Some("R1")).await;

        let record = tokens.record().await.unwrap();
        assert_eq!(record.access_token, "T1");
        assert_eq!(record.refresh_token, Some("R1".to_string()));
        assert!(record.age() < Duration::seconds(5));
    }
}
