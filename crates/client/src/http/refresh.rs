//! Single-flight token refresh
//!
//! At most one refresh call is in flight per process. The first request
//! to hit a 401 becomes the refresher; requests that fail while the
//! refresh is pending suspend on a queue and are resolved in FIFO order
//! once it settles: with the new token on success, or with a clone of
//! the same failure when the refresh dies. A failed refresh clears the
//! stored tokens and fires the session-end signal exactly once.

use std::mem;
use std::sync::Arc;

use gatescan_common::auth::{SessionEndReason, SessionEvents, TokenStore};
use gatescan_common::storage::KeyValueStore;
use gatescan_domain::{RefreshTokenRequest, RefreshTokenResponse};
use parking_lot::Mutex;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use super::errors::{ClientError, ClientResult};
use super::request::RequestDescriptor;
use super::transport::HttpTransport;

/// Idle/Refreshing flag plus the queue of suspended callers.
enum RefreshState {
    Idle,
    Refreshing { waiters: Vec<oneshot::Sender<ClientResult<String>>> },
}

/// Coordinates access-token refresh across concurrent requests.
///
/// Constructed once per [`ApiClient`](super::client::ApiClient) and
/// shared by reference. The Idle→Refreshing transition happens under a
/// synchronous lock that is never held across an await, so exactly one
/// caller observes Idle and becomes the refresher.
pub struct RefreshCoordinator<S> {
    tokens: Arc<TokenStore<S>>,
    transport: HttpTransport,
    session: Arc<dyn SessionEvents>,
    refresh_path: String,
    state: Mutex<RefreshState>,
}

impl<S: KeyValueStore> RefreshCoordinator<S> {
    pub(crate) fn new(
        tokens: Arc<TokenStore<S>>,
        transport: HttpTransport,
        session: Arc<dyn SessionEvents>,
        refresh_path: String,
    ) -> Self {
        Self { tokens, transport, session, refresh_path, state: Mutex::new(RefreshState::Idle) }
    }

    /// Obtain a fresh access token, collapsing concurrent callers into a
    /// single refresh network call.
    ///
    /// # Errors
    /// Returns the refresh failure (the same value for the refresher and
    /// every queued caller). By the time an error is returned the stored
    /// tokens are cleared and the session-end signal has fired.
    pub async fn refresh(&self) -> ClientResult<String> {
        let waiter = {
            let mut state = self.state.lock();
            match &mut *state {
                RefreshState::Refreshing { waiters } => {
                    let (tx, rx) = oneshot::channel();
                    waiters.push(tx);
                    Some(rx)
                }
                RefreshState::Idle => {
                    *state = RefreshState::Refreshing { waiters: Vec::new() };
                    None
                }
            }
        };

        if let Some(rx) = waiter {
            debug!("refresh already in flight, waiting for it to settle");
            return rx.await.map_err(|_| {
                ClientError::Internal("refresh coordinator dropped without settling".to_string())
            })?;
        }

        info!("refreshing access token");
        let outcome = self.execute_refresh().await;

        let waiters = {
            let mut state = self.state.lock();
            match mem::replace(&mut *state, RefreshState::Idle) {
                RefreshState::Refreshing { waiters } => waiters,
                RefreshState::Idle => Vec::new(),
            }
        };

        debug!(queued = waiters.len(), "refresh settled, draining queue");
        for waiter in waiters {
            // A dropped receiver means the caller abandoned interest;
            // the entry is still consumed exactly once.
            let _ = waiter.send(outcome.clone());
        }

        outcome
    }

    /// Run the actual refresh exchange. Only the refresher reaches this.
    async fn execute_refresh(&self) -> ClientResult<String> {
        let Some(refresh_token) = self.tokens.refresh_token().await else {
            warn!("no refresh token available, ending session");
            self.end_session().await;
            return Err(ClientError::Auth("no refresh token available".to_string()));
        };

        match self.exchange(refresh_token).await {
            Ok(response) => {
                // A rotated refresh token is persisted; otherwise only the
                // access token and timestamp are replaced.
                self.tokens
                    .set_tokens(&response.access_token, response.refresh_token.as_deref())
                    .await;
                info!("access token refreshed");
                Ok(response.access_token)
            }
            Err(err) => {
                warn!(error = %err, "token refresh failed, ending session");
                self.end_session().await;
                Err(err)
            }
        }
    }

    async fn exchange(&self, refresh_token: String) -> ClientResult<RefreshTokenResponse> {
        let body = serde_json::to_value(RefreshTokenRequest { refresh_token })
            .map_err(|err| ClientError::Internal(format!("failed to encode refresh body: {err}")))?;

        let request = RequestDescriptor::post(self.refresh_path.clone(), body);
        self.transport.send(&request).await?.json()
    }

    async fn end_session(&self) {
        self.tokens.clear_tokens().await;
        self.session.session_ended(SessionEndReason::RefreshFailed);
    }
}
