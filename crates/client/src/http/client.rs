//! Authenticated API client
//!
//! Every call passes through two hooks around the transport:
//!
//! - **Outgoing**: public endpoints (login, password reset, refresh) go
//!   out untouched with no token lookup and no Authorization header. All other
//!   requests get `Authorization: Bearer <token>` when a token is stored.
//!   Requests are always attempted even when the stored token looks
//!   stale; the server's 401 plus the refresh path is the authority
//!   (see `ClientConfig` docs for the rationale).
//! - **Incoming**: a 401 on a non-public, not-yet-retried request
//!   triggers a coordinated token refresh and one transparent replay
//!   with the new token. Every other failure propagates unchanged.

use std::sync::Arc;

use gatescan_common::auth::{SessionEvents, TokenStore};
use gatescan_common::storage::{FileStore, KeyValueStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use super::errors::{ClientError, ClientResult};
use super::refresh::RefreshCoordinator;
use super::request::RequestDescriptor;
use super::transport::{ApiResponse, HttpTransport};
use crate::config::ClientConfig;

/// Token-aware HTTP client.
///
/// One instance per process, shared behind an `Arc` by the typed API
/// services. The storage backend and the session-event handler are
/// injected; the refresh coordinator is constructed here so its
/// single-instance semantics hold without global state.
pub struct ApiClient<S: KeyValueStore = FileStore> {
    transport: HttpTransport,
    tokens: Arc<TokenStore<S>>,
    refresher: RefreshCoordinator<S>,
    session: Arc<dyn SessionEvents>,
    public_paths: Vec<String>,
}

impl<S: KeyValueStore> ApiClient<S> {
    /// Wire up a client from configuration, a storage backend, and a
    /// session-event handler.
    ///
    /// # Errors
    /// Returns `ClientError::Config` if the HTTP transport cannot be
    /// built.
    pub fn new(
        config: ClientConfig,
        store: Arc<S>,
        session: Arc<dyn SessionEvents>,
    ) -> ClientResult<Self> {
        let transport = HttpTransport::new(config.base_url.clone(), config.timeout())?;
        let tokens = Arc::new(TokenStore::new(store));
        let refresher = RefreshCoordinator::new(
            tokens.clone(),
            transport.clone(),
            session.clone(),
            config.refresh_path.clone(),
        );

        Ok(Self { transport, tokens, refresher, session, public_paths: config.public_paths })
    }

    /// The shared token store.
    #[must_use]
    pub fn token_store(&self) -> Arc<TokenStore<S>> {
        self.tokens.clone()
    }

    /// The injected session-event handler.
    #[must_use]
    pub fn session_events(&self) -> Arc<dyn SessionEvents> {
        self.session.clone()
    }

    /// Liveness check on the stored token (presence + age). UI layers use
    /// this to gate navigation; requests themselves are not blocked on it.
    pub async fn has_valid_token(&self) -> bool {
        self.tokens.has_valid_token().await
    }

    /// Whether `path` is exempt from authentication and refresh handling.
    pub(crate) fn is_public(&self, path: &str) -> bool {
        self.public_paths.iter().any(|public| path.contains(public.as_str()))
    }

    /// Sole entry point: send a request through both hooks.
    ///
    /// # Errors
    /// - the original error for non-401 failures, 401s on public paths,
    ///   and 401s on already-retried requests
    /// - the refresh failure when the coordinated refresh dies (tokens
    ///   are cleared and the session-end signal has fired by then)
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn request(&self, mut request: RequestDescriptor) -> ClientResult<ApiResponse> {
        let public = self.is_public(&request.path);

        if !public {
            if let Some(token) = self.tokens.access_token().await {
                request.bearer(&token)?;
            }
        }

        match self.transport.send(&request).await {
            Err(err) if err.is_unauthorized() && !public && !request.is_retried() => {
                debug!(path = %request.path, "unauthorized response, refreshing token");
                request.mark_retried();

                let token = self.refresher.refresh().await?;
                request.bearer(&token)?;
                self.transport.send(&request).await
            }
            other => other,
        }
    }

    /// GET `path` and deserialize the response body.
    ///
    /// # Errors
    /// Returns error if the request fails or the body does not match `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.request(RequestDescriptor::get(path)).await?.json()
    }

    /// POST `body` to `path` and deserialize the response body.
    ///
    /// # Errors
    /// Returns error if the body cannot be serialized, the request fails,
    /// or the response does not match `R`.
    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<R> {
        let body = serde_json::to_value(body)
            .map_err(|err| ClientError::Internal(format!("failed to encode body: {err}")))?;
        self.request(RequestDescriptor::post(path, body)).await?.json()
    }

    /// POST to `path` with no body and deserialize the response.
    ///
    /// # Errors
    /// Returns error if the request fails or the response does not match
    /// `R`.
    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> ClientResult<R> {
        self.request(RequestDescriptor::new(reqwest::Method::POST, path)).await?.json()
    }
}
