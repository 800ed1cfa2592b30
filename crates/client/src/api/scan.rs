//! Ticket scan verification service

use std::sync::Arc;

use gatescan_common::storage::{FileStore, KeyValueStore};
use gatescan_domain::{ScanVerifyRequest, ScanVerifyResponse};
use tracing::instrument;

use crate::http::client::ApiClient;
use crate::http::errors::ClientResult;

const SCAN_VERIFY_PATH: &str = "/scan/verify";

/// Scan verification endpoint.
pub struct ScanApi<S: KeyValueStore = FileStore> {
    client: Arc<ApiClient<S>>,
}

impl<S: KeyValueStore> ScanApi<S> {
    #[must_use]
    pub fn new(client: Arc<ApiClient<S>>) -> Self {
        Self { client }
    }

    /// Verify one scanned ticket code against the backend.
    ///
    /// # Errors
    /// Returns error if the request fails or the payload cannot be
    /// decoded. A rejected code (already scanned, unknown) comes back as
    /// a status error carrying the backend's message.
    #[instrument(skip_all, fields(event_id = %request.event_id))]
    pub async fn verify(&self, request: &ScanVerifyRequest) -> ClientResult<ScanVerifyResponse> {
        self.client.post(SCAN_VERIFY_PATH, request).await
    }
}
