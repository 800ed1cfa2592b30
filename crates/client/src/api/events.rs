//! Event listing and statistics service

use std::sync::Arc;

use gatescan_common::storage::{FileStore, KeyValueStore};
use gatescan_domain::{Event, EventSummary, Page};

use crate::http::client::ApiClient;
use crate::http::errors::ClientResult;

/// Event endpoints for the authenticated staff member.
pub struct EventsApi<S: KeyValueStore = FileStore> {
    client: Arc<ApiClient<S>>,
}

impl<S: KeyValueStore> EventsApi<S> {
    #[must_use]
    pub fn new(client: Arc<ApiClient<S>>) -> Self {
        Self { client }
    }

    /// List the events this account can scan for.
    ///
    /// # Errors
    /// Returns error if the request fails or the payload cannot be
    /// decoded.
    pub async fn events(&self, page: u32, page_size: u32) -> ClientResult<Page<Event>> {
        self.client.get(&format!("/scan/events?page={page}&pageSize={page_size}")).await
    }

    /// Ticket statistics for a single event.
    ///
    /// # Errors
    /// Returns error if the request fails or the payload cannot be
    /// decoded.
    pub async fn event_summary(&self, event_id: &str) -> ClientResult<EventSummary> {
        self.client.get(&format!("/events/{event_id}/summary")).await
    }
}
