//! Staff invite service

use std::sync::Arc;

use gatescan_common::storage::{FileStore, KeyValueStore};
use gatescan_domain::{AcceptInviteResponse, Page, PendingInvite};

use crate::http::client::ApiClient;
use crate::http::errors::ClientResult;

/// Invite endpoints for the authenticated staff member.
pub struct InvitesApi<S: KeyValueStore = FileStore> {
    client: Arc<ApiClient<S>>,
}

impl<S: KeyValueStore> InvitesApi<S> {
    #[must_use]
    pub fn new(client: Arc<ApiClient<S>>) -> Self {
        Self { client }
    }

    /// List invites waiting on this account.
    ///
    /// # Errors
    /// Returns error if the request fails or the payload cannot be
    /// decoded.
    pub async fn pending_invites(
        &self,
        page: u32,
        page_size: u32,
    ) -> ClientResult<Page<PendingInvite>> {
        self.client
            .get(&format!("/invites/me/pending-invites?page={page}&pageSize={page_size}"))
            .await
    }

    /// Accept an invite by id.
    ///
    /// # Errors
    /// Returns error if the request fails or the payload cannot be
    /// decoded.
    pub async fn accept_invite(&self, invite_id: &str) -> ClientResult<AcceptInviteResponse> {
        self.client.post_empty(&format!("/invites/{invite_id}/accept")).await
    }
}
