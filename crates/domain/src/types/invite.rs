//! Staff invite types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimal event context shown with a pending invite.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopePreview {
    pub event_name: String,
}

/// An invite awaiting acceptance by the current account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingInvite {
    pub id: String,
    pub email_masked: String,
    pub role: String,
    pub scope_preview: ScopePreview,
    pub expires_at: DateTime<Utc>,
    pub event_image: String,
    pub event_start_date: String,
}

/// Result of accepting an invite.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptInviteResponse {
    pub user_id: String,
    pub email: String,
    pub role_attached: String,
    pub accepted_at: DateTime<Utc>,
}
