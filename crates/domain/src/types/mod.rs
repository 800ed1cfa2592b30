//! Domain types and models
//!
//! Wire-format payloads exchanged with the scanning backend. All types
//! serialize with `camelCase` field names to match the JSON API.

pub mod auth;
pub mod event;
pub mod invite;
pub mod password;
pub mod scan;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use auth::{
    LoginRequest, LoginResponse, RefreshTokenRequest, RefreshTokenResponse, User,
};
pub use event::{Event, EventSummary, ScanTotals, TicketSummary};
pub use invite::{AcceptInviteResponse, PendingInvite, ScopePreview};
pub use password::{
    ResetPasswordInitiateRequest, ResetPasswordInitiateResponse, ResetPasswordSubmitRequest,
    ResetPasswordSubmitResponse, VerifyOtpRequest, VerifyOtpResponse,
};
pub use scan::{ScanMethod, ScanRecord, ScanStats, ScanVerifyRequest, ScanVerifyResponse, ScannedTicket};

/// Paginated listing envelope used by event and invite endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl<T> Page<T> {
    /// Whether a further page exists beyond this one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        u64::from(self.page) * u64::from(self.page_size) < self.total
    }
}

/// Error payload returned by the backend on failed requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}: {}", self.message, cause),
            None => write!(f, "{}", self.message),
        }
    }
}
