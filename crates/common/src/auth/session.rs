//! Session-event signalling
//!
//! The client core never talks to navigation directly. It fires a
//! [`SessionEvents`] callback when the session ends and the embedding
//! application decides what "route to login" means.

/// Why the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEndReason {
    /// The user logged out explicitly.
    LoggedOut,
    /// A token refresh failed (no refresh token, or the exchange errored).
    RefreshFailed,
}

/// Callback interface invoked on session-ending transitions.
///
/// Supplied by the embedding application (typically to navigate to the
/// login surface). Implementations must be cheap and non-blocking; they
/// are called from request tasks.
pub trait SessionEvents: Send + Sync {
    /// The session has ended; the user must re-authenticate.
    fn session_ended(&self, reason: SessionEndReason);
}

/// No-op handler for contexts without a navigation layer.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSessionEvents;

impl SessionEvents for NoopSessionEvents {
    fn session_ended(&self, _reason: SessionEndReason) {}
}
