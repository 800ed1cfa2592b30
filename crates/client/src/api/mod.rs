//! Typed API services
//!
//! Thin endpoint wrappers over [`ApiClient`](crate::http::client::ApiClient),
//! one service per backend area. All auth-header and refresh handling is
//! inherited from the client; these types only know paths and payloads.

pub mod auth;
pub mod events;
pub mod invites;
pub mod scan;

pub use auth::AuthApi;
pub use events::EventsApi;
pub use invites::InvitesApi;
pub use scan::ScanApi;
