//! # GateScan Client
//!
//! The token-aware HTTP client at the core of the GateScan companion SDK:
//! bearer-token injection for outgoing requests, public-endpoint bypass,
//! 401 detection, and transparent access-token refresh with single-flight
//! coordination across concurrent requests.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  api services    │  Typed endpoints (auth, events, scan, invites)
//! └────────┬─────────┘
//!          │
//!          ├──► ApiClient           (hooks: auth header, 401 recovery)
//!          │         │
//!          │         ├──► RefreshCoordinator  (single-flight refresh)
//!          │         └──► HttpTransport       (reqwest wire layer)
//!          │
//!          └──► TokenStore          (persisted tokens, validity window)
//! ```
//!
//! The embedding application supplies a [`KeyValueStore`] backend and a
//! [`SessionEvents`] handler; everything else is wired by
//! [`ApiClient::new`].
//!
//! [`KeyValueStore`]: gatescan_common::storage::KeyValueStore
//! [`SessionEvents`]: gatescan_common::auth::SessionEvents

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod api;
pub mod config;
pub mod http;

// Re-export commonly used types
pub use api::{AuthApi, EventsApi, InvitesApi, ScanApi};
pub use config::ClientConfig;
pub use http::client::ApiClient;
pub use http::errors::{ClientError, ClientResult};
pub use http::refresh::RefreshCoordinator;
pub use http::request::RequestDescriptor;
pub use http::transport::{ApiResponse, HttpTransport};
