//! Authenticated HTTP client core
//!
//! Module layering, leaf first:
//!
//! - **[`errors`]**: client error taxonomy
//! - **[`request`]**: the request descriptor and its retried flag
//! - **[`transport`]**: reqwest wire layer producing typed results
//! - **[`refresh`]**: single-flight refresh coordination with a FIFO
//!   queue of suspended requests
//! - **[`client`]**: the authorization/recovery hooks around the
//!   transport

pub mod client;
pub mod errors;
pub mod refresh;
pub mod request;
pub mod transport;
