//! HTTP surface.
//!
//! Exposes the diagnosis engine and the patient chat as JSON endpoints.
//! `api_router()` returns a `Router` that can be mounted on any axum
//! server; `server` owns the listener lifecycle.

pub mod endpoints;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_server_on, ServerError, ServerHandle, ServerSession};
pub use types::ApiContext;
