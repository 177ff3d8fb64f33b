//! HTTP API.
//!
//! Thin axum layer over the triage pipeline: request parsing, error mapping,
//! and server lifecycle. All decisions live in `pipeline::triage`.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_server, ApiServer};
pub use types::ApiContext;
