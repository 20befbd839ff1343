//! videohub - a minimal in-memory HTTP API for courses and videos
//!
//! Two resource collections share one shape: a process-memory store, a
//! validator, a service holding the lifecycle rules, and axum routes.

pub mod cli;
pub mod courses;
pub mod errors;
pub mod http_server;
pub mod observability;
pub mod store;
pub mod videos;

pub use errors::{ApiError, ApiResult};
pub use http_server::{build_router, AppState, HttpServer, HttpServerConfig};
