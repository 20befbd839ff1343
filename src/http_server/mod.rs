//! # HTTP Server Module
//!
//! Axum server for the course and video API.
//!
//! # Endpoints
//!
//! - `/` - Greeting
//! - `/health` - Health check
//! - `/courses`, `/courses/:id` - Course CRUD
//! - `/videos`, `/videos/:id` - Video CRUD
//! - `/testing/all-data`, `/__test__/db` - Wipe all data

pub mod config;
pub mod course_routes;
pub mod extract;
pub mod middleware;
pub mod root_routes;
pub mod server;
pub mod state;
pub mod testing_routes;
pub mod video_routes;

pub use config::{ConfigError, HttpServerConfig, PORT_ENV};
pub use server::{build_router, HttpServer};
pub use state::AppState;
