//! Root HTTP Routes
//!
//! Greeting at `/` and a health check at `/health`.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

/// Plain-text body of `GET /`
pub const GREETING: &str = "Hello World!";

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create root routes
pub fn root_routes() -> Router {
    Router::new()
        .route("/", get(greeting_handler))
        .route("/health", get(health_handler))
}

async fn greeting_handler() -> &'static str {
    GREETING
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("ok"));
    }
}
