//! # HTTP Server
//!
//! Combines the root, course, video and testing routers behind request
//! logging and CORS.

use std::io;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::HttpServerConfig;
use super::course_routes::course_routes;
use super::middleware::log_requests;
use super::root_routes::root_routes;
use super::state::AppState;
use super::testing_routes::testing_routes;
use super::video_routes::video_routes;
use crate::observability::{log_event_with_fields, Event};

/// HTTP server for the course and video API
pub struct HttpServer {
    config: HttpServerConfig,
    state: Arc<AppState>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let state = Arc::new(if config.seed_demo_courses {
            AppState::with_demo_courses()
        } else {
            AppState::new()
        });
        let router = build_router(Arc::clone(&state), &config);
        Self {
            config,
            state,
            router,
        }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Shared state behind the router
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Consume the server, yielding its router
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let addr = listener.local_addr()?.to_string();

        log_event_with_fields(Event::ServerListening, &[("addr", &addr)]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event_with_fields(Event::ServerStopped, &[("addr", &addr)]);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the combined router over `state`
pub fn build_router(state: Arc<AppState>, config: &HttpServerConfig) -> Router {
    let cors = if config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(root_routes())
        .merge(course_routes(Arc::clone(&state)))
        .merge(video_routes(Arc::clone(&state)))
        .merge(testing_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(log_requests))
                .layer(cors),
        )
}

async fn shutdown_signal() {
    // Without a signal handler, serve until the process is killed.
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
