//! Request logging middleware

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

use crate::observability::{log_event_with_fields, Event};

/// Emit one `REQUEST_COMPLETE` line per request
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    log_event_with_fields(
        Event::RequestComplete,
        &[
            ("method", &method),
            ("path", &path),
            ("status", response.status().as_str()),
            ("duration_ms", &started.elapsed().as_millis().to_string()),
        ],
    );
    response
}
