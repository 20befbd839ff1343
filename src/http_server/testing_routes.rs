//! Testing HTTP Routes
//!
//! Wipes every collection between test scenarios. No authorization.
//! Served at both `/testing/all-data` and `/__test__/db`.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::delete, Router};

use super::state::AppState;
use crate::errors::ApiResult;

/// Create testing routes
pub fn testing_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/testing/all-data", delete(clear_all_handler))
        .route("/__test__/db", delete(clear_all_handler))
        .with_state(state)
}

async fn clear_all_handler(State(state): State<Arc<AppState>>) -> ApiResult<StatusCode> {
    state.clear_all()?;
    Ok(StatusCode::NO_CONTENT)
}
