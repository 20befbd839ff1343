//! Video HTTP Routes
//!
//! Validation failures answer 400 with `{errorsMessages: [...]}`. A
//! successful update answers 204 with no body, unlike create which returns
//! the new record.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use super::extract::RecordId;
use super::state::AppState;
use crate::errors::ApiResult;
use crate::videos::VideoView;

/// Create video routes
pub fn video_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/videos", get(list_videos_handler).post(create_video_handler))
        .route(
            "/videos/:id",
            get(get_video_handler)
                .put(update_video_handler)
                .delete(delete_video_handler),
        )
        .with_state(state)
}

/// Unparsable bodies are validated as `null`, which reports every
/// required field.
fn body_or_null(body: Option<Json<Value>>) -> Value {
    body.map(|Json(v)| v).unwrap_or(Value::Null)
}

async fn list_videos_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<VideoView>>> {
    Ok(Json(state.videos.list()?))
}

async fn get_video_handler(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> ApiResult<Json<VideoView>> {
    Ok(Json(state.videos.get(&id)?))
}

async fn create_video_handler(
    State(state): State<Arc<AppState>>,
    body: Option<Json<Value>>,
) -> ApiResult<(StatusCode, Json<VideoView>)> {
    let view = state.videos.create(&body_or_null(body))?;
    Ok((StatusCode::CREATED, Json(view)))
}

async fn update_video_handler(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    body: Option<Json<Value>>,
) -> ApiResult<StatusCode> {
    state.videos.update(&id, &body_or_null(body))?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_video_handler(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> ApiResult<StatusCode> {
    state.videos.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
