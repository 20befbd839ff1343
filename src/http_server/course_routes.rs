//! Course HTTP Routes
//!
//! - `GET    /courses?title=` list, optionally filtered
//! - `GET    /courses/:id`
//! - `POST   /courses`        `{title}`
//! - `PUT    /courses/:id`    `{title}`
//! - `DELETE /courses/:id`

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use super::extract::RecordId;
use super::state::AppState;
use crate::courses::{CourseQuery, CourseView};
use crate::errors::ApiResult;

/// Create course routes
pub fn course_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/courses", get(list_courses_handler).post(create_course_handler))
        .route(
            "/courses/:id",
            get(get_course_handler)
                .put(update_course_handler)
                .delete(delete_course_handler),
        )
        .with_state(state)
}

// A query string that does not fit `CourseQuery` (e.g. a repeated `title`)
// lists without a filter.
async fn list_courses_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CourseQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<CourseView>>> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    Ok(Json(state.courses.list(query.title.as_deref())?))
}

async fn get_course_handler(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> ApiResult<Json<CourseView>> {
    Ok(Json(state.courses.get(&id)?))
}

// A body that fails to parse as JSON is handled as a missing title.
async fn create_course_handler(
    State(state): State<Arc<AppState>>,
    body: Option<Json<Value>>,
) -> ApiResult<(StatusCode, Json<CourseView>)> {
    let view = state.courses.create(body.as_ref().map(|Json(v)| v))?;
    Ok((StatusCode::CREATED, Json(view)))
}

async fn update_course_handler(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    body: Option<Json<Value>>,
) -> ApiResult<Json<CourseView>> {
    Ok(Json(state.courses.update(&id, body.as_ref().map(|Json(v)| v))?))
}

async fn delete_course_handler(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> ApiResult<StatusCode> {
    state.courses.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
