//! # API Errors
//!
//! Every handler failure is one of these. Each variant maps to exactly one
//! HTTP status; only validation failures carry a body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::observability::{log_event_with_fields, Event};
use crate::store::StoreError;
use crate::videos::ValidationErrors;

/// Result type for request handling
pub type ApiResult<T> = Result<T, ApiError>;

/// Request handling errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Field-level validation failed; reported as `{errorsMessages: [...]}`
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Input rejected without details
    #[error("Bad request")]
    BadRequest,

    /// The id does not resolve to any record
    #[error("Not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Validation(errors) => (status, Json(errors)).into_response(),
            ApiError::Store(err) => {
                log_event_with_fields(Event::StoreFailure, &[("error", &err.to_string())]);
                status.into_response()
            }
            ApiError::BadRequest | ApiError::NotFound => status.into_response(),
        }
    }
}
