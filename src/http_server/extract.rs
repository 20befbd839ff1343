//! Request extractors shared by the resource routes.

use axum::async_trait;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::errors::ApiError;

/// Raw `:id` path segment.
///
/// A segment that cannot be decoded (e.g. `%FF`) can never name a record,
/// so it is rejected as 404 like any other unknown id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<String>::from_request_parts(parts, state)
            .await
            .map(|Path(id)| RecordId(id))
            .map_err(|_| ApiError::NotFound)
    }
}
