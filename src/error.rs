//! Error types for the cache and its callers
//!
//! Provides unified error handling using thiserror. Misses and expirations are
//! not errors; they surface as `None` or `false` from the store.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache and the events service.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key rejected by the store (e.g. empty)
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The source of cached data failed
    #[error("Upstream error: {0}")]
    Upstream(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::InvalidKey(_) => StatusCode::BAD_REQUEST,
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, CacheError>;
