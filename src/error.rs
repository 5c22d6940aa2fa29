//! Error types for the cache server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache server.
///
/// Engine-level outcomes are local and recoverable; the HTTP mapping
/// below is the transport's translation, not the engine's concern.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key not found in cache
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Value alone exceeds the cache capacity; no eviction can help
    #[error("Value of {size} bytes exceeds cache capacity of {maxmem} bytes")]
    ValueTooLarge { size: usize, maxmem: usize },

    /// The eviction policy ran out of candidates before enough space was freed
    #[error("Eviction exhausted: not enough space could be freed")]
    EvictionExhausted,

    /// Capacity exceeded on a cache constructed without an eviction policy
    #[error("No eviction policy configured and cache is full")]
    NoEvictionPolicy,

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::ValueTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            CacheError::EvictionExhausted => StatusCode::SERVICE_UNAVAILABLE,
            CacheError::NoEvictionPolicy => StatusCode::SERVICE_UNAVAILABLE,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache server.
pub type Result<T> = std::result::Result<T, CacheError>;
