//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.
//!
//! Values travel as raw request/response bodies so arbitrary binary
//! data (including `/` and NUL bytes) round-trips faithfully; keys are
//! path segments.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::cache::{CacheStore, CacheValue, FifoEvictor};
use crate::config::{Config, EvictionPolicyKind};
use crate::error::{CacheError, Result};
use crate::models::{DeleteResponse, HealthResponse, ResetResponse, SetResponse, StatsResponse};

// == Transport Limits ==
/// Maximum key length accepted over HTTP, in bytes.
///
/// A transport restriction only; the engine itself accepts any string.
pub const MAX_KEY_LENGTH: usize = 256;

/// Application state shared across all handlers.
///
/// All engine operations run under this lock for their full duration;
/// the engine itself is a sequential state machine and relies on the
/// caller for mutual exclusion.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache store
    pub cache: Arc<RwLock<CacheStore>>,
}

impl AppState {
    /// Creates a new AppState with the given cache store.
    pub fn new(cache: CacheStore) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        let evictor: Option<Box<dyn crate::cache::Evictor>> = match config.eviction_policy {
            EvictionPolicyKind::Fifo => Some(Box::new(FifoEvictor::new())),
            EvictionPolicyKind::None => None,
        };
        Self::new(CacheStore::new(config.maxmem, evictor))
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CacheError::InvalidRequest("Key cannot be empty".to_string()));
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(CacheError::InvalidRequest(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        )));
    }
    Ok(())
}

/// Handler for PUT /set/{key}
///
/// Stores the raw request body as the value for `key`.
pub async fn set_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    body: Bytes,
) -> Result<Json<SetResponse>> {
    validate_key(&key)?;

    let value = CacheValue::copy_from(&body);
    let size = value.size();

    let mut cache = state.cache.write().await;
    cache.set(key.clone(), value)?;

    Ok(Json(SetResponse::new(key, size)))
}

/// Handler for GET /get/{key}
///
/// Returns the stored bytes as an `application/octet-stream` body, or
/// 404 if the key is absent.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response> {
    // Write lock: a get mutates the statistics
    let mut cache = state.cache.write().await;
    let value = cache.get(&key).ok_or(CacheError::NotFound(key))?;

    Ok((
        [(header::CONTENT_TYPE, "application/octet-stream")],
        value.into_bytes(),
    )
        .into_response())
}

/// Handler for DELETE /del/{key}
///
/// Deletes a key from the cache.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let mut cache = state.cache.write().await;
    if !cache.del(&key) {
        return Err(CacheError::NotFound(key));
    }

    Ok(Json(DeleteResponse::new(key)))
}

/// Handler for POST /reset
///
/// Frees every stored value and zeroes the statistics. Answers
/// 205 Reset Content.
pub async fn reset_handler(State(state): State<AppState>) -> Result<Response> {
    let mut cache = state.cache.write().await;
    if !cache.reset() {
        return Err(CacheError::Internal("Cache reset left entries behind".to_string()));
    }

    Ok((StatusCode::RESET_CONTENT, Json(ResetResponse::new())).into_response())
}

/// Handler for GET /stats
///
/// Returns current cache statistics as JSON, plus the `space-used` and
/// `hit-rate` response headers.
pub async fn stats_handler(State(state): State<AppState>) -> Response {
    let cache = state.cache.read().await;
    let stats = cache.stats();
    let space_used = cache.space_used();
    let hit_rate = cache.hit_rate();
    let entries = cache.len();
    drop(cache);

    (
        [
            ("space-used", space_used.to_string()),
            ("hit-rate", hit_rate.to_string()),
        ],
        Json(StatsResponse::new(
            stats.gets,
            stats.hits,
            stats.evictions,
            entries,
            space_used,
        )),
    )
        .into_response()
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state(maxmem: usize) -> AppState {
        AppState::new(CacheStore::new(maxmem, Some(Box::new(FifoEvictor::new()))))
    }

    #[tokio::test]
    async fn test_set_and_get_handler() {
        let state = test_state(1024);

        let result = set_handler(
            State(state.clone()),
            Path("test_key".to_string()),
            Bytes::from_static(b"test_value"),
        )
        .await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().size, 10);

        let result = get_handler(State(state), Path("test_key".to_string())).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_get_nonexistent_key() {
        let state = test_state(1024);

        let result = get_handler(State(state), Path("nonexistent".to_string())).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_handler() {
        let state = test_state(1024);

        set_handler(
            State(state.clone()),
            Path("to_delete".to_string()),
            Bytes::from_static(b"value"),
        )
        .await
        .unwrap();

        let result = delete_handler(State(state.clone()), Path("to_delete".to_string())).await;
        assert!(result.is_ok());

        let result = delete_handler(State(state), Path("to_delete".to_string())).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_set_value_too_large() {
        let state = test_state(8);

        let result = set_handler(
            State(state),
            Path("big".to_string()),
            Bytes::from_static(b"way too large"),
        )
        .await;
        assert!(matches!(result, Err(CacheError::ValueTooLarge { .. })));
    }

    #[tokio::test]
    async fn test_set_invalid_key() {
        let state = test_state(1024);

        let result = set_handler(
            State(state.clone()),
            Path(String::new()),
            Bytes::from_static(b"value"),
        )
        .await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));

        let result = set_handler(
            State(state),
            Path("x".repeat(MAX_KEY_LENGTH + 1)),
            Bytes::from_static(b"value"),
        )
        .await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_reset_handler() {
        let state = test_state(1024);

        set_handler(
            State(state.clone()),
            Path("key".to_string()),
            Bytes::from_static(b"value"),
        )
        .await
        .unwrap();

        let response = reset_handler(State(state.clone())).await.unwrap();
        assert_eq!(response.status(), StatusCode::RESET_CONTENT);

        let cache = state.cache.read().await;
        assert!(cache.is_empty());
        assert_eq!(cache.space_used(), 0);
    }

    #[tokio::test]
    async fn test_from_config_no_eviction() {
        let config = Config {
            maxmem: 16,
            server_port: 0,
            eviction_policy: EvictionPolicyKind::None,
        };
        let state = AppState::from_config(&config);

        set_handler(
            State(state.clone()),
            Path("a".to_string()),
            Bytes::from_static(b"0123456789"),
        )
        .await
        .unwrap();

        // No policy: over-capacity insert is rejected instead of evicting
        let result = set_handler(
            State(state),
            Path("b".to_string()),
            Bytes::from_static(b"0123456789"),
        )
        .await;
        assert!(matches!(result, Err(CacheError::NoEvictionPolicy)));
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
