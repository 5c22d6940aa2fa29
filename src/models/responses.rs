//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies. Values
//! themselves travel as raw bodies, not JSON; these types cover the
//! acknowledgement and metadata responses.

use serde::Serialize;

/// Response body for the SET operation (PUT /set/{key})
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// The key that was set
    pub key: String,
    /// Size of the stored value in bytes
    pub size: usize,
}

impl SetResponse {
    /// Creates a new SetResponse
    pub fn new(key: impl Into<String>, size: usize) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' set successfully", key),
            key,
            size,
        }
    }
}

/// Response body for the DELETE operation (DELETE /del/{key})
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The key that was deleted
    pub key: String,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' deleted successfully", key),
            key,
        }
    }
}

/// Response body for the RESET operation (POST /reset)
#[derive(Debug, Clone, Serialize)]
pub struct ResetResponse {
    /// Success message
    pub message: String,
}

impl ResetResponse {
    /// Creates a new ResetResponse
    pub fn new() -> Self {
        Self {
            message: "Cache reset".to_string(),
        }
    }
}

impl Default for ResetResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Total number of get operations
    pub gets: u64,
    /// Number of gets that found a value
    pub hits: u64,
    /// Number of entries evicted to make room
    pub evictions: u64,
    /// Current number of entries in cache
    pub entries: usize,
    /// Total bytes used by stored values
    pub space_used: usize,
    /// Hit rate (hits / gets, 0 when no gets)
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(gets: u64, hits: u64, evictions: u64, entries: usize, space_used: usize) -> Self {
        let hit_rate = if gets > 0 {
            hits as f64 / gets as f64
        } else {
            0.0
        };
        Self {
            gets,
            hits,
            evictions,
            entries,
            space_used,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
