//! Response models for the cache server API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing HTTP response bodies. Request values arrive as raw
//! bodies and need no DTO.

pub mod responses;

// Re-export commonly used types
pub use responses::{
    DeleteResponse, ErrorResponse, HealthResponse, ResetResponse, SetResponse, StatsResponse,
};
