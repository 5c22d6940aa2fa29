//! blobcache - A bounded-memory byte-blob cache server
//!
//! Stores opaque byte values under string keys with a hard byte-capacity
//! ceiling and pluggable (FIFO) eviction.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use config::Config;
