//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `PUT /set/:key` - Store the raw request body under a key
//! - `GET /get/:key` - Retrieve the stored bytes for a key
//! - `DELETE /del/:key` - Delete a key
//! - `POST /reset` - Clear the cache and statistics
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
