//! Cache Module
//!
//! Provides bounded-memory in-memory caching with pluggable eviction.

mod fifo;
mod policy;
mod stats;
mod store;
mod value;


// Re-export public types
pub use fifo::FifoEvictor;
pub use policy::Evictor;
pub use stats::CacheStats;
pub use store::CacheStore;
pub use value::CacheValue;
