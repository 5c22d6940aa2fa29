//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

// == Eviction Policy Kind ==
/// Which eviction policy the server builds its cache with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvictionPolicyKind {
    /// First-in-first-out eviction
    Fifo,
    /// No eviction: inserts that would exceed capacity are rejected
    None,
}

impl EvictionPolicyKind {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Some(Self::Fifo),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Byte ceiling on total stored value size
    pub maxmem: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Eviction policy to construct the cache with
    pub eviction_policy: EvictionPolicyKind,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_MEM` - Cache capacity in bytes (default: 65536)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `EVICTION_POLICY` - `fifo` or `none` (default: fifo)
    pub fn from_env() -> Self {
        Self {
            maxmem: env::var("MAX_MEM")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(65536),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            eviction_policy: env::var("EVICTION_POLICY")
                .ok()
                .and_then(|v| EvictionPolicyKind::parse(&v))
                .unwrap_or(EvictionPolicyKind::Fifo),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            maxmem: 65536,
            server_port: 3000,
            eviction_policy: EvictionPolicyKind::Fifo,
        }
    }
}
