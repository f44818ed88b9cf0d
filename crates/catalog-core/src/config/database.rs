//! Database configuration.

use serde::{Deserialize, Serialize};

/// PostgreSQL settings for the catalog store.
///
/// The catalog issues single-row point queries, so the pool stays small
/// by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL.
    pub url: String,
    /// Upper bound on pooled connections.
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
    /// Seconds to wait for a free connection before giving up.
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_seconds: u64,
}

fn default_pool_size() -> u32 {
    8
}

fn default_acquire_timeout() -> u64 {
    5
}
