use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Lifetime of a cached resolution, in seconds.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Maximum number of cached hostnames.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// Upper bound on the keys listed by the diagnostics endpoint.
    #[serde(default = "default_stats_sample_size")]
    pub stats_sample_size: usize,
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            max_entries: default_max_entries(),
            stats_sample_size: default_stats_sample_size(),
        }
    }
}

fn default_ttl_secs() -> u64 {
    300
}

fn default_max_entries() -> usize {
    1000
}

fn default_stats_sample_size() -> usize {
    100
}
