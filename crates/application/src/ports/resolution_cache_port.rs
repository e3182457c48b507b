use std::net::IpAddr;
use std::time::Duration;

/// Read-only diagnostic view of the resolution cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSnapshot {
    pub total_entries: usize,
    pub sample_keys: Vec<String>,
    pub max_entries: usize,
    pub ttl_secs: u64,
}

/// Port for the hostname resolution cache.
pub trait ResolutionCachePort: Send + Sync {
    /// Cached address, if present and not yet expired.
    fn get(&self, hostname: &str) -> Option<IpAddr>;

    fn put(&self, hostname: &str, address: IpAddr, ttl: Duration);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn snapshot(&self) -> CacheSnapshot;

    fn clear(&self);
}
