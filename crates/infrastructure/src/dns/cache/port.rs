use super::storage::ResolutionCache;
use std::net::IpAddr;
use std::time::Duration;
use zone_finder_application::ports::{CacheSnapshot, ResolutionCachePort};

impl ResolutionCachePort for ResolutionCache {
    fn get(&self, hostname: &str) -> Option<IpAddr> {
        ResolutionCache::get(self, hostname)
    }

    fn put(&self, hostname: &str, address: IpAddr, ttl: Duration) {
        ResolutionCache::put(self, hostname, address, ttl)
    }

    fn len(&self) -> usize {
        ResolutionCache::len(self)
    }

    fn snapshot(&self) -> CacheSnapshot {
        self.stats()
    }

    fn clear(&self) {
        ResolutionCache::clear(self)
    }
}
