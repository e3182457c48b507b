use super::clock::{Clock, SystemClock};
use super::entry::{CacheEntry, ExpiryKey};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::net::IpAddr;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;
use tracing::{debug, info};
use zone_finder_application::ports::{CacheSnapshot, LookupEvent, LookupMetricsPort};

/// Longest TTL honoured by `put`; keeps `Instant` arithmetic in range.
const MAX_TTL: Duration = Duration::from_secs(365 * 24 * 3600);

pub struct ResolutionCacheConfig {
    pub max_entries: usize,
    pub default_ttl: Duration,
    pub stats_sample_size: usize,
}

#[derive(Default)]
struct CacheState {
    entries: FxHashMap<Arc<str>, CacheEntry>,
    /// Same keys as `entries`, ordered by nearest expiry.
    expiry_index: BTreeSet<ExpiryKey>,
    next_seq: u64,
}

/// Bounded hostname → address cache with lazy TTL expiry.
///
/// A single `RwLock` guards the map and its expiry index: lookups share the
/// read lock, while `put`, eviction and `clear` take the write lock. The lock
/// is never held across a resolution. Size and eviction updates are published
/// to the attached metrics while that lock is held.
pub struct ResolutionCache {
    state: RwLock<CacheState>,
    max_entries: usize,
    default_ttl: Duration,
    stats_sample_size: usize,
    clock: Arc<dyn Clock>,
    metrics: Option<Arc<dyn LookupMetricsPort>>,
}

impl ResolutionCache {
    pub fn new(config: ResolutionCacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: ResolutionCacheConfig, clock: Arc<dyn Clock>) -> Self {
        info!(
            max_entries = config.max_entries,
            ttl_secs = config.default_ttl.as_secs(),
            "Initializing resolution cache"
        );

        Self {
            state: RwLock::new(CacheState::default()),
            max_entries: config.max_entries.max(1),
            default_ttl: config.default_ttl,
            stats_sample_size: config.stats_sample_size,
            clock,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<dyn LookupMetricsPort>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    fn publish_size(&self, size: usize) {
        if let Some(metrics) = &self.metrics {
            metrics.set_cache_size(size);
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, CacheState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, CacheState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Returns the cached address while `now < expires_at`.
    ///
    /// Expired entries are left in place; they are replaced by the next `put`
    /// for the same hostname or reclaimed by capacity eviction.
    pub fn get(&self, hostname: &str) -> Option<IpAddr> {
        let now = self.clock.now();
        let state = self.read();
        state
            .entries
            .get(hostname)
            .filter(|entry| entry.is_fresh_at(now))
            .map(|entry| entry.address)
    }

    pub fn put(&self, hostname: &str, address: IpAddr, ttl: Duration) {
        let expires_at = self.clock.now() + ttl.min(MAX_TTL);
        let mut state = self.write();

        let seq = state.next_seq;
        state.next_seq += 1;
        let entry = CacheEntry {
            address,
            expires_at,
            seq,
        };

        if let Some((key, previous)) = state.entries.remove_entry(hostname) {
            state.expiry_index.remove(&ExpiryKey::for_entry(&key, &previous));
            state.expiry_index.insert(ExpiryKey::for_entry(&key, &entry));
            state.entries.insert(key, entry);
            debug!(fqdn = %hostname, ip = %address, ttl_secs = ttl.as_secs(), "Refreshed cache entry");
            return;
        }

        if state.entries.len() >= self.max_entries {
            if Self::evict_nearest_expiry(&mut state) {
                if let Some(metrics) = &self.metrics {
                    metrics.record(LookupEvent::CacheEviction);
                }
            }
        }

        let key: Arc<str> = Arc::from(hostname);
        state.expiry_index.insert(ExpiryKey::for_entry(&key, &entry));
        state.entries.insert(key, entry);
        self.publish_size(state.entries.len());

        debug!(fqdn = %hostname, ip = %address, ttl_secs = ttl.as_secs(), "Cached resolution");
    }

    fn evict_nearest_expiry(state: &mut CacheState) -> bool {
        let Some(victim) = state.expiry_index.pop_first() else {
            return false;
        };
        state.entries.remove(&victim.hostname);
        debug!(fqdn = %victim.hostname, "Evicted cache entry with nearest expiry");
        true
    }

    pub fn clear(&self) {
        let mut state = self.write();
        state.entries.clear();
        state.expiry_index.clear();
        self.publish_size(0);
    }

    /// Diagnostic snapshot. Sample keys are listed in eviction order.
    pub fn stats(&self) -> CacheSnapshot {
        let state = self.read();
        CacheSnapshot {
            total_entries: state.entries.len(),
            sample_keys: state
                .expiry_index
                .iter()
                .take(self.stats_sample_size)
                .map(|key| key.hostname.to_string())
                .collect(),
            max_entries: self.max_entries,
            ttl_secs: self.default_ttl.as_secs(),
        }
    }
}
