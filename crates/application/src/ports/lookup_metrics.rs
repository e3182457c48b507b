#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupEvent {
    CacheHit,
    CacheMiss,
    CacheEviction,
    ResolutionAttempted,
    ResolutionSuccess,
    ResolutionFailure,
    ZoneMatchSuccess,
    ZoneMatchFailure,
}

/// Write-only counters updated by the lookup path.
///
/// Implementations must not block or fail.
pub trait LookupMetricsPort: Send + Sync {
    fn record(&self, event: LookupEvent);

    fn set_cache_size(&self, size: usize);
}
