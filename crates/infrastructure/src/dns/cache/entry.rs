use std::cmp::Ordering;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct CacheEntry {
    pub address: IpAddr,
    pub expires_at: Instant,
    /// Insertion sequence, breaks expiry ties in favour of the older entry.
    pub seq: u64,
}

impl CacheEntry {
    #[inline]
    pub fn is_fresh_at(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Position of an entry in the eviction order: soonest expiry first.
#[derive(Debug, Clone)]
pub(super) struct ExpiryKey {
    pub expires_at: Instant,
    pub seq: u64,
    pub hostname: Arc<str>,
}

impl ExpiryKey {
    pub fn for_entry(hostname: &Arc<str>, entry: &CacheEntry) -> Self {
        Self {
            expires_at: entry.expires_at,
            seq: entry.seq,
            hostname: Arc::clone(hostname),
        }
    }
}

impl PartialEq for ExpiryKey {
    fn eq(&self, other: &Self) -> bool {
        self.expires_at == other.expires_at && self.seq == other.seq
    }
}

impl Eq for ExpiryKey {}

impl PartialOrd for ExpiryKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExpiryKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.expires_at
            .cmp(&other.expires_at)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}
