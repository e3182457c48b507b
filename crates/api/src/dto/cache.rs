use serde::Serialize;
use zone_finder_application::ports::CacheSnapshot;

#[derive(Serialize, Debug, Clone)]
pub struct CacheStatsResponse {
    pub total_entries: usize,
    /// Sample of cached hostnames, soonest-expiring first.
    pub entries: Vec<String>,
    pub maxsize: usize,
    pub ttl: u64,
}

impl From<CacheSnapshot> for CacheStatsResponse {
    fn from(snapshot: CacheSnapshot) -> Self {
        Self {
            total_entries: snapshot.total_entries,
            entries: snapshot.sample_keys,
            maxsize: snapshot.max_entries,
            ttl: snapshot.ttl_secs,
        }
    }
}
