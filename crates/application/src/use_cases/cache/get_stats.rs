use crate::ports::{CacheSnapshot, ResolutionCachePort};
use std::sync::Arc;

pub struct GetCacheStatsUseCase {
    cache: Arc<dyn ResolutionCachePort>,
}

impl GetCacheStatsUseCase {
    pub fn new(cache: Arc<dyn ResolutionCachePort>) -> Self {
        Self { cache }
    }

    pub fn execute(&self) -> CacheSnapshot {
        self.cache.snapshot()
    }
}
