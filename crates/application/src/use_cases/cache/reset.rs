use crate::ports::ResolutionCachePort;
use std::sync::Arc;
use tracing::info;

pub struct ResetCacheUseCase {
    cache: Arc<dyn ResolutionCachePort>,
}

impl ResetCacheUseCase {
    pub fn new(cache: Arc<dyn ResolutionCachePort>) -> Self {
        Self { cache }
    }

    /// Drops every cached resolution and returns how many were removed.
    pub fn execute(&self) -> usize {
        let removed = self.cache.len();
        self.cache.clear();
        info!(removed, "Resolution cache has been reset");
        removed
    }
}
