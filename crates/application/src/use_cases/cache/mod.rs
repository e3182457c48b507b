mod get_stats;
mod reset;

pub use get_stats::GetCacheStatsUseCase;
pub use reset::ResetCacheUseCase;
