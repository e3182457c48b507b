pub mod cache;
pub mod health;
pub mod metrics;
pub mod zone;

pub use cache::{get_cache_stats, reset_cache};
pub use health::{liveness, readiness};
pub use metrics::get_metrics;
pub use zone::{lookup_by_address, lookup_by_hostname, missing_hostname, not_found};
