pub mod cache;
pub mod zone;

pub use cache::{GetCacheStatsUseCase, ResetCacheUseCase};
pub use zone::{LookupZoneByAddressUseCase, LookupZoneByHostnameUseCase};
