pub mod cache;
pub mod status;
pub mod zone;

pub use cache::CacheStatsResponse;
pub use status::StatusResponse;
pub use zone::ZoneResponse;
