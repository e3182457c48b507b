pub mod clock;
pub mod entry;
pub mod port;
pub mod storage;

pub use clock::{Clock, SystemClock};
pub use entry::CacheEntry;
pub use storage::{ResolutionCache, ResolutionCacheConfig};
