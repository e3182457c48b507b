pub mod cache;
pub mod resolver;

pub use cache::{ResolutionCache, ResolutionCacheConfig};
pub use resolver::{select_single_address, SystemDnsResolver};
