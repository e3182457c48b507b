mod dns_resolver;
mod lookup_metrics;
mod request_metrics;
mod resolution_cache_port;

pub use dns_resolver::DnsResolver;
pub use lookup_metrics::{LookupEvent, LookupMetricsPort};
pub use request_metrics::RequestMetricsPort;
pub use resolution_cache_port::{CacheSnapshot, ResolutionCachePort};
