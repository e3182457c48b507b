use std::sync::Arc;
use tracing::info;
use zone_finder_domain::{Config, ZoneMatcher};
use zone_finder_infrastructure::dns::{ResolutionCache, ResolutionCacheConfig, SystemDnsResolver};
use zone_finder_infrastructure::metrics::ServiceMetrics;

pub struct LookupServices {
    pub resolver: Arc<SystemDnsResolver>,
    pub cache: Arc<ResolutionCache>,
    pub matcher: Arc<ZoneMatcher>,
    pub metrics: Arc<ServiceMetrics>,
}

impl LookupServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let matcher = Arc::new(config.subnets.load_matcher()?);

        let metrics = Arc::new(ServiceMetrics::new());
        let cache = Arc::new(
            ResolutionCache::new(ResolutionCacheConfig {
                max_entries: config.cache.max_entries,
                default_ttl: config.cache.ttl(),
                stats_sample_size: config.cache.stats_sample_size,
            })
            .with_metrics(metrics.clone()),
        );

        let resolver = Arc::new(SystemDnsResolver::new(config.resolver.address_family));

        info!(
            subnets = matcher.len(),
            timeout_ms = config.resolver.timeout_ms,
            address_family = ?config.resolver.address_family,
            "Lookup services initialized"
        );

        Ok(Self {
            resolver,
            cache,
            matcher,
            metrics,
        })
    }
}
