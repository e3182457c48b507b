use super::match_zone;
use crate::ports::{DnsResolver, LookupEvent, LookupMetricsPort, ResolutionCachePort};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use zone_finder_domain::{validate_hostname, DomainError, LookupResult, ZoneMatcher};

pub struct LookupZoneByHostnameUseCase {
    resolver: Arc<dyn DnsResolver>,
    cache: Arc<dyn ResolutionCachePort>,
    matcher: Arc<ZoneMatcher>,
    metrics: Arc<dyn LookupMetricsPort>,
    cache_ttl: Duration,
    resolve_timeout: Duration,
}

impl LookupZoneByHostnameUseCase {
    pub fn new(
        resolver: Arc<dyn DnsResolver>,
        cache: Arc<dyn ResolutionCachePort>,
        matcher: Arc<ZoneMatcher>,
        metrics: Arc<dyn LookupMetricsPort>,
        cache_ttl: Duration,
        resolve_timeout: Duration,
    ) -> Self {
        Self {
            resolver,
            cache,
            matcher,
            metrics,
            cache_ttl,
            resolve_timeout,
        }
    }

    #[instrument(skip(self), name = "lookup_zone_by_hostname")]
    pub async fn execute(&self, hostname: &str) -> Result<LookupResult, DomainError> {
        let hostname = validate_hostname(hostname)?;
        info!(fqdn = %hostname, "Received lookup request");

        let address = self.resolve_address(hostname).await?;
        match_zone(&self.matcher, self.metrics.as_ref(), address)
    }

    async fn resolve_address(&self, hostname: String) -> Result<IpAddr, DomainError> {
        if let Some(address) = self.cache.get(&hostname) {
            self.metrics.record(LookupEvent::CacheHit);
            debug!(fqdn = %hostname, ip = %address, "Resolved from cache");
            return Ok(address);
        }

        self.metrics.record(LookupEvent::CacheMiss);
        self.metrics.record(LookupEvent::ResolutionAttempted);

        // Resolution and commit run detached from the request future, so a
        // dropped request still lets an in-flight lookup land in the cache.
        let resolver = Arc::clone(&self.resolver);
        let cache = Arc::clone(&self.cache);
        let metrics = Arc::clone(&self.metrics);
        let ttl = self.cache_ttl;
        let timeout = self.resolve_timeout;
        let task_hostname = hostname.clone();

        let task = tokio::spawn(async move {
            match resolver.resolve(&task_hostname, timeout).await {
                Ok(address) => {
                    metrics.record(LookupEvent::ResolutionSuccess);
                    cache.put(&task_hostname, address, ttl);
                    debug!(fqdn = %task_hostname, ip = %address, "Resolved from DNS");
                    Ok(address)
                }
                Err(e) => {
                    metrics.record(LookupEvent::ResolutionFailure);
                    error!(fqdn = %task_hostname, error = %e, "DNS lookup failed");
                    Err(e)
                }
            }
        });

        task.await.map_err(|e| {
            error!(fqdn = %hostname, error = %e, "Resolution task failed");
            DomainError::Internal(format!("resolution task for {} failed", hostname))
        })?
    }
}
