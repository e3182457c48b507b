use super::match_zone;
use crate::ports::LookupMetricsPort;
use std::sync::Arc;
use tracing::instrument;
use zone_finder_domain::{validate_address, DomainError, LookupResult, ZoneMatcher};

/// Zone lookup for a raw address literal. Never touches the cache or resolver.
pub struct LookupZoneByAddressUseCase {
    matcher: Arc<ZoneMatcher>,
    metrics: Arc<dyn LookupMetricsPort>,
}

impl LookupZoneByAddressUseCase {
    pub fn new(matcher: Arc<ZoneMatcher>, metrics: Arc<dyn LookupMetricsPort>) -> Self {
        Self { matcher, metrics }
    }

    #[instrument(skip(self), name = "lookup_zone_by_address")]
    pub fn execute(&self, address: &str) -> Result<LookupResult, DomainError> {
        let address = validate_address(address)?;
        match_zone(&self.matcher, self.metrics.as_ref(), address)
    }
}
