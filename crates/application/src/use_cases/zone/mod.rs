mod lookup_by_address;
mod lookup_by_hostname;

pub use lookup_by_address::LookupZoneByAddressUseCase;
pub use lookup_by_hostname::LookupZoneByHostnameUseCase;

use crate::ports::{LookupEvent, LookupMetricsPort};
use std::net::IpAddr;
use tracing::{info, warn};
use zone_finder_domain::{DomainError, LookupResult, ZoneMatcher};

pub(crate) fn match_zone(
    matcher: &ZoneMatcher,
    metrics: &dyn LookupMetricsPort,
    address: IpAddr,
) -> Result<LookupResult, DomainError> {
    match matcher.find(address) {
        Ok(result) => {
            metrics.record(LookupEvent::ZoneMatchSuccess);
            info!(
                ip = %address,
                zone = %result.zone,
                zone_id = %result.zone_id,
                "Found matching zone"
            );
            Ok(result)
        }
        Err(e) => {
            metrics.record(LookupEvent::ZoneMatchFailure);
            warn!(ip = %address, "No matching zone found");
            Err(e)
        }
    }
}
