#![allow(dead_code)]

mod mocks;

pub use mocks::{MockDnsResolver, MockResolutionCache, RecordingMetrics};

use std::sync::Arc;
use zone_finder_domain::zone::SubnetRecord;
use zone_finder_domain::ZoneMatcher;

pub fn eu_central_matcher() -> Arc<ZoneMatcher> {
    Arc::new(
        ZoneMatcher::new(&[
            SubnetRecord::new("192.168.0.0/19", "eu-central-1b", "euc1-az3"),
            SubnetRecord::new("192.168.32.0/19", "eu-central-1a", "euc1-az2"),
            SubnetRecord::new("192.168.64.0/19", "eu-central-1c", "euc1-az1"),
        ])
        .unwrap(),
    )
}
