use async_trait::async_trait;
use std::net::IpAddr;
use std::time::Duration;
use zone_finder_domain::DomainError;

/// Name-to-address resolution under the single-answer policy.
///
/// Implementations fail with `NoSuchName`, `MultipleAddresses` or
/// `ResolutionTimeout` and never retry internally.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, hostname: &str, timeout: Duration) -> Result<IpAddr, DomainError>;
}
