use async_trait::async_trait;
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;
use zone_finder_application::ports::DnsResolver;
use zone_finder_domain::config::AddressFamily;
use zone_finder_domain::DomainError;

/// Resolver backed by the operating system's name service (`getaddrinfo`).
pub struct SystemDnsResolver {
    address_family: AddressFamily,
}

impl SystemDnsResolver {
    pub fn new(address_family: AddressFamily) -> Self {
        Self { address_family }
    }

    async fn lookup(hostname: &str, timeout: Duration) -> Result<Vec<IpAddr>, DomainError> {
        // Port is required by lookup_host and ignored afterwards
        let target = format!("{}:0", hostname);

        let addrs = tokio::time::timeout(timeout, tokio::net::lookup_host(target))
            .await
            .map_err(|_| DomainError::ResolutionTimeout {
                hostname: hostname.to_string(),
                timeout_ms: timeout.as_millis() as u64,
            })?
            .map_err(|e| {
                debug!(fqdn = %hostname, error = %e, "System resolver returned an error");
                DomainError::NoSuchName(hostname.to_string())
            })?;

        Ok(addrs.map(|addr| addr.ip()).collect())
    }
}

#[async_trait]
impl DnsResolver for SystemDnsResolver {
    async fn resolve(&self, hostname: &str, timeout: Duration) -> Result<IpAddr, DomainError> {
        let addresses = Self::lookup(hostname, timeout).await?;
        select_single_address(hostname, addresses, self.address_family)
    }
}

/// Applies the single-answer policy to a raw lookup result.
///
/// Duplicates are collapsed and addresses outside `family` dropped; exactly
/// one address must remain.
pub fn select_single_address(
    hostname: &str,
    addresses: Vec<IpAddr>,
    family: AddressFamily,
) -> Result<IpAddr, DomainError> {
    let mut distinct: Vec<IpAddr> = Vec::with_capacity(addresses.len());
    for address in addresses.into_iter().filter(|a| family.accepts(a)) {
        if !distinct.contains(&address) {
            distinct.push(address);
        }
    }

    match distinct.as_slice() {
        [] => Err(DomainError::NoSuchName(hostname.to_string())),
        [single] => Ok(*single),
        many => Err(DomainError::MultipleAddresses {
            hostname: hostname.to_string(),
            count: many.len(),
        }),
    }
}
