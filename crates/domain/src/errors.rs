use std::net::IpAddr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid hostname: {0}")]
    InvalidHostname(String),

    #[error("Invalid IP address: {0}")]
    InvalidAddress(String),

    #[error("Hostname not found or could not be resolved: {0}")]
    NoSuchName(String),

    #[error("Hostname {hostname} resolved to {count} addresses, only single-address names are supported")]
    MultipleAddresses { hostname: String, count: usize },

    #[error("Resolution of {hostname} timed out after {timeout_ms}ms")]
    ResolutionTimeout { hostname: String, timeout_ms: u64 },

    #[error("Zone not found for IP {0}")]
    NoZoneMatch(IpAddr),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Stable machine-readable reason, used in API error bodies.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidHostname(_) => "invalid_hostname",
            Self::InvalidAddress(_) => "invalid_address",
            Self::NoSuchName(_) => "no_such_name",
            Self::MultipleAddresses { .. } => "multiple_addresses",
            Self::ResolutionTimeout { .. } => "timeout",
            Self::NoZoneMatch(_) => "no_zone_match",
            Self::Internal(_) => "internal",
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidHostname(_) | Self::InvalidAddress(_))
    }

    pub fn is_resolution_failure(&self) -> bool {
        matches!(
            self,
            Self::NoSuchName(_) | Self::MultipleAddresses { .. } | Self::ResolutionTimeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_per_resolution_failure_is_distinct() {
        let errors = [
            DomainError::NoSuchName("a.example".into()),
            DomainError::MultipleAddresses {
                hostname: "a.example".into(),
                count: 2,
            },
            DomainError::ResolutionTimeout {
                hostname: "a.example".into(),
                timeout_ms: 100,
            },
        ];

        let reasons: Vec<_> = errors.iter().map(DomainError::reason).collect();
        assert_eq!(reasons, vec!["no_such_name", "multiple_addresses", "timeout"]);
        assert!(errors.iter().all(DomainError::is_resolution_failure));
        assert!(!errors.iter().any(DomainError::is_invalid_input));
    }
}
