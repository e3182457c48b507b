use crate::errors::DomainError;
use std::net::IpAddr;

pub const MAX_HOSTNAME_LEN: usize = 253;
pub const MAX_LABEL_LEN: usize = 63;

/// Validates and normalizes a hostname.
///
/// The returned value is trimmed, lower-cased and has a single trailing
/// dot removed, so it can be used directly as a cache key.
pub fn validate_hostname(input: &str) -> Result<String, DomainError> {
    let trimmed = input.trim();
    let name = trimmed.strip_suffix('.').unwrap_or(trimmed);

    if name.is_empty() {
        return Err(DomainError::InvalidHostname("hostname cannot be empty".into()));
    }

    if name.len() > MAX_HOSTNAME_LEN {
        return Err(DomainError::InvalidHostname(format!(
            "hostname exceeds {} characters",
            MAX_HOSTNAME_LEN
        )));
    }

    if name.parse::<IpAddr>().is_ok() {
        return Err(DomainError::InvalidHostname(format!(
            "{} is an address literal, use the address lookup instead",
            name
        )));
    }

    let normalized = name.to_ascii_lowercase();

    for label in normalized.split('.') {
        validate_label(label, &normalized)?;
    }

    // A purely numeric TLD means an address-like value such as "10.1.2"
    if let Some(tld) = normalized.rsplit('.').next() {
        if tld.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidHostname(format!(
                "{} looks like an address, not a name",
                normalized
            )));
        }
    }

    Ok(normalized)
}

fn validate_label(label: &str, hostname: &str) -> Result<(), DomainError> {
    if label.is_empty() {
        return Err(DomainError::InvalidHostname(format!(
            "{} contains an empty label",
            hostname
        )));
    }

    if label.len() > MAX_LABEL_LEN {
        return Err(DomainError::InvalidHostname(format!(
            "label '{}' exceeds {} characters",
            label, MAX_LABEL_LEN
        )));
    }

    if let Some(c) = label
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-'))
    {
        return Err(DomainError::InvalidHostname(format!(
            "label '{}' contains disallowed character '{}'",
            label, c
        )));
    }

    if label.starts_with('-') || label.ends_with('-') {
        return Err(DomainError::InvalidHostname(format!(
            "label '{}' cannot start or end with a hyphen",
            label
        )));
    }

    Ok(())
}

/// Parses an IPv4 or IPv6 literal.
pub fn validate_address(input: &str) -> Result<IpAddr, DomainError> {
    let trimmed = input.trim();
    trimmed
        .parse::<IpAddr>()
        .map_err(|_| DomainError::InvalidAddress(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_trailing_dot() {
        assert_eq!(
            validate_hostname("  My.Database.COM. ").unwrap(),
            "my.database.com"
        );
    }

    #[test]
    fn test_single_label_is_allowed() {
        assert_eq!(validate_hostname("localhost").unwrap(), "localhost");
    }

    #[test]
    fn test_address_literal_rejected_as_hostname() {
        assert!(matches!(
            validate_hostname("192.168.0.1"),
            Err(DomainError::InvalidHostname(_))
        ));
        assert!(matches!(
            validate_hostname("::1"),
            Err(DomainError::InvalidHostname(_))
        ));
    }
}
