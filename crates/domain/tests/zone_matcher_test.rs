use zone_finder_domain::zone::SubnetRecord;
use zone_finder_domain::{DomainError, ZoneMatcher};
use std::net::IpAddr;

fn eu_central_subnets() -> Vec<SubnetRecord> {
    vec![
        SubnetRecord::new("192.168.0.0/19", "eu-central-1b", "euc1-az3"),
        SubnetRecord::new("192.168.32.0/19", "eu-central-1a", "euc1-az2"),
        SubnetRecord::new("192.168.64.0/19", "eu-central-1c", "euc1-az1"),
    ]
}

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

#[test]
fn test_address_in_first_subnet() {
    let matcher = ZoneMatcher::new(&eu_central_subnets()).unwrap();

    let result = matcher.find(ip("192.168.0.1")).unwrap();

    assert_eq!(&*result.zone, "eu-central-1b");
    assert_eq!(&*result.zone_id, "euc1-az3");
}

#[test]
fn test_each_subnet_maps_to_its_zone() {
    let matcher = ZoneMatcher::new(&eu_central_subnets()).unwrap();

    assert_eq!(&*matcher.find(ip("192.168.1.1")).unwrap().zone, "eu-central-1b");
    assert_eq!(&*matcher.find(ip("192.168.33.1")).unwrap().zone, "eu-central-1a");
    assert_eq!(&*matcher.find(ip("192.168.65.1")).unwrap().zone, "eu-central-1c");
}

#[test]
fn test_subnet_boundaries() {
    let matcher = ZoneMatcher::new(&eu_central_subnets()).unwrap();

    assert_eq!(&*matcher.find(ip("192.168.31.255")).unwrap().zone_id, "euc1-az3");
    assert_eq!(&*matcher.find(ip("192.168.32.0")).unwrap().zone_id, "euc1-az2");
    assert_eq!(&*matcher.find(ip("192.168.95.255")).unwrap().zone_id, "euc1-az1");
    assert!(matcher.find(ip("192.168.96.0")).is_err());
}

#[test]
fn test_address_outside_all_subnets() {
    let matcher = ZoneMatcher::new(&eu_central_subnets()).unwrap();

    let result = matcher.find(ip("10.10.10.10"));

    assert_eq!(result, Err(DomainError::NoZoneMatch(ip("10.10.10.10"))));
}

#[test]
fn test_overlapping_prefixes_first_configured_wins() {
    let matcher = ZoneMatcher::new(&[
        SubnetRecord::new("10.0.0.0/8", "wide", "wide-id"),
        SubnetRecord::new("10.1.0.0/16", "narrow", "narrow-id"),
    ])
    .unwrap();

    for _ in 0..10 {
        assert_eq!(&*matcher.find(ip("10.1.2.3")).unwrap().zone, "wide");
    }
    assert_eq!(matcher.overlaps(), vec![(0, 1)]);
}

#[test]
fn test_overlap_order_is_config_order_not_prefix_length() {
    let matcher = ZoneMatcher::new(&[
        SubnetRecord::new("10.1.0.0/16", "narrow", "narrow-id"),
        SubnetRecord::new("10.0.0.0/8", "wide", "wide-id"),
    ])
    .unwrap();

    assert_eq!(&*matcher.find(ip("10.1.2.3")).unwrap().zone, "narrow");
    assert_eq!(&*matcher.find(ip("10.2.0.1")).unwrap().zone, "wide");
}

#[test]
fn test_ipv6_prefixes_supported() {
    let matcher = ZoneMatcher::new(&[
        SubnetRecord::new("192.168.0.0/19", "eu-central-1b", "euc1-az3"),
        SubnetRecord::new("2a05:d014:1::/56", "eu-central-1a", "euc1-az2"),
    ])
    .unwrap();

    assert_eq!(
        &*matcher.find(ip("2a05:d014:1:0:abcd::1")).unwrap().zone,
        "eu-central-1a"
    );
    assert!(matcher.find(ip("2a05:d014:2::1")).is_err());
}

#[test]
fn test_non_overlapping_table_reports_no_overlaps() {
    let matcher = ZoneMatcher::new(&eu_central_subnets()).unwrap();

    assert!(matcher.overlaps().is_empty());
    assert_eq!(matcher.records()[0].prefix_length(), 19);
}

#[test]
fn test_invalid_cidr_fails_construction() {
    let result = ZoneMatcher::new(&[SubnetRecord::new("not-a-cidr", "a", "b")]);

    assert!(result.is_err());
}
