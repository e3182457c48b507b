use crate::errors::DomainError;
use ipnetwork::IpNetwork;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::sync::Arc;

/// One entry of the subnets file, in the provider's field naming.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SubnetRecord {
    #[serde(rename = "CIDRBlock")]
    pub cidr_block: String,
    #[serde(rename = "AvailabilityZone")]
    pub availability_zone: String,
    #[serde(rename = "AvailabilityZoneId")]
    pub availability_zone_id: String,
}

impl SubnetRecord {
    pub fn new(cidr_block: &str, zone: &str, zone_id: &str) -> Self {
        Self {
            cidr_block: cidr_block.to_string(),
            availability_zone: zone.to_string(),
            availability_zone_id: zone_id.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PrefixRecord {
    pub network: IpNetwork,
    pub zone: Arc<str>,
    pub zone_id: Arc<str>,
}

impl PrefixRecord {
    pub fn prefix_length(&self) -> u8 {
        self.network.prefix()
    }

    pub fn contains(&self, address: IpAddr) -> bool {
        self.network.contains(address)
    }

    pub fn overlaps(&self, other: &PrefixRecord) -> bool {
        self.network.contains(other.network.network())
            || other.network.contains(self.network.network())
    }
}

impl TryFrom<&SubnetRecord> for PrefixRecord {
    type Error = String;

    fn try_from(record: &SubnetRecord) -> Result<Self, Self::Error> {
        let network: IpNetwork = record
            .cidr_block
            .trim()
            .parse()
            .map_err(|e| format!("Invalid CIDR {}: {}", record.cidr_block, e))?;

        if record.availability_zone.is_empty() || record.availability_zone_id.is_empty() {
            return Err(format!(
                "Subnet {} has an empty zone or zone id",
                record.cidr_block
            ));
        }

        Ok(Self {
            network,
            zone: Arc::from(record.availability_zone.as_str()),
            zone_id: Arc::from(record.availability_zone_id.as_str()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub zone: Arc<str>,
    pub zone_id: Arc<str>,
}

/// Immutable prefix table, matched in configured order.
#[derive(Debug, Clone)]
pub struct ZoneMatcher {
    records: Vec<PrefixRecord>,
}

impl ZoneMatcher {
    pub fn new(subnets: &[SubnetRecord]) -> Result<Self, String> {
        let records = subnets
            .iter()
            .map(PrefixRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PrefixRecord] {
        &self.records
    }

    /// First record, in configured order, whose network contains `address`.
    pub fn find(&self, address: IpAddr) -> Result<LookupResult, DomainError> {
        self.records
            .iter()
            .find(|record| record.contains(address))
            .map(|record| LookupResult {
                zone: Arc::clone(&record.zone),
                zone_id: Arc::clone(&record.zone_id),
            })
            .ok_or(DomainError::NoZoneMatch(address))
    }

    /// Index pairs `(earlier, later)` of records whose networks overlap.
    pub fn overlaps(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, a) in self.records.iter().enumerate() {
            for (j, b) in self.records.iter().enumerate().skip(i + 1) {
                if a.overlaps(b) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}
