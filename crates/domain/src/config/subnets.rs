use super::errors::ConfigError;
use crate::zone::{SubnetRecord, ZoneMatcher};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubnetsConfig {
    /// JSON array of `{CIDRBlock, AvailabilityZone, AvailabilityZoneId}`.
    #[serde(default = "default_subnets_file")]
    pub file: String,

    /// Fail startup instead of warning when two prefixes overlap.
    #[serde(default)]
    pub reject_overlaps: bool,
}

impl Default for SubnetsConfig {
    fn default() -> Self {
        Self {
            file: default_subnets_file(),
            reject_overlaps: false,
        }
    }
}

impl SubnetsConfig {
    /// Reads the subnets file and builds the zone matcher.
    pub fn load_matcher(&self) -> Result<ZoneMatcher, ConfigError> {
        if !Path::new(&self.file).exists() {
            return Err(ConfigError::SubnetsFileMissing(self.file.clone()));
        }

        let contents = std::fs::read_to_string(&self.file)
            .map_err(|e| ConfigError::SubnetsParse(self.file.clone(), e.to_string()))?;
        let matcher = self.parse_matcher(&contents)?;

        info!(
            file = %self.file,
            subnets = matcher.len(),
            "Successfully loaded subnet mappings"
        );

        Ok(matcher)
    }

    pub fn parse_matcher(&self, contents: &str) -> Result<ZoneMatcher, ConfigError> {
        let records: Vec<SubnetRecord> = serde_json::from_str(contents)
            .map_err(|e| ConfigError::SubnetsParse(self.file.clone(), e.to_string()))?;

        if records.is_empty() {
            return Err(ConfigError::InvalidSubnets(
                "subnet table is empty".to_string(),
            ));
        }

        let matcher = ZoneMatcher::new(&records).map_err(ConfigError::InvalidSubnets)?;
        self.check_overlaps(&matcher)?;
        Ok(matcher)
    }

    fn check_overlaps(&self, matcher: &ZoneMatcher) -> Result<(), ConfigError> {
        let overlaps = matcher.overlaps();
        if overlaps.is_empty() {
            return Ok(());
        }

        let records = matcher.records();
        for (first, second) in &overlaps {
            warn!(
                first = %records[*first].network,
                second = %records[*second].network,
                winner = %records[*first].zone,
                "Overlapping subnets, the first configured prefix wins"
            );
        }

        if self.reject_overlaps {
            let (first, second) = overlaps[0];
            return Err(ConfigError::InvalidSubnets(format!(
                "{} overlaps {}",
                records[first].network, records[second].network
            )));
        }

        Ok(())
    }
}

fn default_subnets_file() -> String {
    "subnets.json".to_string()
}
