use serde::Serialize;
use zone_finder_domain::LookupResult;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ZoneResponse {
    pub zone: String,
    #[serde(rename = "zoneId")]
    pub zone_id: String,
}

impl From<LookupResult> for ZoneResponse {
    fn from(result: LookupResult) -> Self {
        Self {
            zone: result.zone.to_string(),
            zone_id: result.zone_id.to_string(),
        }
    }
}
