use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }

    pub fn cache_reset() -> Self {
        Self {
            status: "cache reset",
        }
    }
}
