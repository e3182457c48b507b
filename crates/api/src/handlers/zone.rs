use crate::{dto::ZoneResponse, errors::ApiError, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_lookup_zone_by_hostname")]
pub async fn lookup_by_hostname(
    State(state): State<AppState>,
    Path(hostname): Path<String>,
) -> Result<Json<ZoneResponse>, ApiError> {
    let result = state.lookup_by_hostname.execute(&hostname).await?;
    debug!(zone = %result.zone, zone_id = %result.zone_id, "Zone lookup completed");
    Ok(Json(result.into()))
}

#[instrument(skip(state), name = "api_lookup_zone_by_address")]
pub async fn lookup_by_address(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<ZoneResponse>, ApiError> {
    let result = state.lookup_by_address.execute(&address)?;
    Ok(Json(result.into()))
}

pub async fn missing_hostname() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Please provide a hostname in the path, e.g. /my.database.com",
            "reason": "missing_hostname",
        })),
    )
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Not found", "reason": "not_found" })),
    )
}
