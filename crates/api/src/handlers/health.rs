use crate::dto::StatusResponse;
use axum::Json;

pub async fn liveness() -> Json<StatusResponse> {
    Json(StatusResponse::ok())
}

/// The subnets table is loaded before the listener binds, so a serving
/// process is always ready.
pub async fn readiness() -> Json<StatusResponse> {
    Json(StatusResponse::ok())
}
