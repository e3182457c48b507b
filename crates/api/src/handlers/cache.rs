use crate::{
    dto::{CacheStatsResponse, StatusResponse},
    state::AppState,
};
use axum::{extract::State, Json};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_cache_stats")]
pub async fn get_cache_stats(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let snapshot = state.get_cache_stats.execute();

    debug!(
        total_entries = snapshot.total_entries,
        max_entries = snapshot.max_entries,
        "Cache statistics retrieved"
    );

    Json(snapshot.into())
}

#[instrument(skip(state), name = "api_reset_cache")]
pub async fn reset_cache(State(state): State<AppState>) -> Json<StatusResponse> {
    state.reset_cache.execute();
    Json(StatusResponse::cache_reset())
}
