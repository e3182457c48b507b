use crate::handlers;
use crate::middleware::record_request;
use crate::state::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::normalize_path::NormalizePath;

pub const HOSTNAME_ROUTE: &str = "/{hostname}";
pub const ADDRESS_ROUTE: &str = "/ip/{address}";

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::missing_hostname))
        .route("/healthz", get(handlers::liveness))
        .route("/readyz", get(handlers::readiness))
        .route("/metrics", get(handlers::get_metrics))
        .route("/cache/stats", get(handlers::get_cache_stats))
        .route("/cache/reset", post(handlers::reset_cache))
        .route(ADDRESS_ROUTE, get(handlers::lookup_by_address))
        .route(HOSTNAME_ROUTE, get(handlers::lookup_by_hostname))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(state.clone(), record_request))
        .with_state(state)
}

/// Strips trailing slashes before routing so `/db.example.com/` reaches the hostname route.
pub fn with_path_normalization(router: Router) -> NormalizePath<Router> {
    NormalizePath::trim_trailing_slash(router)
}
