use crate::routes::{ADDRESS_ROUTE, HOSTNAME_ROUTE};
use crate::state::AppState;
use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

pub async fn record_request(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = path_label(request.extensions().get::<MatchedPath>().map(MatchedPath::as_str));

    let response = next.run(request).await;

    state
        .request_metrics
        .record_http_request(method.as_str(), &path, response.status().as_u16());
    response
}

/// Collapses parameterised routes so the label set stays bounded.
pub fn path_label(matched: Option<&str>) -> String {
    match matched {
        Some(HOSTNAME_ROUTE) => "/fqdn".to_string(),
        Some(ADDRESS_ROUTE) => "/ip".to_string(),
        Some(route) => route.to_string(),
        None => "unmatched".to_string(),
    }
}
