use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use zone_finder_domain::DomainError;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            e if e.is_invalid_input() => StatusCode::BAD_REQUEST,
            DomainError::ResolutionTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            e if e.is_resolution_failure() => StatusCode::BAD_GATEWAY,
            DomainError::NoZoneMatch(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self.0 {
            DomainError::Internal(_) => "internal error".to_string(),
            other => other.to_string(),
        };

        (
            status,
            Json(json!({ "error": message, "reason": self.0.reason() })),
        )
            .into_response()
    }
}
