use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use focusgate_domain::DomainError;
use serde_json::json;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::SiteNotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),

            DomainError::InvalidDomainName(_)
            | DomainError::InvalidReason(_)
            | DomainError::InvalidDuration(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),

            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
