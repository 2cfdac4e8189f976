//! API error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use salecast_core::SalesError;
use serde_json::json;
use thiserror::Error;

/// Result type alias for handler return values
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced to HTTP clients
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<SalesError> for ApiError {
    fn from(err: SalesError) -> Self {
        match err {
            SalesError::MissingIdentity => ApiError::MissingParameter("email"),
            SalesError::InsufficientData { .. } => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_maps_to_400() {
        let response = ApiError::MissingParameter("email").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_missing_identity_converts_to_missing_parameter() {
        let err: ApiError = SalesError::MissingIdentity.into();
        assert_eq!(err.to_string(), "Missing required parameter: email");
    }
}
