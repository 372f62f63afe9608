use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// This error type provides consistent error handling across all endpoints,
/// automatically mapping different error types to appropriate HTTP status codes
/// and formatting them as JSON responses. Internal errors carry a fixed
/// per-operation message for the caller; the underlying cause is logged and
/// never surfaced.
#[derive(Debug)]
pub enum ApiError {
    /// Non-integer id in path parameter
    InvalidId(String),
    /// Kebab not found in database
    NotFound(i32),
    /// Database operation error
    Internal {
        message: &'static str,
        source: anyhow::Error,
    },
}

impl ApiError {
    pub fn internal(message: &'static str, source: anyhow::Error) -> Self {
        ApiError::Internal { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidId(id) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid kebab id: expected an integer, got '{}'", id),
            ),
            ApiError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Kebab not found: {}", id),
            ),
            ApiError::Internal { message, source } => {
                tracing::error!("{}: {:#}", message, source);
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
