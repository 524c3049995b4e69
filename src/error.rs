use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::router::RouteError;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub routes: usize,
}

/// Custom error type for API endpoints
///
/// Maps route table failures to HTTP status codes and formats them as
/// JSON responses.
#[derive(Debug)]
pub enum ApiError {
    /// No route is bound to the requested path
    PathNotFound(String),
    /// No route is registered under the requested name
    NameNotFound(String),
    /// The route table itself is misconfigured
    Internal(RouteError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::PathNotFound(path) => (
                StatusCode::NOT_FOUND,
                format!("No route matches path: {}", path),
            ),
            ApiError::NameNotFound(name) => (
                StatusCode::NOT_FOUND,
                format!("Route not found: {}", name),
            ),
            ApiError::Internal(err) => {
                tracing::error!("Route table error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Route table error: {}", err),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<RouteError> for ApiError {
    fn from(err: RouteError) -> Self {
        match err {
            RouteError::PathNotFound(path) => ApiError::PathNotFound(path),
            RouteError::NameNotFound(name) => ApiError::NameNotFound(name),
            other => {
                debug_assert!(other.is_configuration());
                ApiError::Internal(other)
            }
        }
    }
}
