//! Public API types

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};

// Errors

/// JSON body returned for every failed request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

pub enum ApiError {
    /// The caller sent something we can't accept
    BadRequest(String),
    /// Anything else, including failures from the calendar
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn bad_request(message: impl ToString) -> Self {
        Self::BadRequest(message.to_string())
    }
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(error) => {
                tracing::warn!("Rejected request: {}", error);
                let body = Json(ErrorResponse {
                    error,
                    details: None,
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::Internal(err) => {
                // Always log the error
                tracing::error!("{:#}", err);
                let body = Json(ErrorResponse {
                    error: String::from("Internal server error"),
                    details: Some(format!("{:#}", err)),
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

/// Enables using `?` on functions that return `Result<_,
/// anyhow::Error>` to turn them into `Result<_, ApiError>`
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}

// Re-export public types from each route

pub mod health {
    pub use crate::api::routes::health::public::*;
}

pub mod reservations {
    pub use crate::api::routes::reservations::public::*;
}
