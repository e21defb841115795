//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// API errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Post text was empty after trimming.
    #[error("empty post")]
    EmptyPost,
}

/// Fixed rejection body for empty posts.
#[derive(Debug, Serialize)]
struct EmptyPostBody {
    safe: bool,
    reason: &'static str,
    category: &'static str,
    toxicity_score: u8,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::EmptyPost => {
                let body = EmptyPostBody {
                    safe: false,
                    reason: "Empty post",
                    category: "empty",
                    toxicity_score: 0,
                };
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }
        }
    }
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
