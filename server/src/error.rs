//! Mapping of store failures to HTTP responses.

use crate::api::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use rankboard_store::StoreError;
use thiserror::Error;

/// Errors returned by API handlers, rendered as `{"error", "message"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("user does not exist: {0}")]
    UserNotFound(String),

    #[error("{0}")]
    InvalidRating(String),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("search query is required")]
    MissingQuery,

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::UserNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidRating(_) | Self::InvalidRequest(_) | Self::MissingQuery => {
                StatusCode::BAD_REQUEST
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "user_not_found",
            Self::InvalidRating(_) => "invalid_rating",
            Self::InvalidRequest(_) => "invalid_request",
            Self::MissingQuery => "invalid_query",
            Self::Internal(_) => "internal_error",
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::UserNotFound(id.into_inner()),
            StoreError::InvalidRating(e) => Self::InvalidRating(e.to_string()),
            // Handlers answer empty stats themselves; reaching here is a bug.
            StoreError::EmptyRegistry => Self::Internal("registry is empty".to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.code().to_string(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
