//! Error types for the `recipe-api` crate.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors raised by a [`RecipeStore`](crate::RecipeStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The pagination key could not be decoded.
    #[error("Invalid start key: {0}")]
    InvalidStartKey(String),

    /// The recipe body was rejected.
    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),

    /// The storage backend failed.
    #[error("Store error ({backend}): {message}")]
    Backend {
        /// The backend that produced the error.
        backend: String,
        /// A description of the failure.
        message: String,
    },
}

/// A convenience result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors returned from API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Recipe not found")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidStartKey(_) | StoreError::InvalidRecipe(_) => {
                ApiError::BadRequest(err.to_string())
            }
            StoreError::Backend { .. } => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({"errors": ["Recipe not found"]})))
                    .into_response()
            }
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({"errors": [message]}))).into_response()
            }
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": message}))).into_response()
            }
        }
    }
}
