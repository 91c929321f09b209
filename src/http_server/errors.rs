//! # HTTP Errors
//!
//! Error types for the HTTP surface and server startup.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::storage::StorageError;
use crate::store::StoreError;

/// Plain-text body returned when a candidate fails validation
pub const NOT_PROPERLY_FORMATTED: &str = "The animal is not properly formatted.";

/// Plain-text body returned for unknown ids
pub const NOT_FOUND_BODY: &str = "Not Found";

/// Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// No record with the requested id
    #[error("Resource not found")]
    NotFound,

    /// Candidate failed validation
    #[error("{0}")]
    Validation(String),

    /// Request body is not JSON
    #[error("Malformed JSON body: {0}")]
    MalformedBody(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Mirror write failed
    #[error("Persistence failed: {0}")]
    Persistence(String),

    /// Lock poisoned or similar
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(e) => ApiError::Validation(e.to_string()),
            StoreError::Persistence(e) => ApiError::Persistence(e.to_string()),
        }
    }
}

/// Error response body for server-side failures
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::NotFound => (status, NOT_FOUND_BODY).into_response(),
            ApiError::Validation(_) => (status, NOT_PROPERLY_FORMATTED).into_response(),
            ApiError::MalformedBody(_) => (status, self.to_string()).into_response(),
            ApiError::Persistence(_) | ApiError::Internal(_) => {
                let body = Json(ErrorResponse {
                    error: self.to_string(),
                    code: status.as_u16(),
                });
                (status, body).into_response()
            }
        }
    }
}

/// Result type for server startup
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors raised while configuring or starting the server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Invalid socket address: {0}")]
    InvalidAddress(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{SchemaError, ValidationDetails};

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Validation("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Persistence("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_mapping() {
        let err = ApiError::from(StoreError::Validation(SchemaError::validation_failed(
            ValidationDetails::missing_field("diet"),
        )));
        assert!(matches!(err, ApiError::Validation(_)));

        let err = ApiError::from(StoreError::Persistence(
            StorageError::write_failed_no_source("disk full"),
        ));
        assert!(matches!(err, ApiError::Persistence(_)));
    }

    #[test]
    fn test_validation_response_status() {
        let response = ApiError::Validation("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
