//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP
//! responses. All errors implement `IntoResponse` to provide consistent
//! error formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// All errors that can occur in the application are represented by this enum.
/// Each variant implements automatic conversion to HTTP responses via
/// `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// No phone with the given ID exists in the collection
    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    /// Upload request carried no file under the expected field name
    #[error("No file was uploaded")]
    MissingUpload,

    /// Uploaded file's declared content type is not JSON
    #[error("Uploaded file must be a JSON file")]
    UploadNotJson,

    /// Uploaded file's bytes did not parse as JSON (after the file was
    /// already overwritten)
    #[error("Invalid JSON format: {0}")]
    InvalidUpload(String),

    /// Multipart request body could not be read
    #[error("Malformed upload request: {0}")]
    BadUpload(String),

    /// Error occurred while reading or writing the collection file
    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::PhoneNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::MissingUpload => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::UploadNotJson => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::InvalidUpload(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::BadUpload(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::PhoneNotFound("9".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_upload_errors_map_to_400() {
        for err in [
            AppError::MissingUpload,
            AppError::UploadNotJson,
            AppError::InvalidUpload("boom".to_string()),
        ] {
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_store_errors_map_to_500() {
        let err = AppError::from(StoreError::Missing("phones.json".to_string()));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
