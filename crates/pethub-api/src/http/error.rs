//! HTTP error types and response conversion
//!
//! Provides ergonomic error handling for HTTP handlers with automatic
//! status code mapping based on error type.
//!
//! Full error details are logged internally; messages returned to clients
//! carry the resource identifier but never internals.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pethub_core::ErrorCode;
use serde::{Deserialize, Serialize};
use tracing::error;

/// HTTP API error with status code and message
#[derive(Debug)]
pub struct HttpError {
    pub status: StatusCode,
    pub message: String,
    pub error_code: ErrorCode,
}

impl HttpError {
    /// Create an internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            error_code: ErrorCode::InternalError,
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
            error_code: ErrorCode::PetNotFound,
        }
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            error_code: ErrorCode::PetInvalidField,
        }
    }
}

/// JSON error response body
///
/// Public so tests can parse error responses; has both Serialize (for API
/// responses) and Deserialize (for tests).
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Machine-readable error code (e.g., 1001)
    pub error_code: u16,
    /// Error code name (e.g., "PET_NOT_FOUND")
    pub error_type: String,
    /// Error category for retry logic (e.g., "terminal", "internal")
    pub category: String,
    /// Whether this error is safe to retry
    pub retryable: bool,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let category = self.error_code.category();
        let body = ErrorResponse {
            error: self.message,
            error_code: self.error_code.as_u16(),
            error_type: self.error_code.name().to_string(),
            category: category.name().to_string(),
            retryable: category.is_retryable(),
        };
        (self.status, Json(body)).into_response()
    }
}

/// Sanitize error messages for client responses
///
/// Returns a user-friendly message that doesn't expose internal
/// implementation details.
fn sanitize_error_message(err: &pethub_core::Error) -> String {
    use pethub_core::Error;
    match err {
        // Resource not found - safe to expose the identifier
        Error::PetNotFound(id) => format!("Pet {} not found", id),

        // Validation - safe user feedback
        Error::MissingField(field) => format!("Missing required field: {}", field),
        Error::InvalidField { field, message } => {
            format!("Invalid value for field '{}': {}", field, message)
        }

        // Config errors - never expose config internals
        Error::InvalidConfig(_) => "Configuration error".to_string(),

        // Storage errors - never expose store internals
        Error::Storage(_) => "An internal error occurred".to_string(),
    }
}

/// Convert domain errors to HTTP errors
///
/// Full error details are logged internally but sanitized messages are
/// returned to clients.
impl From<pethub_core::Error> for HttpError {
    fn from(err: pethub_core::Error) -> Self {
        use pethub_core::Error;

        // Log full error details internally for debugging
        error!(error = %err, "API error occurred");

        let error_code = err.code();
        let message = sanitize_error_message(&err);

        let status = match &err {
            // 404 Not Found
            Error::PetNotFound(_) => StatusCode::NOT_FOUND,

            // 400 Bad Request
            Error::MissingField(_) | Error::InvalidField { .. } => StatusCode::BAD_REQUEST,

            // 500 Internal Server Error (default)
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        HttpError {
            status,
            message,
            error_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pethub_core::{Error, PetId};

    #[test]
    fn test_http_error_internal() {
        let err = HttpError::internal("something went wrong");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "something went wrong");
        assert_eq!(err.error_code, ErrorCode::InternalError);
    }

    #[test]
    fn test_http_error_not_found() {
        let err = HttpError::not_found("Pet 5 not found");
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.error_code, ErrorCode::PetNotFound);
    }

    #[test]
    fn test_domain_pet_not_found_maps_to_404() {
        let http_err: HttpError = Error::pet_not_found(PetId(5)).into();
        assert_eq!(http_err.status, StatusCode::NOT_FOUND);
        assert!(http_err.message.contains('5'));
        assert!(http_err.message.contains("not found"));
        assert_eq!(http_err.error_code.as_u16(), 1001);
    }

    #[test]
    fn test_domain_missing_field_maps_to_400() {
        let http_err: HttpError = Error::MissingField("name").into();
        assert_eq!(http_err.status, StatusCode::BAD_REQUEST);
        assert!(http_err.message.contains("name"));
        assert_eq!(http_err.error_code.as_u16(), 1002);
    }

    #[test]
    fn test_domain_storage_error_is_sanitized() {
        let http_err: HttpError = Error::Storage("lock poisoned at catalog.rs:42".into()).into();
        assert_eq!(http_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        // No internals leak to the client
        assert_eq!(http_err.message, "An internal error occurred");
        assert!(!http_err.message.contains("catalog.rs"));
    }
}
