//! Error types for the Pethub core domain

use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// Error Codes - Machine-readable codes for API consumers
// ============================================================================

/// Machine-readable error codes for API consumers.
///
/// Error code ranges:
/// - 1xxx: Pet/catalog errors
/// - 3xxx: Config errors
/// - 9xxx: Generic errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u16")]
pub enum ErrorCode {
    // Pet errors (1xxx)
    /// Pet not found (1001)
    PetNotFound = 1001,
    /// Required field missing on create (1002)
    PetMissingField = 1002,
    /// Invalid field value (1003)
    PetInvalidField = 1003,

    // Config errors (3xxx)
    /// Invalid configuration (3001)
    ConfigInvalid = 3001,

    // Generic (9xxx)
    /// Internal error (9001)
    InternalError = 9001,
    /// Storage error (9002)
    StorageError = 9002,
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

// ============================================================================
// Error Categories - Classification for retry logic
// ============================================================================

/// Error categorization for client retry handling.
///
/// Helps clients determine whether to retry failed operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// Temporary failure, safe to retry
    Retryable,
    /// Permanent failure, don't retry (invalid input, not found)
    Terminal,
    /// Server-side issue, contact support
    Internal,
}

impl ErrorCategory {
    /// Get the category name as a string
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCategory::Retryable => "retryable",
            ErrorCategory::Terminal => "terminal",
            ErrorCategory::Internal => "internal",
        }
    }

    /// Returns true if this error category indicates the operation can be retried
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Retryable)
    }
}

impl ErrorCode {
    /// Get the numeric value of the error code
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Get the category of this error code
    pub fn category(&self) -> ErrorCategory {
        match self {
            // Terminal - permanent failures, don't retry
            ErrorCode::PetNotFound => ErrorCategory::Terminal,
            ErrorCode::PetMissingField => ErrorCategory::Terminal,
            ErrorCode::PetInvalidField => ErrorCategory::Terminal,
            ErrorCode::ConfigInvalid => ErrorCategory::Terminal,

            // Internal - server-side issues
            ErrorCode::InternalError => ErrorCategory::Internal,
            ErrorCode::StorageError => ErrorCategory::Internal,
        }
    }

    /// Get the error code name as a string
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::PetNotFound => "PET_NOT_FOUND",
            ErrorCode::PetMissingField => "PET_MISSING_FIELD",
            ErrorCode::PetInvalidField => "PET_INVALID_FIELD",
            ErrorCode::ConfigInvalid => "CONFIG_INVALID",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::StorageError => "STORAGE_ERROR",
        }
    }
}

// ============================================================================
// Domain Error
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Catalog errors
    #[error("Pet not found: {0}")]
    PetNotFound(u64),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for field '{field}': {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Storage errors (lock poisoning and the like)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Helper to create a pet not found error
    pub fn pet_not_found(id: crate::PetId) -> Self {
        Error::PetNotFound(id.0)
    }

    /// Returns true if this error represents a "not found" condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::PetNotFound(_))
    }

    /// Get the machine-readable error code for this error.
    ///
    /// Error codes are stable and can be used for client-side error handling
    /// and monitoring.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::PetNotFound(_) => ErrorCode::PetNotFound,
            Error::MissingField(_) => ErrorCode::PetMissingField,
            Error::InvalidField { .. } => ErrorCode::PetInvalidField,
            Error::InvalidConfig(_) => ErrorCode::ConfigInvalid,
            Error::Storage(_) => ErrorCode::StorageError,
        }
    }

    /// Get the error code name (e.g., "PET_NOT_FOUND")
    pub fn code_name(&self) -> &'static str {
        self.code().name()
    }

    /// Get the error category for retry logic.
    pub fn category(&self) -> ErrorCategory {
        self.code().category()
    }

    /// Returns true if this error is safe to retry.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PetId;

    #[test]
    fn test_error_display() {
        let err = Error::PetNotFound(42);
        assert_eq!(err.to_string(), "Pet not found: 42");
    }

    #[test]
    fn test_missing_field_display() {
        let err = Error::MissingField("name");
        assert_eq!(err.to_string(), "Missing required field: name");
    }

    #[test]
    fn test_error_code_pet_not_found() {
        let err = Error::pet_not_found(PetId(7));
        assert_eq!(err.code(), ErrorCode::PetNotFound);
        assert_eq!(err.code().as_u16(), 1001);
        assert_eq!(err.code_name(), "PET_NOT_FOUND");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_error_code_serialization() {
        let code = ErrorCode::PetNotFound;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "1001");
    }

    #[test]
    fn test_error_category_terminal() {
        let err = Error::MissingField("category");
        assert_eq!(err.category(), ErrorCategory::Terminal);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_error_category_internal() {
        let err = Error::Storage("lock poisoned".to_string());
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert_eq!(err.code().as_u16(), 9002);
    }

    #[test]
    fn test_error_category_serialization() {
        let category = ErrorCategory::Terminal;
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"terminal\"");
    }
}
