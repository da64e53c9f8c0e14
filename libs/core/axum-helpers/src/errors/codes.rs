//! Type-safe error codes for API responses.
//!
//! Each error code carries:
//! - String representation for client consumption (e.g., "VALIDATION_ERROR")
//! - Integer code for logging and monitoring (e.g., 1001)
//! - Default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Request body validation failed");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request body failed validation
    ValidationError,

    /// Path or query parameter violates a constraint
    InvalidParameter,

    /// JSON extraction from request body failed
    JsonExtraction,

    /// Requested resource was not found
    NotFound,

    // Server errors (1000s)
    /// An unexpected internal server error occurred
    InternalError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    // Database errors (2000-2999)
    /// Database connection or query error
    DatabaseError,

    // I/O errors (4000-4999)
    IoError,

    // Serialization errors (5000-5999)
    SerdeJsonError,
}

impl ErrorCode {
    /// Returns the string representation sent to clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidParameter => "INVALID_PARAMETER",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::IoError => "IO_ERROR",
            Self::SerdeJsonError => "SERDE_JSON_ERROR",
        }
    }

    /// Returns the integer code used in logs and monitoring.
    ///
    /// Ranges:
    /// - 1000-1999: client and generic server errors
    /// - 2000-2999: database errors
    /// - 4000-4999: I/O errors
    /// - 5000-5999: serialization errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidParameter => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::ServiceUnavailable => 1011,
            Self::DatabaseError => 2003,
            Self::IoError => 4001,
            Self::SerdeJsonError => 5001,
        }
    }

    /// Returns the message used when no more specific one is available.
    ///
    /// Every server-side code resolves to the same opaque message so that
    /// internal detail never reaches the client.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError | Self::JsonExtraction => "Request body validation failed",
            Self::InvalidParameter => "Invalid request parameter",
            Self::NotFound => "Resource not found",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
            Self::InternalError | Self::DatabaseError | Self::IoError | Self::SerdeJsonError => {
                "An unexpected error occurred"
            }
        }
    }

    /// Whether the code describes a failure on the server side.
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::InternalError
                | Self::ServiceUnavailable
                | Self::DatabaseError
                | Self::IoError
                | Self::SerdeJsonError
        )
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
