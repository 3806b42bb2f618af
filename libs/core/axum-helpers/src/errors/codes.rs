//! Type-safe error codes for API failures.
//!
//! Each code carries:
//! - String representation (e.g., "STORE_UNAVAILABLE")
//! - Integer code for logging and monitoring (e.g., 2001)
//! - Default human-readable message
//!
//! Codes never appear in response bodies; they are attached to log events as
//! the `error_code` field so failures can be correlated across instances.
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::StoreUnavailable;
//! assert_eq!(code.as_str(), "STORE_UNAVAILABLE");
//! assert_eq!(code.code(), 2001);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Requested resource was not found
    NotFound,

    /// A request handler panicked
    HandlerPanic,

    // Backing store errors (2000-2999)
    /// No connection to the backing store was ever established
    StoreUnavailable,

    /// A backing store operation failed or timed out
    StoreFailure,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::HandlerPanic => "HANDLER_PANIC",
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::StoreFailure => "STORE_FAILURE",
        }
    }

    /// Get the integer code for logging and monitoring.
    ///
    /// Ranges:
    /// - 1000-1999: Client and generic server errors
    /// - 2000-2999: Backing store errors
    pub fn code(&self) -> i32 {
        match self {
            Self::NotFound => 1004,
            Self::HandlerPanic => 1006,

            Self::StoreUnavailable => 2001,
            Self::StoreFailure => 2002,
        }
    }

    /// Get the default user-facing error message.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::NotFound => "The requested resource was not found",
            Self::HandlerPanic => "An internal server error occurred",
            Self::StoreUnavailable => "Store not initialized",
            Self::StoreFailure => "Store error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(ErrorCode::StoreUnavailable.as_str(), "STORE_UNAVAILABLE");
        assert_eq!(ErrorCode::StoreFailure.as_str(), "STORE_FAILURE");
    }

    #[test]
    fn test_error_code_integer_codes() {
        assert_eq!(ErrorCode::NotFound.code(), 1004);
        assert_eq!(ErrorCode::StoreUnavailable.code(), 2001);
        assert_eq!(ErrorCode::StoreFailure.code(), 2002);
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::HandlerPanic.to_string(), "HANDLER_PANIC");
    }

    #[test]
    fn test_error_code_serialization_matches_as_str() {
        for code in [
            ErrorCode::NotFound,
            ErrorCode::HandlerPanic,
            ErrorCode::StoreUnavailable,
            ErrorCode::StoreFailure,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }
}
