//! Type-safe error codes for structured logs.
//!
//! Every error response is logged with an `error_code` field carrying
//! [`ErrorCode::code`], so failures can be grouped without parsing messages.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request body failed validation rules
    ValidationError,

    /// Path id is not an integer
    InvalidId,

    /// Request body is not valid JSON for the target type
    JsonExtraction,

    /// Resource or route not found
    NotFound,

    // Database errors (2000-2999)
    /// No row matched a lookup that required one
    DatabaseNotFound,

    /// Query or statement execution failed
    DatabaseError,

    /// Could not reach the database
    DatabaseConnection,

    /// No pooled connection became free in time
    DatabasePoolTimeout,

    DatabaseUnhandled,

    // Runtime errors (5000s)
    /// A handler panicked and was caught at the router boundary
    HandlerPanic,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidId => "INVALID_ID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::DatabaseNotFound => "DATABASE_NOT_FOUND",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::DatabaseConnection => "DATABASE_CONNECTION",
            Self::DatabasePoolTimeout => "DATABASE_POOL_TIMEOUT",
            Self::DatabaseUnhandled => "DATABASE_UNHANDLED",
            Self::HandlerPanic => "HANDLER_PANIC",
        }
    }

    /// Integer code for logging and monitoring.
    ///
    /// Ranges:
    /// - 1000-1999: client and generic errors
    /// - 2000-2999: database errors
    /// - 5000-5999: runtime errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidId => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,

            Self::DatabaseNotFound => 2001,
            Self::DatabaseError => 2003,
            Self::DatabaseConnection => 2004,
            Self::DatabasePoolTimeout => 2013,
            Self::DatabaseUnhandled => 2099,

            Self::HandlerPanic => 5001,
        }
    }

    /// Message sent to clients when nothing more specific applies.
    ///
    /// Database and runtime failures all share the generic internal message;
    /// their details only go to the logs.
    pub fn default_message(&self) -> &'static str {
        use super::messages;

        match self {
            Self::ValidationError => messages::VALIDATION_FAILED,
            Self::InvalidId => messages::INVALID_ID,
            Self::JsonExtraction => messages::INVALID_JSON,
            Self::NotFound | Self::DatabaseNotFound => messages::NOT_FOUND_RESOURCE,
            Self::DatabasePoolTimeout => messages::SERVICE_UNAVAILABLE,
            Self::DatabaseError
            | Self::DatabaseConnection
            | Self::DatabaseUnhandled
            | Self::HandlerPanic => messages::INTERNAL_ERROR,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
