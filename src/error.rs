//! Error types for the Tradovate bridge.
//!
//! This module provides a single error type covering every failure mode of
//! the bridge: local parameter-validation failures, HTTP transport failures,
//! API error responses, and response-decoding failures.

use thiserror::Error;

/// A specialized `Result` type for bridge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all bridge operations.
///
/// Validation variants are raised by the operation registry before any
/// network activity and always name the offending request field. The
/// remaining variants surface failures from the HTTP client unchanged.
#[derive(Error, Debug)]
pub enum Error {
    /// A required request parameter was absent.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the missing parameter
        field: &'static str,
    },

    /// A request parameter was present but had the wrong type.
    #[error("invalid type for field: {field}")]
    TypeMismatch {
        /// Name of the mistyped parameter
        field: &'static str,
    },

    /// A parameter required only under a condition on another parameter
    /// was absent (e.g. `price` for limit orders).
    #[error("{field} is required for Limit orders")]
    MissingConditionalField {
        /// Name of the conditionally required parameter
        field: &'static str,
    },

    /// A risk-limit parameter was absent, mistyped, or negative.
    #[error("missing or invalid {field}")]
    InvalidLimit {
        /// Name of the offending limit parameter
        field: &'static str,
    },

    /// A timestamp parameter did not parse as RFC 3339.
    #[error("invalid {field}: {source}")]
    InvalidTimestamp {
        /// Name of the unparsable parameter
        field: &'static str,
        /// Underlying parse failure
        #[source]
        source: chrono::ParseError,
    },

    /// A historical-data query's end time did not follow its start time.
    #[error("end time must be after start time")]
    InvalidTimeRange,

    /// HTTP request failed to complete (DNS, connect, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server responded with a non-success status.
    #[error("API error: status {status}: {}", .message.as_deref().unwrap_or("no error text"))]
    Api {
        /// HTTP status code
        status: u16,
        /// Server-supplied error text, when the body carried one
        message: Option<String>,
    },

    /// A response body did not parse as the expected type.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Authentication was rejected by the server.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The request named an operation the registry does not know.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// The process environment is missing required configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Stdio transport failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` if this error was raised by parameter validation,
    /// before any network activity.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingField { .. }
                | Error::TypeMismatch { .. }
                | Error::MissingConditionalField { .. }
                | Error::InvalidLimit { .. }
                | Error::InvalidTimestamp { .. }
                | Error::InvalidTimeRange
        )
    }

    /// The request field this error names, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::MissingField { field }
            | Error::TypeMismatch { field }
            | Error::MissingConditionalField { field }
            | Error::InvalidLimit { field }
            | Error::InvalidTimestamp { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication(_))
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_carry_field() {
        let err = Error::MissingField { field: "accountId" };
        assert!(err.is_validation());
        assert_eq!(err.field(), Some("accountId"));

        let err = Error::InvalidLimit { field: "dayMaxLoss" };
        assert!(err.is_validation());
        assert_eq!(err.field(), Some("dayMaxLoss"));
        assert_eq!(err.to_string(), "missing or invalid dayMaxLoss");
    }

    #[test]
    fn test_conditional_field_message() {
        let err = Error::MissingConditionalField { field: "price" };
        assert_eq!(err.to_string(), "price is required for Limit orders");
    }

    #[test]
    fn test_api_error_is_not_validation() {
        let err = Error::Api {
            status: 500,
            message: Some("Internal server error".to_string()),
        };
        assert!(!err.is_validation());
        assert!(err.is_server_error());
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_time_range_error() {
        let err = Error::InvalidTimeRange;
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "end time must be after start time");
    }
}
