//! Error types for the T3 client
//!
//! Every fallible operation in the crate returns [`AppError`]. There is no
//! retry layer: transport and authentication failures surface immediately
//! and the calling binary exits non-zero.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication failed or the bearer token was rejected
    #[error("unauthorized")]
    Unauthorized,

    /// The requested resource does not exist
    #[error("not found")]
    NotFound,

    /// The server returned a status code we have no specific handling for
    #[error("unexpected status: {0}")]
    Unexpected(StatusCode),

    /// The caller supplied an invalid value
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A response was missing an expected field
    #[error("missing field `{0}` in response")]
    MissingField(&'static str),

    /// Transport-level failure (connection refused, timeout, TLS, ...)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization or deserialization failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing failure
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unauthorized() {
        assert_eq!(AppError::Unauthorized.to_string(), "unauthorized");
    }

    #[test]
    fn display_not_found() {
        assert_eq!(AppError::NotFound.to_string(), "not found");
    }

    #[test]
    fn display_unexpected_contains_status() {
        let error = AppError::Unexpected(StatusCode::BAD_REQUEST);
        assert!(error.to_string().contains("400"));
    }

    #[test]
    fn display_invalid_input() {
        let error = AppError::InvalidInput("page size must be positive".to_string());
        assert_eq!(
            error.to_string(),
            "invalid input: page size must be positive"
        );
    }

    #[test]
    fn display_missing_field() {
        let error = AppError::MissingField("accessToken");
        assert_eq!(error.to_string(), "missing field `accessToken` in response");
    }

    #[test]
    fn from_serde() {
        let serde_error = serde_json::from_str::<serde_json::Value>("{bad json}").unwrap_err();
        let app_error: AppError = serde_error.into();
        match app_error {
            AppError::Json(_) => (),
            other => panic!("expected Json error, got {other:?}"),
        }
    }

    #[test]
    fn from_io() {
        let io_error = std::io::Error::other("disk full");
        let app_error: AppError = io_error.into();
        match app_error {
            AppError::Io(_) => (),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
