//! Error types for the ingestion pipeline
//!
//! Three tiers: client errors (400) echo their message back to the
//! caller, server errors (500) return a generic message and keep the
//! detail in logs, and dry-run is not an error at all.

use thiserror::Error;

/// Result type alias using the ingestion Error
pub type Result<T> = std::result::Result<T, Error>;

/// Ingestion pipeline error types
#[derive(Error, Debug)]
pub enum Error {
    /// Request body absent or empty
    #[error("Missing body")]
    MissingBody,

    /// isBase64Encoded was set but the body is not a string
    #[error("Body is base64-encoded but not a string")]
    Base64NotString,

    /// Base64 decoding failed
    #[error("Body is not valid base64: {0}")]
    InvalidBase64(String),

    /// Decoded bytes are not UTF-8
    #[error("Body is not valid UTF-8: {0}")]
    InvalidUtf8(String),

    /// Body text failed JSON parsing
    #[error("Body is not valid JSON: {0}")]
    InvalidJson(String),

    /// appName absent, not a string, or blank
    #[error("Missing or invalid appName")]
    InvalidAppName,

    /// timestamp absent, non-numeric, non-finite, or outside the UTC calendar
    #[error("Missing or invalid timestamp")]
    InvalidTimestamp,

    /// Live mode without a constructed storage client
    #[error("Storage client is not initialized")]
    StorageUnavailable,

    /// S3 put-object failure
    #[error("Storage write failed: {0}")]
    Storage(String),

    /// Anything else
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Error::MissingBody
            | Error::Base64NotString
            | Error::InvalidBase64(_)
            | Error::InvalidUtf8(_)
            | Error::InvalidJson(_)
            | Error::InvalidAppName
            | Error::InvalidTimestamp => 400,
            Error::StorageUnavailable | Error::Storage(_) | Error::Internal(_) => 500,
        }
    }

    /// Message safe to return to the caller.
    ///
    /// Client errors echo their display text; server errors collapse to a
    /// generic message so internals never leak past the log stream.
    pub fn public_message(&self) -> String {
        if self.status_code() == 400 {
            self.to_string()
        } else {
            "Internal error".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_400() {
        assert_eq!(Error::MissingBody.status_code(), 400);
        assert_eq!(Error::InvalidJson("eof".into()).status_code(), 400);
        assert_eq!(Error::InvalidAppName.status_code(), 400);
        assert_eq!(Error::InvalidTimestamp.status_code(), 400);
    }

    #[test]
    fn test_server_errors_are_500() {
        assert_eq!(Error::StorageUnavailable.status_code(), 500);
        assert_eq!(Error::Storage("denied".into()).status_code(), 500);
        assert_eq!(Error::Internal("boom".into()).status_code(), 500);
    }

    #[test]
    fn test_client_message_is_echoed() {
        let err = Error::InvalidJson("expected value at line 1".into());
        assert_eq!(
            err.public_message(),
            "Body is not valid JSON: expected value at line 1"
        );
    }

    #[test]
    fn test_server_message_is_generic() {
        let err = Error::Storage("AccessDenied: not allowed".into());
        assert_eq!(err.public_message(), "Internal error");
        assert!(err.to_string().contains("AccessDenied"));
    }
}
