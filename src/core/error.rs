use std::io;
use thiserror::Error;

use crate::protocol::PACKET_SIZE;

/// Custom error types for spotcomm
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid packet length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new invalid length error for a buffer of `actual` bytes
    pub fn invalid_length(actual: usize) -> Self {
        Error::InvalidLength {
            expected: PACKET_SIZE,
            actual,
        }
    }

    /// Creates a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Returns true if this error reports a malformed buffer length
    pub fn is_invalid_length(&self) -> bool {
        matches!(self, Error::InvalidLength { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::invalid_length(2);
        assert!(err.is_invalid_length());
        assert_eq!(
            err.to_string(),
            "Invalid packet length: expected 3 bytes, got 2"
        );

        let err = Error::config("bad period");
        assert!(matches!(err, Error::Config(_)));
        assert!(!err.is_invalid_length());
        assert_eq!(err.to_string(), "Configuration error: bad period");
    }

    #[test]
    fn test_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::Other, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
