//! Error handling for Patchwork.
//!
//! Decode failures in the textual shape format are per-record and
//! recoverable: the codec skips the offending record and keeps going, so
//! [`ParseError`] carries enough context (record, field, token) to log a
//! useful diagnostic. All error types use `thiserror`.

use thiserror::Error;

/// Per-record failure while decoding the textual shape format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token could not be parsed as the number the record calls for.
    #[error("malformed {field} token `{token}` in {record} record")]
    MalformedToken {
        /// The record keyword being parsed.
        record: &'static str,
        /// The field within the record.
        field: &'static str,
        /// The offending token.
        token: String,
    },

    /// The stream ended in the middle of a record.
    #[error("{record} record truncated while reading {field}")]
    Truncated {
        /// The record keyword being parsed.
        record: &'static str,
        /// The field that was missing.
        field: &'static str,
    },
}

/// Main error type for Patchwork.
///
/// A unified error type for public APIs; per-record codec failures roll up
/// transparently.
#[derive(Error, Debug)]
pub enum Error {
    /// Decode failure in the textual shape format
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a decode error
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Parse(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
