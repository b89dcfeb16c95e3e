//! Error types for the request parser.

use thiserror::Error;

/// Errors that can occur while parsing a raw request line.
///
/// Every variant is terminal for the request: the handler closes the
/// connection without sending a response.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The method token is not the single supported method.
    #[error("Invalid method: {0}")]
    InvalidMethod(String),

    /// The version token following `HTTP/` is not the supported version.
    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    /// Nothing exists on disk at the resolved path.
    #[error("Invalid file: {0}")]
    InvalidFile(String),

    /// A delimiter is missing or a token is not valid UTF-8.
    #[error("Malformed request: {0}")]
    MalformedRequest(&'static str),
}
