//! Protocol versions.

use std::fmt;
use std::str::FromStr;

use crate::parser::error::Error;

/// Supported protocol versions.
///
/// The token is what follows the `HTTP/` marker, so `1.1` rather than
/// `HTTP/1.1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVersion {
    Http11,
}

impl FromStr for HttpVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1.1" => Ok(HttpVersion::Http11),
            _ => Err(Error::InvalidVersion(s.to_string())),
        }
    }
}

impl fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpVersion::Http11 => write!(f, "HTTP/1.1"),
        }
    }
}

/// Returns true only for the exact token `1.1`.
pub fn is_valid_version(s: &str) -> bool {
    s.parse::<HttpVersion>().is_ok()
}
