//! Request methods.

use std::fmt;
use std::str::FromStr;

use crate::parser::error::Error;

/// Request methods understood by the server.
///
/// Only `GET` is served; anything else is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET method: requests the contents of a file.
    GET,
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::GET),
            _ => Err(Error::InvalidMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Returns true only for the exact token `GET`.
pub fn is_valid_method(s: &str) -> bool {
    s.parse::<Method>().is_ok()
}
