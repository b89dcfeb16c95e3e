//! Request line parsing and representation.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::parser::error::Error;
use crate::parser::method::Method;
use crate::parser::version::HttpVersion;

/// Marker that precedes the version token.
pub const HTTP_VERSION_MARKER: &[u8] = b"HTTP/";

/// Maximum length of the method token, in bytes.
pub const METHOD_LEN: usize = 7;

/// Maximum length of the version token, in bytes.
pub const VERSION_LEN: usize = 7;

/// Maximum length of the requested path, in bytes.
pub const PATH_LEN: usize = 255;

/// Document served when the request line names no file.
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// A string holding at most `N` bytes.
///
/// Built by truncating a raw token, so a value can never outgrow the
/// field it was extracted for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounded<const N: usize>(String);

impl<const N: usize> Bounded<N> {
    /// Truncate `bytes` to `N` and decode the result as UTF-8.
    ///
    /// Returns `None` if the truncated bytes are not valid UTF-8.
    pub fn truncate(bytes: &[u8]) -> Option<Self> {
        let end = bytes.len().min(N);
        std::str::from_utf8(&bytes[..end])
            .ok()
            .map(|s| Self(s.to_string()))
    }

    /// The contained string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the contained string in bytes, never more than `N`.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the contained string is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> fmt::Display for Bounded<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated request line.
///
/// Only produced by a successful parse, so every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The request method
    pub method: Method,
    /// The protocol version
    pub version: HttpVersion,
    /// The requested file, relative to the document root
    pub path: Bounded<PATH_LEN>,
}

impl Request {
    /// Resolve the requested file against a document root.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(self.path.as_str())
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} /{} {}", self.method, self.path, self.version)
    }
}

/// Returns true iff a filesystem entry exists at `path`.
///
/// Only existence is checked; the entry may be a directory or unreadable.
pub fn is_valid_file(path: &Path) -> bool {
    path.exists()
}

/// Parse a raw request, resolving the file against the working directory.
///
/// # Arguments
///
/// * `input` - The bytes of a single receive
///
/// # Returns
///
/// The validated request, or the reason it was rejected
pub fn parse_request(input: &[u8]) -> Result<Request, Error> {
    parse_request_in(input, Path::new("."))
}

/// Parse a raw request, resolving the file against `root`.
///
/// Tokens are extracted in order (method, version, path) and each is
/// validated before the next is looked at, so the first problem found
/// decides the error.
pub fn parse_request_in(input: &[u8], root: &Path) -> Result<Request, Error> {
    // Method: everything up to the first space
    let space = find_byte(input, b' ')
        .ok_or(Error::MalformedRequest("missing space after method"))?;
    let method = Bounded::<METHOD_LEN>::truncate(&input[..space])
        .ok_or(Error::MalformedRequest("method is not valid UTF-8"))?;
    let method = Method::from_str(method.as_str())?;

    // Version: after the marker, up to the carriage return
    let marker = find_subslice(input, HTTP_VERSION_MARKER)
        .ok_or(Error::MalformedRequest("missing HTTP/ marker"))?;
    let after_marker = &input[marker + HTTP_VERSION_MARKER.len()..];
    let cr = find_byte(after_marker, b'\r')
        .ok_or(Error::MalformedRequest("version is not terminated by CR"))?;
    let version = Bounded::<VERSION_LEN>::truncate(&after_marker[..cr])
        .ok_or(Error::MalformedRequest("version is not valid UTF-8"))?;
    let version = HttpVersion::from_str(version.as_str())?;

    // Path: after the first slash, which must come before the marker
    let slash = find_byte(&input[..marker], b'/')
        .ok_or(Error::MalformedRequest("missing / before HTTP/ marker"))?;
    let after_slash = &input[slash + 1..];
    let end = find_byte(after_slash, b' ')
        .ok_or(Error::MalformedRequest("path is not terminated by a space"))?;
    let mut path = Bounded::<PATH_LEN>::truncate(&after_slash[..end])
        .ok_or(Error::MalformedRequest("path is not valid UTF-8"))?;
    if path.is_empty() {
        path = Bounded(DEFAULT_DOCUMENT.to_string());
    }

    let request = Request {
        method,
        version,
        path,
    };

    if !is_valid_file(&request.resolve(root)) {
        return Err(Error::InvalidFile(request.path.to_string()));
    }

    Ok(request)
}

fn find_byte(haystack: &[u8], needle: u8) -> Option<usize> {
    haystack.iter().position(|&b| b == needle)
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
