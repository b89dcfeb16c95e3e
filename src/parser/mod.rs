//! Request parser module.
//!
//! Turns the bytes of a single receive into a validated [`Request`]. The
//! grammar is tiny: one method, one version, and a path that
//! must name something on disk.

mod request;
mod method;
mod version;
mod error;
mod tests;

// Re-export public items
pub use request::{
    Bounded, Request, DEFAULT_DOCUMENT, HTTP_VERSION_MARKER, METHOD_LEN, PATH_LEN, VERSION_LEN,
};
pub use method::{is_valid_method, Method};
pub use version::{is_valid_version, HttpVersion};
pub use error::Error;

pub use request::{is_valid_file, parse_request, parse_request_in};
