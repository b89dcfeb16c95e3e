//! A minimal concurrent file server.
//!
//! The server accepts TCP connections, reads a single request line of the
//! form `GET /<path> HTTP/1.1\r\n`, and answers with the contents of the
//! named file before closing the connection. Every connection is handled by
//! its own task; a failure only ever affects the connection it happened on.
//!
//! # Features
//!
//! - Parse and validate a request line from a byte slice
//! - Typed parse errors (`InvalidMethod`, `InvalidVersion`, `InvalidFile`,
//!   `MalformedRequest`) instead of reading past a malformed buffer
//! - Endpoint setup that reports exactly which resources it had acquired
//!   when it fails
//! - One detached task per connection, each owning its socket
//!
//! # Examples
//!
//! ## Parsing a request
//!
//! ```no_run
//! use microserve::{parse_request, ParserError};
//!
//! match parse_request(b"GET /index.html HTTP/1.1\r\n\r\n") {
//!     Ok(request) => println!("Serving {}", request.path),
//!     Err(ParserError::InvalidFile(path)) => println!("No such file: {path}"),
//!     Err(err) => println!("Rejected: {err}"),
//! }
//! ```
//!
//! ## Running the server
//!
//! ```no_run
//! use microserve::{HttpServer, ServerConfig};
//!
//! # async fn run() -> Result<(), microserve::ServerError> {
//! let config = ServerConfig::new("127.0.0.1", 8080)?.with_root("./public");
//! HttpServer::new(config).start().await?;
//! # Ok(())
//! # }
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

pub mod logging;

// Re-export commonly used items for convenience
pub use parser::{parse_request, Error as ParserError, HttpVersion, Method, Request};
pub use server::{
    Acquired, Connection, Endpoint, Error as ServerError, HttpResponse, HttpServer, Listener,
    ServerConfig, StatusCode,
};
