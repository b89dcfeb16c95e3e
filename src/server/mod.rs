//! File server implementation for microserve.
//!
//! The pieces, leaf first: a [`Connection`] wraps one accepted socket, an
//! [`Endpoint`] becomes a [`Listener`] once it listens, the handler drives
//! a connection through receive, parse, serve and close, and
//! [`HttpServer`] runs the accept loop that spawns one handler per peer.

mod response;
mod config;
mod connection;
mod endpoint;
mod error;
mod handler;
mod http_server;

// Re-export public items
pub use response::{HttpResponse, StatusCode};
pub use config::{ServerConfig, MAX_CONTENT_LENGTH, MAX_HOST_LEN, REQUEST_BUFFER_SIZE};
pub use connection::Connection;
pub use endpoint::{Endpoint, Listener, LISTEN_BACKLOG};
pub use error::{Acquired, Error};
pub use handler::{handle_connection, read_file};
pub use http_server::HttpServer;
