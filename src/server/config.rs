//! Server configuration.

use std::path::PathBuf;

use crate::server::error::Error;

/// Longest accepted host text, matching `INET_ADDRSTRLEN` minus the
/// terminator.
pub const MAX_HOST_LEN: usize = 15;

/// Fixed receive buffer size; one receive must hold the request line.
pub const REQUEST_BUFFER_SIZE: usize = 1024;

/// Fixed upper bound on the bytes served from a single file.
pub const MAX_CONTENT_LENGTH: usize = 4096;

/// File server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The host to bind to.
    pub host: String,
    /// The port to bind to.
    pub port: u16,
    /// Directory requested paths are resolved against.
    pub root: PathBuf,
    /// The receive buffer size.
    pub read_buffer_size: usize,
    /// The maximum number of file bytes sent in one response.
    pub max_content_length: usize,
}

impl ServerConfig {
    /// Create a configuration for `host:port`, validating both.
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self, Error> {
        let host = host.into();
        if host.len() > MAX_HOST_LEN {
            return Err(Error::HostTooLong(host));
        }
        if port == 0 {
            return Err(Error::InvalidPort(port));
        }

        Ok(Self {
            host,
            port,
            ..Self::default()
        })
    }

    /// Serve files from `root` instead of the working directory.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            root: PathBuf::from("."),
            read_buffer_size: REQUEST_BUFFER_SIZE,
            max_content_length: MAX_CONTENT_LENGTH,
        }
    }
}
