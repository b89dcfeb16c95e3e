//! Error types for the server.

use std::fmt;
use std::net::SocketAddr;

use thiserror::Error;

use crate::parser::Error as ParserError;

/// Resources that had been acquired when endpoint setup failed.
///
/// By the time the error is returned every listed resource has already been
/// released, so the caller has nothing left to clean up. The descriptor
/// exists so callers and tests can see how far setup got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acquired {
    /// Nothing was acquired.
    Nothing,
    /// A socket was created, then closed again.
    Socket,
}

impl fmt::Display for Acquired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Acquired::Nothing => write!(f, "nothing acquired"),
            Acquired::Socket => write!(f, "socket released"),
        }
    }
}

/// Errors that can occur during server operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The host is not an IP address literal.
    #[error("Invalid host: {0}")]
    InvalidHost(String),

    /// The host text does not fit in an address string.
    #[error("Host is too long: {0}")]
    HostTooLong(String),

    /// Port 0 cannot be served.
    #[error("Invalid port number: {0}")]
    InvalidPort(u16),

    /// The listening socket could not be created.
    #[error("Could not create socket ({acquired}): {source}")]
    SocketCreateFailed {
        acquired: Acquired,
        source: std::io::Error,
    },

    /// The socket could not be marked address-reusable.
    #[error("Could not set socket options ({acquired}): {source}")]
    SetOptionFailed {
        acquired: Acquired,
        source: std::io::Error,
    },

    /// The socket could not be bound to the requested address.
    #[error("Could not bind {addr} ({acquired}): {source}")]
    BindFailed {
        addr: SocketAddr,
        acquired: Acquired,
        source: std::io::Error,
    },

    /// The bound socket could not start listening.
    #[error("Could not listen on {addr} ({acquired}): {source}")]
    ListenFailed {
        addr: SocketAddr,
        acquired: Acquired,
        source: std::io::Error,
    },

    /// Accepting a single connection failed.
    #[error("Could not accept connection: {0}")]
    AcceptFailed(#[source] std::io::Error),

    /// Reading from a peer failed.
    #[error("Could not receive from {peer}: {source}")]
    ReceiveFailed {
        peer: String,
        source: std::io::Error,
    },

    /// Writing to a peer failed.
    #[error("Could not send to {peer}: {source}")]
    SendFailed {
        peer: String,
        source: std::io::Error,
    },

    /// The requested file passed validation but could not be read.
    #[error("Could not read {path}: {source}")]
    FileReadFailed {
        path: String,
        source: std::io::Error,
    },

    /// The request was rejected by the parser.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParserError),
}

impl Error {
    /// The cleanup descriptor carried by endpoint setup errors.
    pub fn acquired(&self) -> Option<Acquired> {
        match self {
            Error::SocketCreateFailed { acquired, .. }
            | Error::SetOptionFailed { acquired, .. }
            | Error::BindFailed { acquired, .. }
            | Error::ListenFailed { acquired, .. } => Some(*acquired),
            _ => None,
        }
    }
}
