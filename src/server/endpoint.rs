//! Listening endpoint.
//!
//! Setup is split in two typestates: [`Endpoint`] is a bound socket that is
//! not yet accepting, and [`Listener`] is what `listen` turns it into. Both
//! own their socket, so whatever was acquired is released on every failure
//! path simply by being dropped.

use std::fmt;
use std::net::{IpAddr, SocketAddr};

use log::{error, info};
use tokio::net::{TcpListener, TcpSocket, TcpStream};

use crate::server::connection::Connection;
use crate::server::error::{Acquired, Error};

/// Backlog passed to `listen`.
pub const LISTEN_BACKLOG: u32 = 5;

/// A socket bound to `host:port`, not yet listening.
pub struct Endpoint {
    addr: SocketAddr,
    socket: TcpSocket,
}

impl Endpoint {
    /// Create an address-reusable socket bound to `host:port`.
    ///
    /// Port 0 asks the OS for an ephemeral port. On error, the socket (if
    /// one was created) is closed before returning and the error's
    /// [`Acquired`] descriptor says so.
    pub fn create(host: &str, port: u16) -> Result<Self, Error> {
        let ip: IpAddr = host
            .parse()
            .map_err(|_| Error::InvalidHost(host.to_string()))?;
        let addr = SocketAddr::new(ip, port);

        let socket = match addr {
            SocketAddr::V4(_) => TcpSocket::new_v4(),
            SocketAddr::V6(_) => TcpSocket::new_v6(),
        }
        .map_err(|source| Error::SocketCreateFailed {
            acquired: Acquired::Nothing,
            source,
        })?;

        // From here on, returning early drops `socket`, which closes it
        socket
            .set_reuseaddr(true)
            .map_err(|source| Error::SetOptionFailed {
                acquired: Acquired::Socket,
                source,
            })?;

        socket.bind(addr).map_err(|source| Error::BindFailed {
            addr,
            acquired: Acquired::Socket,
            source,
        })?;

        Ok(Self { addr, socket })
    }

    /// The address the socket is bound to.
    pub fn addr(&self) -> SocketAddr {
        self.socket.local_addr().unwrap_or(self.addr)
    }

    /// Start accepting connections.
    ///
    /// Consumes the endpoint: on failure the socket has already been closed
    /// and there is nothing left to use.
    pub fn listen(self) -> Result<Listener, Error> {
        let addr = self.addr();
        let inner = self
            .socket
            .listen(LISTEN_BACKLOG)
            .map_err(|source| Error::ListenFailed {
                addr,
                acquired: Acquired::Socket,
                source,
            })?;

        Ok(Listener { addr, inner })
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("addr", &self.addr)
            .finish_non_exhaustive()
    }
}

/// A listening socket.
#[derive(Debug)]
pub struct Listener {
    addr: SocketAddr,
    inner: TcpListener,
}

impl Listener {
    /// The address the listener accepts on.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Wait for the next peer.
    ///
    /// A failed accept is reported but leaves the listener usable.
    pub async fn accept(&self) -> Result<Connection<TcpStream>, Error> {
        let (stream, peer) = self.inner.accept().await.map_err(|e| {
            error!("Could not accept connection: {e}");
            Error::AcceptFailed(e)
        })?;

        let host = peer.ip().to_string();
        info!("Accepted client {host}:{port}", port = peer.port());
        Ok(Connection::new(stream, host))
    }

    /// Close the listening socket.
    pub fn shutdown(self) {
        drop(self.inner);
        info!("Stopped listening on {addr}", addr = self.addr);
    }
}
