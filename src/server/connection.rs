//! An accepted peer connection.

use log::debug;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::server::error::Error;

/// One accepted peer and its socket.
///
/// A connection is owned by exactly one handler. `close` takes it by value,
/// so it cannot be used or closed again afterwards.
#[derive(Debug)]
pub struct Connection<S = TcpStream> {
    host: String,
    stream: S,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Wrap an accepted stream together with the peer's address.
    pub fn new(stream: S, host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            stream,
        }
    }

    /// The peer's textual address.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Read once, returning at most `max_len` bytes.
    ///
    /// No buffering across calls: whatever the first read yields is the
    /// whole result. An empty result means the peer closed its side.
    pub async fn receive(&mut self, max_len: usize) -> Result<Vec<u8>, Error> {
        let mut buf = vec![0; max_len];
        let n = self
            .stream
            .read(&mut buf)
            .await
            .map_err(|source| Error::ReceiveFailed {
                peer: self.host.clone(),
                source,
            })?;
        buf.truncate(n);
        debug!("Received {n} bytes from {host}", host = self.host);
        Ok(buf)
    }

    /// Write all of `bytes` to the peer.
    pub async fn send(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.stream
            .write_all(bytes)
            .await
            .map_err(|source| Error::SendFailed {
                peer: self.host.clone(),
                source,
            })?;
        debug!("Sent {len} bytes to {host}", len = bytes.len(), host = self.host);
        Ok(())
    }

    /// Shut the stream down and release it.
    pub async fn close(mut self) {
        if let Err(e) = self.stream.shutdown().await {
            debug!("Shutdown of {host} failed: {e}", host = self.host);
        }
        debug!("Closed connection to {host}", host = self.host);
    }
}
