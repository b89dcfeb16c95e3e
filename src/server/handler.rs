//! Per-connection request handling.

use std::path::Path;

use log::{debug, info};
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::parser::{parse_request_in, Request};
use crate::server::config::ServerConfig;
use crate::server::connection::Connection;
use crate::server::error::Error;
use crate::server::response::HttpResponse;

/// Where a handler is in the life of its connection.
///
/// Any state may jump straight to `Closed`; nothing is retried.
#[derive(Debug)]
enum HandlerState {
    Receiving,
    Parsing(Vec<u8>),
    Serving(Request),
    Closed(Result<(), Error>),
}

/// Drive one connection from receive to close.
///
/// The connection is closed exactly once before this returns, whatever the
/// outcome. The result only tells the caller how it went.
pub async fn handle_connection<S>(mut conn: Connection<S>, config: &ServerConfig) -> Result<(), Error>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut state = HandlerState::Receiving;

    let outcome = loop {
        state = match state {
            HandlerState::Receiving => match conn.receive(config.read_buffer_size).await {
                Ok(raw) if raw.is_empty() => {
                    debug!("{host} closed before sending a request", host = conn.host());
                    HandlerState::Closed(Ok(()))
                }
                Ok(raw) => HandlerState::Parsing(raw),
                Err(e) => HandlerState::Closed(Err(e)),
            },
            HandlerState::Parsing(raw) => match parse_request_in(&raw, &config.root) {
                Ok(request) => HandlerState::Serving(request),
                Err(e) => HandlerState::Closed(Err(e.into())),
            },
            HandlerState::Serving(request) => {
                HandlerState::Closed(serve(&mut conn, &request, config).await)
            }
            HandlerState::Closed(outcome) => break outcome,
        };
    };

    conn.close().await;
    outcome
}

async fn serve<S>(conn: &mut Connection<S>, request: &Request, config: &ServerConfig) -> Result<(), Error>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let path = request.resolve(&config.root);
    let body = read_file(&path, config.max_content_length).await?;
    let response = HttpResponse::ok(body);

    conn.send(&response.to_bytes()).await?;
    info!(
        "{host} \"{request}\" 200 {len}",
        host = conn.host(),
        len = response.content_length()
    );
    Ok(())
}

/// Read at most `max_len` bytes of the file at `path`.
///
/// A file shorter than `max_len` is returned whole; a failed open or read
/// is an error, never an empty or partial body.
pub async fn read_file(path: &Path, max_len: usize) -> Result<Vec<u8>, Error> {
    let read_failed = |source: std::io::Error| Error::FileReadFailed {
        path: path.display().to_string(),
        source,
    };

    let file = File::open(path).await.map_err(read_failed)?;
    let mut body = Vec::with_capacity(max_len);
    file.take(max_len as u64)
        .read_to_end(&mut body)
        .await
        .map_err(read_failed)?;

    Ok(body)
}
