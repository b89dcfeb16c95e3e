//! File server accept loop.

use std::future::Future;
use std::sync::Arc;

use log::{error, info};
use tokio::signal;

use crate::server::config::ServerConfig;
use crate::server::endpoint::{Endpoint, Listener};
use crate::server::error::Error;
use crate::server::handler::handle_connection;

/// A file server.
pub struct HttpServer {
    /// The server configuration.
    pub config: Arc<ServerConfig>,
}

impl HttpServer {
    /// Create a new file server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Create the endpoint and start listening on it.
    pub fn bind(&self) -> Result<Listener, Error> {
        let listener = Endpoint::create(&self.config.host, self.config.port)?.listen()?;
        info!(
            "Listening on {host}:{port}",
            host = self.config.host,
            port = listener.local_addr().port()
        );
        Ok(listener)
    }

    /// Bind, then serve until Ctrl+C.
    pub async fn start(&self) -> Result<(), Error> {
        let listener = self.bind()?;
        self.serve(listener).await;
        Ok(())
    }

    /// Serve connections from `listener` until Ctrl+C.
    pub async fn serve(&self, listener: Listener) {
        self.serve_with_shutdown(listener, async {
            if let Err(e) = signal::ctrl_c().await {
                error!("Error setting up Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
            info!("Received Ctrl+C, shutting down");
        })
        .await
    }

    /// Serve connections from `listener` until `shutdown` completes.
    ///
    /// Each accepted connection is moved into its own spawned task, which is
    /// never joined. A failed accept is logged and the loop carries on.
    pub async fn serve_with_shutdown<F>(&self, listener: Listener, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => break,

                accepted = listener.accept() => {
                    // Already logged by the listener
                    let Ok(conn) = accepted else { continue };

                    let config = self.config.clone();
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(conn, &config).await {
                            error!("Error handling connection: {e}");
                        }
                    });
                }
            }
        }

        listener.shutdown();
    }
}
