//! Command line entry point.
//!
//! ```bash
//! microserve 127.0.0.1 8080 --root ./public
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use microserve::{logging, HttpServer, ServerConfig};

/// Serve files from a directory over a tiny subset of HTTP/1.1
#[derive(Debug, Parser)]
#[command(name = "microserve")]
#[command(version)]
struct Cli {
    /// Address to bind to
    host: String,

    /// Port to listen on (1-65535)
    #[arg(value_parser = clap::value_parser!(u16).range(1..))]
    port: u16,

    /// Directory requested files are resolved against
    #[arg(long, default_value = ".", env = "MICROSERVE_ROOT")]
    root: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            error!("{}", e.render().to_string().trim_end());
            return ExitCode::FAILURE;
        }
        Err(e) => {
            // --help and --version
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };

    let config = match ServerConfig::new(cli.host, cli.port) {
        Ok(config) => config.with_root(cli.root),
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = HttpServer::new(config).start().await {
        error!("Could not start server: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
