//! Entry point of the graph algorithm server.
//!
//! Binds the listening socket and serves one request per connection until the process is
//! killed. Logging is initialised before anything else so bind failures are reported through
//! `tracing` as well.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use eulergraphs::{
    logging,
    server::{Server, ServerConfig},
};

/// Serve Euler, MST, SCC, MAXFLOW and HAMILTON requests over TCP.
#[derive(Debug, Parser)]
#[command(name = "alg-server")]
struct ServerArgs {
    /// Port to listen on
    port: u16,

    /// Address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
}

fn try_main() -> Result<()> {
    let args = ServerArgs::parse();
    let config = ServerConfig::new(args.port).host(args.host);

    let server = Server::bind(&config).context("failed to start server")?;
    server.serve();
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        error!(error = format!("{err:#}"), "server terminated");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
