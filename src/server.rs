//! Sequential TCP server for the request/response protocol.
//!
//! Connections are served strictly one after another: accept, run one exchange, close, and only
//! then accept the next client. A failing connection is logged and dropped; it never ends the
//! accept loop.

use std::{
    io::{BufReader, BufWriter},
    net::{SocketAddr, TcpListener, TcpStream},
};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::protocol::handle_exchange;

/// Errors that prevent the server from listening.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to query the listening address: {0}")]
    LocalAddr(#[source] std::io::Error),
}

/// Where the server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 0,
        }
    }
}

impl ServerConfig {
    /// Creates a config listening on all interfaces at `port`
    pub fn new(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Updates the host to bind to
    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.host = host.into();
        self
    }
}

/// A bound listening socket serving the protocol.
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Binds the listening socket described by `config`.
    pub fn bind(config: &ServerConfig) -> Result<Self, ServerError> {
        let listener = TcpListener::bind((config.host.as_str(), config.port)).map_err(|source| {
            ServerError::Bind {
                addr: format!("{}:{}", config.host, config.port),
                source,
            }
        })?;

        Ok(Self { listener })
    }

    /// Returns the address actually bound, which resolves port `0` to the assigned port.
    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        self.listener.local_addr().map_err(ServerError::LocalAddr)
    }

    /// Serves clients forever.
    pub fn serve(&self) {
        self.serve_connections(usize::MAX);
    }

    /// Serves `limit` clients (counting failed accepts) and returns.
    pub fn serve_connections(&self, limit: usize) {
        if let Ok(addr) = self.listener.local_addr() {
            info!(%addr, "server listening");
        }

        for incoming in self.listener.incoming().take(limit) {
            match incoming {
                Ok(stream) => serve_client(stream),
                Err(err) => warn!(%err, "failed to accept connection"),
            }
        }
    }
}

/// Runs one exchange on `stream` and closes it by dropping.
fn serve_client(stream: TcpStream) {
    let peer = stream
        .peer_addr()
        .map_or_else(|_| String::from("unknown"), |addr| addr.to_string());
    debug!(%peer, "client connected");

    let write_half = match stream.try_clone() {
        Ok(write_half) => write_half,
        Err(err) => {
            warn!(%peer, %err, "failed to split connection");
            return;
        }
    };

    let mut reader = BufReader::new(stream);
    let mut writer = BufWriter::new(write_half);
    match handle_exchange(&mut reader, &mut writer) {
        Ok(true) => debug!(%peer, "client served"),
        Ok(false) => debug!(%peer, "client left without a request"),
        Err(err) => warn!(%peer, %err, "connection failed"),
    }
}
