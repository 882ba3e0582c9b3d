//! Logging initialisation for the binaries.
//!
//! Installs a global `tracing` subscriber that writes to `stderr`, so results printed on
//! `stdout` stay clean. Records emitted through the `log` facade are forwarded as well.

use std::{env, io, str::FromStr};

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

const LOG_FORMAT_ENV: &str = "EULERGRAPHS_LOG_FORMAT";

/// Errors raised while initialising logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("unsupported log format `{0}`; expected `human` or `json`")]
    UnsupportedFormat(String),
    #[error("failed to install tracing subscriber: {0}")]
    InstallFailed(#[from] TryInitError),
}

/// Output format of log events, selected by `EULERGRAPHS_LOG_FORMAT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Human,
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("human") {
            Ok(Self::Human)
        } else if raw.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Err(LoggingError::UnsupportedFormat(raw.to_owned()))
        }
    }
}

impl LogFormat {
    fn from_env() -> Result<Self, LoggingError> {
        match env::var_os(LOG_FORMAT_ENV) {
            None => Ok(Self::default()),
            Some(raw) => raw
                .to_str()
                .ok_or_else(|| LoggingError::UnsupportedFormat(raw.to_string_lossy().into_owned()))?
                .parse(),
        }
    }
}

/// Installs the global subscriber. The level is controlled via `RUST_LOG` and defaults to
/// `info`.
///
/// # Errors
/// Fails if `EULERGRAPHS_LOG_FORMAT` names an unsupported format or if a global subscriber is
/// already installed.
pub fn init_logging() -> Result<(), LoggingError> {
    let format = LogFormat::from_env()?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);
    let layer = match format {
        LogFormat::Human => layer.boxed(),
        LogFormat::Json => layer.json().boxed(),
    };

    // also installs the `log` bridge
    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()?;
    Ok(())
}
