//! crates/logging/src/init.rs
//! Global subscriber installation.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use super::config::LogConfig;

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `RUST_LOG` or the rendered directives could not be parsed.
    #[error("invalid log filter directive: {0}")]
    Filter(#[from] ParseError),
    /// Another global subscriber was installed first.
    #[error("failed to install tracing subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Installs a formatting subscriber filtered by `config` as the global default.
///
/// Events are written to standard error with their target so subsystem
/// output can be told apart.
///
/// ```rust,ignore
/// use logging::{LogConfig, init_tracing};
///
/// init_tracing(&LogConfig::from_verbose_level(2))?;
/// tracing::debug!(target: "delta_sync::delta", "scan started");
/// ```
pub fn init_tracing(config: &LogConfig) -> Result<(), LoggingError> {
    let filter = config.env_filter()?;
    let layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(config.ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()?;
    Ok(())
}
