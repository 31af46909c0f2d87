//! Structured logging setup.
//!
//! Installs a global `tracing` subscriber configured from
//! [`LoggingConfig`]. The `RUST_LOG` environment variable, when set,
//! overrides the configured level so operators can raise verbosity without
//! touching configuration files.

use crate::config::LoggingConfig;
use crate::error::{ProtocolError, Result};
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber.
///
/// Fails if a subscriber is already installed, which callers embedding
/// this crate into a larger application usually want to know about.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.log_to_console {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    let result = if config.json_format {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };

    result.map_err(|e| ProtocolError::Custom(format!("Failed to initialize logging: {e}")))
}
