//! Tracing setup.

use crate::LoggingConfig;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Sends tracing output to the configured log file.
///
/// Both adapters own the terminal, so nothing is logged to stdout or stderr.
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.file())
        .with_context(|| format!("Failed to create log file {}", config.file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}
