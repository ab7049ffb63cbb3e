//! Boot — logging init, config load, logfile resolution.

use std::path::PathBuf;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::conf::TailConfig;
use crate::error::{ConfigError, TailResult};
use crate::logs::discover::resolve_log_file;

/// Initialise the tracing / logging subsystem.
///
/// Diagnostics go to stderr so stdout carries only the summaries.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crashtail=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Layer config (file → env → CLI), validate it, and find the logfile.
///
/// Returns `(TailConfig, logfile path)` on success.
pub fn boot(cli: &Cli) -> TailResult<(TailConfig, PathBuf)> {
    let mut config = TailConfig::load(cli.config.as_deref()).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;
    cli.apply_to(&mut config);
    config.validate().map_err(ConfigError::Invalid)?;

    info!(
        "Configuration: lines={}, follow={}, color={:?}, poll_interval={}ms",
        config.lines, config.follow, config.color, config.poll_interval_ms
    );

    let path = resolve_log_file(config.log_file.as_deref(), &config.log_dirs).map_err(|e| {
        error!("{}", e);
        e
    })?;

    Ok((config, path))
}
