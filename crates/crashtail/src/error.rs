//! Error — failures of the driver around the parser.
//!
//! Malformed log *data* never surfaces here: the parser turns it into
//! dropped or passthrough lines.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {var}: {value}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum TailError {
    #[error("Cannot find logfile at {}", .0.display())]
    LogNotFound(PathBuf),

    #[error("Can't auto-detect logfile location (tried {} paths). Try passing it as the last argument.", .tried.len())]
    NotDetected { tried: Vec<PathBuf> },

    #[error("Failed to read logfile {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type TailResult<T> = Result<T, TailError>;
