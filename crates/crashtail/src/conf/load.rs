//! Load — config loading from file and environment variables.

use std::path::{Path, PathBuf};

use super::model::{ColorMode, TailConfig};
use crate::error::ConfigError;

pub const CONFIG_FILE_ENV: &str = "CRASHTAIL_CONFIG_FILE";
pub const DEFAULT_CONFIG_FILE: &str = "/etc/crashtail/crashtail.toml";

impl TailConfig {
    /// Load configuration from file and environment variables
    /// Priority: Environment Variables > Config File > Defaults
    ///
    /// An explicit `path` (or `CRASHTAIL_CONFIG_FILE`) must exist; the
    /// system-wide default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_FILE_ENV).map(PathBuf::from));

        let mut config = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path));
                }
                tracing::debug!("Loading configuration from: {}", path.display());
                Self::from_file(&path)?
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                tracing::debug!("Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => {
                tracing::debug!("No config file, using defaults and environment");
                Self::default()
            }
        };

        config.apply_env(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Override settings from environment variables looked up through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(file) = lookup("CRASHTAIL_LOG_FILE") {
            self.log_file = Some(file);
        }
        if let Some(lines) = lookup("CRASHTAIL_LINES") {
            self.lines = parse_env("CRASHTAIL_LINES", lines)?;
        }
        if let Some(follow) = lookup("CRASHTAIL_FOLLOW") {
            self.follow = parse_env("CRASHTAIL_FOLLOW", follow)?;
        }
        if let Some(color) = lookup("CRASHTAIL_COLOR") {
            self.color = parse_env::<ColorMode>("CRASHTAIL_COLOR", color)?;
        }
        if let Some(interval) = lookup("CRASHTAIL_POLL_INTERVAL_MS") {
            self.poll_interval_ms = parse_env("CRASHTAIL_POLL_INTERVAL_MS", interval)?;
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { var, value })
}
