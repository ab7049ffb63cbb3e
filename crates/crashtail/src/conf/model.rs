//! Model — TailConfig and related types.

use serde::{Deserialize, Serialize};

/// When to colour the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colour when stdout is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!("unknown color mode: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TailConfig {
    /// Explicit log path; auto-discovered when unset
    pub log_file: Option<String>,
    /// Rendered lines kept from the initial read
    pub lines: usize,
    pub follow: bool,
    pub color: ColorMode,
    pub poll_interval_ms: u64,
    /// Directories probed for `backup_files.log`; platform defaults when empty
    pub log_dirs: Vec<String>,
}

impl Default for TailConfig {
    fn default() -> Self {
        Self {
            log_file: None,
            lines: 10,
            follow: false,
            color: ColorMode::Auto,
            poll_interval_ms: 500,
            log_dirs: Vec::new(),
        }
    }
}

impl TailConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.lines == 0 {
            return Err("lines must be > 0".to_string());
        }
        if self.poll_interval_ms == 0 {
            return Err("poll_interval_ms must be > 0".to_string());
        }
        if matches!(self.log_file.as_deref(), Some("")) {
            return Err("log_file must not be empty when set".to_string());
        }
        Ok(())
    }
}
