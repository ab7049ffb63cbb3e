//! Logfile location: explicit path → configured dirs → platform defaults.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{TailError, TailResult};

/// Tried in order inside every candidate directory
pub const LOG_FILE_NAMES: [&str; 2] = ["backup_files.log", "backup_files.log.0"];

/// Directories where CrashPlan keeps its logs on this platform.
pub fn default_log_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    #[cfg(target_os = "macos")]
    {
        dirs.push(PathBuf::from("/Library/Logs/CrashPlan"));
        if let Some(home) = std::env::var_os("HOME") {
            dirs.push(PathBuf::from(home).join("Library/Logs/CrashPlan"));
        }
    }
    #[cfg(target_os = "linux")]
    {
        dirs.push(PathBuf::from("/usr/local/crashplan/log"));
    }
    #[cfg(target_os = "windows")]
    {
        dirs.push(PathBuf::from("C:/ProgramData/CrashPlan/log"));
        if let Some(appdata) = std::env::var_os("APPDATA") {
            let appdata = PathBuf::from(appdata);
            dirs.push(appdata.join("Local/CrashPlan/log"));
            dirs.push(appdata.join("Roaming/CrashPlan/log"));
        }
    }

    dirs
}

/// Every file path that discovery will probe, in order.
pub fn candidates(dirs: &[PathBuf]) -> Vec<PathBuf> {
    dirs.iter()
        .flat_map(|dir| LOG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .collect()
}

/// First candidate that exists as a regular file.
pub fn discover(dirs: &[PathBuf]) -> TailResult<PathBuf> {
    let tried = candidates(dirs);
    for path in &tried {
        debug!("Trying path for logfile: {}", path.display());
        if path.is_file() {
            info!("Logfile found at {}", path.display());
            return Ok(path.clone());
        }
    }
    Err(TailError::NotDetected { tried })
}

/// Resolve the logfile: an explicit path must exist, otherwise probe `dirs`
/// (or the platform defaults when `dirs` is empty).
pub fn resolve_log_file(explicit: Option<&str>, dirs: &[String]) -> TailResult<PathBuf> {
    if let Some(path) = explicit {
        let path = Path::new(path);
        if !path.is_file() {
            return Err(TailError::LogNotFound(path.to_path_buf()));
        }
        info!("Logfile found at {}", path.display());
        return Ok(path.to_path_buf());
    }

    let dirs: Vec<PathBuf> = if dirs.is_empty() {
        default_log_dirs()
    } else {
        dirs.iter().map(PathBuf::from).collect()
    };
    discover(&dirs)
}
