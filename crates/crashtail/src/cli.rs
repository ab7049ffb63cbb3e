use std::path::PathBuf;

use clap::Parser;

use crate::conf::{ColorMode, TailConfig};

#[derive(Parser, Debug)]
#[command(name = "crashtail", version)]
#[command(
    about = "Summarise and follow a CrashPlan backup_files.log",
    long_about = "crashtail reads a CrashPlan backup_files.log, prints the last N file events as one-line summaries (upload with throughput, hash match, or deletion) and can keep following the file as the backup runs."
)]
#[command(after_long_help = "Examples:
  crashtail
  crashtail -n 150 /usr/local/crashplan/log/backup_files.log
  crashtail --follow --color never")]
pub struct Cli {
    #[arg(value_name = "LOG_FILE", help = "Path to backup_files.log (auto-detected when omitted)")]
    pub log_file: Option<String>,

    #[arg(short = 'n', long, value_name = "N", help = "Number of summaries to print from the existing log")]
    pub lines: Option<usize>,

    #[arg(short, long, help = "Keep printing summaries as the log grows")]
    pub follow: bool,

    #[arg(long, value_enum, value_name = "WHEN", help = "Colourise output")]
    pub color: Option<ColorMode>,

    #[arg(long, value_name = "PATH", help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Command-line flags win over every other configuration source.
    pub fn apply_to(&self, config: &mut TailConfig) {
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
        if let Some(lines) = self.lines {
            config.lines = lines;
        }
        if self.follow {
            config.follow = true;
        }
        if let Some(color) = self.color {
            config.color = color;
        }
    }
}
