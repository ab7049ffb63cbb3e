//! Run — initial read of the logfile, trailing window, then follow mode.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use tokio_stream::StreamExt;
use tracing::info;

use crate::conf::TailConfig;
use crate::error::{TailError, TailResult};
use crate::logs::tail::{follow_lines, LineStream};
use crate::logs::{LinePipeline, TrailingWindow};
use crate::parser::{BackupRecordParser, LineParser, ParseStats};
use crate::summary::{Palette, Rendered};

/// Drives one pipeline over the file body and then over appended lines.
pub struct Runner<P = BackupRecordParser> {
    pipeline: LinePipeline<P>,
    palette: Palette,
}

impl Runner<BackupRecordParser> {
    pub fn new(palette: Palette) -> Self {
        Self {
            pipeline: LinePipeline::new(),
            palette,
        }
    }
}

impl<P: LineParser> Runner<P> {
    /// Process the whole file body and return the last `cap` rendered lines.
    ///
    /// Every newline-separated piece takes an index, including the empty one
    /// after a final newline, so the first appended line is never adjacent
    /// to the last line of the body.
    pub fn initial_pass(&mut self, content: &str, cap: usize) -> Vec<String> {
        let mut window: TrailingWindow<Rendered> = TrailingWindow::new(cap);
        for line in content.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if let Some(rendered) = self.pipeline.push(line) {
                window.push(rendered);
            }
        }
        window
            .into_vec()
            .into_iter()
            .map(|r| r.render(self.palette))
            .collect()
    }

    /// Print every appended line that renders, until the stream ends or fails.
    pub async fn follow<W: Write>(&mut self, mut lines: LineStream, out: &mut W) -> TailResult<()> {
        while let Some(line) = lines.next().await {
            let line = line?;
            if let Some(rendered) = self.pipeline.push(&line) {
                writeln!(out, "{}", rendered.render(self.palette)).map_err(TailError::Output)?;
                out.flush().map_err(TailError::Output)?;
            }
        }
        Ok(())
    }

    pub fn stats(&self) -> &ParseStats {
        self.pipeline.stats()
    }

    pub fn pipeline(&self) -> &LinePipeline<P> {
        &self.pipeline
    }
}

/// Print the trailing window of `path` and, in follow mode, keep printing
/// summaries of appended lines until the process is stopped.
pub async fn run(config: &TailConfig, path: &Path) -> TailResult<()> {
    let mut runner = Runner::new(Palette::for_mode(config.color));

    info!("Reading and parsing logfile...");
    let bytes = tokio::fs::read(path).await.map_err(|source| TailError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);
    let lines = runner.initial_pass(&content, config.lines);

    let stats = runner.stats();
    info!(
        lines = stats.lines,
        events = stats.events,
        passthrough = stats.passthrough,
        dropped = stats.dropped.total(),
        event_ratio = stats.event_ratio(),
        "Parsed logfile"
    );

    let mut out = std::io::stdout();
    for line in &lines {
        writeln!(out, "{}", line).map_err(TailError::Output)?;
    }
    out.flush().map_err(TailError::Output)?;

    if config.follow {
        info!("Following {}", path.display());
        let stream = follow_lines(
            path.to_path_buf(),
            bytes.len() as u64,
            Duration::from_millis(config.poll_interval_ms),
        );
        runner.follow(stream, &mut out).await?;
    }

    Ok(())
}
