//! Tail — poll a file for appended bytes and yield complete lines.
//!
//! The stream starts at a byte offset (the end of the initial read), keeps
//! an incomplete trailing line buffered until its newline arrives, and
//! restarts from the top when the file shrinks underneath it. A partial
//! line that outgrows [`MAX_LINE_SIZE`] is discarded up to its newline.

use std::io::SeekFrom;
use std::path::PathBuf;
use std::pin::Pin;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio::time::MissedTickBehavior;
use tokio_stream::Stream;

use crate::error::{TailError, TailResult};
use crate::parser::MAX_LINE_SIZE;

pub type LineStream = Pin<Box<dyn Stream<Item = TailResult<String>> + Send>>;

/// Lines appended to `path` after `offset`, in order, forever.
///
/// A missing or unopenable file is treated as transient (rotation in
/// progress) and retried on the next tick; seek and read failures end the
/// stream with an error.
pub fn follow_lines(path: PathBuf, offset: u64, poll_interval: Duration) -> LineStream {
    let stream = async_stream::try_stream! {
        let mut offset = offset;
        let mut pending = LineBuffer::new(MAX_LINE_SIZE);
        let mut ticker = tokio::time::interval(poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let len = match tokio::fs::metadata(&path).await {
                Ok(meta) => meta.len(),
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "Logfile not available, retrying");
                    continue;
                }
            };

            if len < offset {
                tracing::info!(path = %path.display(), "Logfile shrank, reading from the start");
                offset = 0;
                pending.clear();
            }
            if len == offset {
                continue;
            }

            let mut file = match tokio::fs::File::open(&path).await {
                Ok(file) => file,
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "Failed to open logfile, retrying");
                    continue;
                }
            };

            file.seek(SeekFrom::Start(offset)).await
                .map_err(|source| TailError::Read { path: path.clone(), source })?;

            let mut chunk = Vec::new();
            let read = file.read_to_end(&mut chunk).await
                .map_err(|source| TailError::Read { path: path.clone(), source })?;
            offset += read as u64;

            for line in pending.push(&chunk) {
                yield line;
            }
        }
    };

    Box::pin(stream)
}

/// Bytes of the line still waiting for its newline, bounded by `max_line`.
#[derive(Debug)]
pub struct LineBuffer {
    pending: Vec<u8>,
    max_line: usize,
    discarding: bool,
}

impl LineBuffer {
    pub fn new(max_line: usize) -> Self {
        Self {
            pending: Vec::new(),
            max_line,
            discarding: false,
        }
    }

    /// Append `chunk` and return the lines it completed.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);
        let mut lines = drain_complete_lines(&mut self.pending);

        if self.discarding && !lines.is_empty() {
            // Tail end of the oversized line
            lines.remove(0);
            self.discarding = false;
        }
        if self.discarding || self.pending.len() > self.max_line {
            if !self.discarding {
                tracing::warn!(
                    size = self.pending.len(),
                    max = self.max_line,
                    "Line exceeds maximum size, discarding"
                );
            }
            self.pending.clear();
            self.discarding = true;
        }
        lines
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.discarding = false;
    }
}

/// Split off every newline-terminated line in `buf`, leaving the
/// unterminated remainder in place. A trailing `\r` is stripped.
pub fn drain_complete_lines(buf: &mut Vec<u8>) -> Vec<String> {
    let Some(last_newline) = buf.iter().rposition(|&b| b == b'\n') else {
        return Vec::new();
    };

    let complete: Vec<u8> = buf.drain(..=last_newline).collect();
    complete[..complete.len() - 1]
        .split(|&b| b == b'\n')
        .map(|line| {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            String::from_utf8_lossy(line).into_owned()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tokio_stream::StreamExt;

    const POLL: Duration = Duration::from_millis(10);
    const WAIT: Duration = Duration::from_secs(5);

    fn append(path: &std::path::Path, text: &str) {
        let mut file = std::fs::OpenOptions::new().append(true).open(path).unwrap();
        file.write_all(text.as_bytes()).unwrap();
    }

    // ── Line splitting ───────────────────────────────────────────

    #[test]
    fn test_drain_keeps_partial_line() {
        let mut buf = b"one\ntwo\nthr".to_vec();
        assert_eq!(drain_complete_lines(&mut buf), vec!["one", "two"]);
        assert_eq!(buf, b"thr");
    }

    #[test]
    fn test_drain_without_newline_is_empty() {
        let mut buf = b"partial".to_vec();
        assert!(drain_complete_lines(&mut buf).is_empty());
        assert_eq!(buf, b"partial");
    }

    #[test]
    fn test_drain_strips_carriage_return_and_keeps_blank_lines() {
        let mut buf = b"a\r\n\nb\n".to_vec();
        assert_eq!(drain_complete_lines(&mut buf), vec!["a", "", "b"]);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_drain_replaces_invalid_utf8() {
        let mut buf = b"\xFFok\n".to_vec();
        let lines = drain_complete_lines(&mut buf);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("ok"));
    }

    #[test]
    fn test_buffer_joins_chunks() {
        let mut buffer = LineBuffer::new(64);
        assert!(buffer.push(b"hal").is_empty());
        assert_eq!(buffer.push(b"f\nne"), vec!["half"]);
        assert_eq!(buffer.pending.len(), 2);
    }

    #[test]
    fn test_buffer_discards_oversized_line() {
        let mut buffer = LineBuffer::new(8);
        assert!(buffer.push(b"0123456789").is_empty());
        assert_eq!(buffer.pending.len(), 0);
        assert!(buffer.push(b"abcdefghij").is_empty());
        assert_eq!(buffer.pending.len(), 0);

        // The rest of the long line is skipped, the next one comes through
        assert_eq!(buffer.push(b"xyz\nnext\n"), vec!["next"]);
        assert_eq!(buffer.push(b"after\n"), vec!["after"]);
    }

    #[test]
    fn test_buffer_clear_resets_discarding() {
        let mut buffer = LineBuffer::new(4);
        buffer.push(b"toolong");
        buffer.clear();
        assert_eq!(buffer.push(b"ok\n"), vec!["ok"]);
    }

    // ── Following ────────────────────────────────────────────────

    #[tokio::test]
    async fn test_follow_yields_only_appended_lines() {
        let file = tempfile::NamedTempFile::new().unwrap();
        append(file.path(), "old line\n");
        let offset = std::fs::metadata(file.path()).unwrap().len();

        let mut stream = follow_lines(file.path().to_path_buf(), offset, POLL);
        append(file.path(), "new one\nnew two\n");

        let first = tokio::time::timeout(WAIT, stream.next()).await.unwrap().unwrap().unwrap();
        let second = tokio::time::timeout(WAIT, stream.next()).await.unwrap().unwrap().unwrap();
        assert_eq!(first, "new one");
        assert_eq!(second, "new two");
    }

    #[tokio::test]
    async fn test_follow_waits_for_newline() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut stream = follow_lines(file.path().to_path_buf(), 0, POLL);

        append(file.path(), "half");
        let early = tokio::time::timeout(Duration::from_millis(100), stream.next()).await;
        assert!(early.is_err(), "partial line must not be yielded");

        append(file.path(), " done\n");
        let line = tokio::time::timeout(WAIT, stream.next()).await.unwrap().unwrap().unwrap();
        assert_eq!(line, "half done");
    }

    #[tokio::test]
    async fn test_follow_restarts_after_truncation() {
        let file = tempfile::NamedTempFile::new().unwrap();
        append(file.path(), "a fairly long first generation line\n");
        let offset = std::fs::metadata(file.path()).unwrap().len();

        let mut stream = follow_lines(file.path().to_path_buf(), offset, POLL);
        std::fs::write(file.path(), "fresh\n").unwrap();

        let line = tokio::time::timeout(WAIT, stream.next()).await.unwrap().unwrap().unwrap();
        assert_eq!(line, "fresh");
    }
}
