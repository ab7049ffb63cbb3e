//! Line pipeline: parse → summarize, carrying the rolling `previous` state.
//!
//! Line indices count every input line, so a dropped line between two
//! records breaks their adjacency. `previous` only moves on events;
//! dropped and passthrough lines leave it untouched.

use crate::parser::{BackupRecordParser, LineParser, ParseOutcome, ParseStats};
use crate::summary::{summarize, Previous, Rendered};

/// Fused parse-and-summarize step for the line at `index`.
///
/// Returns the display output (if any) and the state for the next line.
pub fn parse_and_summarize<P>(
    parser: &P,
    line: &str,
    index: usize,
    previous: Option<Previous>,
) -> (Option<Rendered>, Option<Previous>)
where
    P: LineParser + ?Sized,
{
    advance(parser.parse(line, index), previous)
}

fn advance(outcome: ParseOutcome, previous: Option<Previous>) -> (Option<Rendered>, Option<Previous>) {
    match outcome {
        ParseOutcome::Event(event) => {
            let summary = summarize(&event, previous.as_ref());
            (Some(Rendered::Summary(summary)), Some(Previous::new(event)))
        }
        ParseOutcome::Dropped(_) => (None, previous),
        ParseOutcome::Passthrough { line, .. } => (Some(Rendered::Passthrough(line)), previous),
    }
}

/// Stateful wrapper that numbers lines as they arrive.
///
/// The bulk read and follow mode share one pipeline so indices and the
/// `previous` record carry over from the file body into appended lines.
#[derive(Debug)]
pub struct LinePipeline<P = BackupRecordParser> {
    parser: P,
    previous: Option<Previous>,
    next_index: usize,
    stats: ParseStats,
}

impl LinePipeline<BackupRecordParser> {
    pub fn new() -> Self {
        Self::with_parser(BackupRecordParser::new())
    }
}

impl Default for LinePipeline<BackupRecordParser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: LineParser> LinePipeline<P> {
    pub fn with_parser(parser: P) -> Self {
        Self {
            parser,
            previous: None,
            next_index: 0,
            stats: ParseStats::new(),
        }
    }

    /// Feed the next input line.
    pub fn push(&mut self, line: &str) -> Option<Rendered> {
        let index = self.next_index;
        self.next_index += 1;

        let outcome = self.parser.parse(line, index);
        self.stats.record(&outcome);

        let (rendered, previous) = advance(outcome, self.previous.take());
        self.previous = previous;
        rendered
    }

    pub fn previous(&self) -> Option<&Previous> {
        self.previous.as_ref()
    }

    /// Index the next pushed line will get
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }
}
