use serde::Serialize;

use super::model::{DropReason, ParseOutcome};

/// Drop counters by reason
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DropMetrics {
    pub too_few_fields: u64,
    pub bad_hash_field: u64,
    pub folder: u64,
    pub bad_timestamp: u64,
}

impl DropMetrics {
    pub fn total(&self) -> u64 {
        self.too_few_fields + self.bad_hash_field + self.folder + self.bad_timestamp
    }
}

/// Running counts of what the parser made of the input.
///
/// Owned by the single processing path, so plain integers are enough.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    pub lines: u64,
    pub events: u64,
    pub passthrough: u64,
    pub dropped: DropMetrics,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &ParseOutcome) {
        self.lines += 1;
        match outcome {
            ParseOutcome::Event(_) => self.events += 1,
            ParseOutcome::Passthrough { .. } => self.passthrough += 1,
            ParseOutcome::Dropped(reason) => self.record_drop(*reason),
        }
    }

    fn record_drop(&mut self, reason: DropReason) {
        let counter = match reason {
            DropReason::TooFewFields => &mut self.dropped.too_few_fields,
            DropReason::BadHashField => &mut self.dropped.bad_hash_field,
            DropReason::Folder => &mut self.dropped.folder,
            DropReason::BadTimestamp => &mut self.dropped.bad_timestamp,
        };
        *counter += 1;
    }

    /// Share of lines that turned into events, 0.0 when nothing was seen
    pub fn event_ratio(&self) -> f64 {
        if self.lines == 0 {
            return 0.0;
        }
        self.events as f64 / self.lines as f64
    }
}
