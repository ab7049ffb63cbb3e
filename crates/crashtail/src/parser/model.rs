use std::fmt;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Backup outcome recorded in the first column of a record line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Outcome code `I`: the file was included in the backup
    Included,
    /// Any other outcome code
    Excluded,
}

impl Outcome {
    pub fn from_code(code: &str) -> Self {
        if code == "I" {
            Outcome::Included
        } else {
            Outcome::Excluded
        }
    }
}

/// What happened to the file.
///
/// A hash match is an `Upload` whose `uploaded_bytes` is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventKind {
    Upload {
        size_bytes: u64,
        uploaded_bytes: u64,
    },
    Deleted,
}

impl EventKind {
    pub fn is_hash_match(&self) -> bool {
        matches!(self, EventKind::Upload { uploaded_bytes: 0, .. })
    }
}

/// One parsed record line. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub outcome: Outcome,
    /// Minute resolution, normalised to the local time zone
    pub timestamp: DateTime<Local>,
    pub kind: EventKind,
    pub path: String,
    /// Position of the raw line in the whole input, dropped lines included
    pub sequence_index: usize,
}

/// Why a line was silently skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// Fewer than five space-separated fields (blank, banner, continuation)
    TooFewFields,
    /// Field 4 is not a 32-character hash
    BadHashField,
    /// Directory entry
    Folder,
    /// Date/time fields do not match `MM/DD/YY hh:mma`
    BadTimestamp,
}

impl DropReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropReason::TooFewFields => "too_few_fields",
            DropReason::BadHashField => "bad_hash_field",
            DropReason::Folder => "folder",
            DropReason::BadTimestamp => "bad_timestamp",
        }
    }
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a structurally valid line could not be decoded and is echoed verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassthroughReason {
    /// No token left for the trailing payload
    MissingPayload,
    /// Trailing token is neither `(deleted)` nor a 3-element JSON array
    UndecodablePayload,
    /// Upload record without a bracketed size token
    MissingSize,
    /// Size token carries no leading integer
    UndecodableSize,
}

impl PassthroughReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            PassthroughReason::MissingPayload => "missing_payload",
            PassthroughReason::UndecodablePayload => "undecodable_payload",
            PassthroughReason::MissingSize => "missing_size",
            PassthroughReason::UndecodableSize => "undecodable_size",
        }
    }
}

impl fmt::Display for PassthroughReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of parsing one raw line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Event(Event),
    /// No output, no side effect
    Dropped(DropReason),
    /// Emit the raw line unchanged
    Passthrough {
        line: String,
        reason: PassthroughReason,
    },
}

impl ParseOutcome {
    pub fn event(&self) -> Option<&Event> {
        match self {
            ParseOutcome::Event(event) => Some(event),
            _ => None,
        }
    }

    pub fn is_dropped(&self) -> bool {
        matches!(self, ParseOutcome::Dropped(_))
    }
}
