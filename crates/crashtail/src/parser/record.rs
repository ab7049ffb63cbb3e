//! Record-line parser for `backup_files.log`.
//!
//! A record line is space-delimited:
//!
//! ```text
//! I 01/02/20 03:04PM 42 0123456789abcdef0123456789abcdef 0 /path/with spaces.txt (1234) [0,0,512]
//! ^ ^        ^       ^  ^                                ^ ^                        ^      ^
//! | date     time    |  hash (32 chars)                  | path tokens              size   payload
//! outcome            unused                              folder flag
//! ```
//!
//! Deleted files end in `(deleted)` instead of a size and payload.

use serde::de::IgnoredAny;
use tracing::trace;

use super::fields::{leading_int, parse_timestamp, unwrap_brackets, utf16_len};
use super::traits::*;
use super::{DELETED_MARKER, HASH_FIELD_LEN, MIN_RECORD_FIELDS};

/// Parser for CrashPlan backup record lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct BackupRecordParser;

impl BackupRecordParser {
    pub fn new() -> Self {
        Self
    }
}

impl LineParser for BackupRecordParser {
    fn parse(&self, raw: &str, index: usize) -> ParseOutcome {
        let fields: Vec<&str> = raw.split(' ').collect();

        if fields.len() < MIN_RECORD_FIELDS {
            return dropped(index, DropReason::TooFewFields);
        }
        if utf16_len(fields[4]) != HASH_FIELD_LEN {
            return dropped(index, DropReason::BadHashField);
        }

        let outcome = Outcome::from_code(fields[0]);
        let (date, time) = (fields[1], fields[2]);
        // fields[3] is an unused numeric column, fields[4] the content hash
        let is_folder = fields
            .get(5)
            .and_then(|flag| leading_int(flag))
            .is_some_and(|flag| flag != 0);
        if is_folder {
            return dropped(index, DropReason::Folder);
        }

        let Some(timestamp) = parse_timestamp(date, time) else {
            return dropped(index, DropReason::BadTimestamp);
        };

        let mut rest: Vec<&str> = fields.get(6..).map(<[&str]>::to_vec).unwrap_or_default();

        let Some(payload) = rest.pop() else {
            return passthrough(raw, index, PassthroughReason::MissingPayload);
        };

        let kind = if payload == DELETED_MARKER {
            EventKind::Deleted
        } else {
            let Ok((_, _, uploaded_bytes)) =
                serde_json::from_str::<(IgnoredAny, IgnoredAny, u64)>(payload)
            else {
                return passthrough(raw, index, PassthroughReason::UndecodablePayload);
            };

            let Some(size_token) = rest.pop() else {
                return passthrough(raw, index, PassthroughReason::MissingSize);
            };
            let Some(size_bytes) = leading_int(unwrap_brackets(size_token)) else {
                return passthrough(raw, index, PassthroughReason::UndecodableSize);
            };

            EventKind::Upload {
                size_bytes: size_bytes.max(0) as u64,
                uploaded_bytes,
            }
        };

        ParseOutcome::Event(Event {
            outcome,
            timestamp,
            kind,
            path: rest.join(" "),
            sequence_index: index,
        })
    }
}

fn dropped(index: usize, reason: DropReason) -> ParseOutcome {
    trace!(index, reason = %reason, "Dropping non-record line");
    ParseOutcome::Dropped(reason)
}

fn passthrough(raw: &str, index: usize, reason: PassthroughReason) -> ParseOutcome {
    tracing::warn!(index, reason = %reason, "Could not decode record payload, echoing raw line");
    ParseOutcome::Passthrough {
        line: raw.to_string(),
        reason,
    }
}
