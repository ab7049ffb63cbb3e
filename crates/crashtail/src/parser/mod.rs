/// Backup log record parsing
///
/// Turns one raw line of `backup_files.log` into a structured [`Event`],
/// a silent drop, or a passthrough of the raw text.
///
/// # Architecture
///
/// - `traits.rs`: the `LineParser` seam
/// - `record.rs`: the record-line grammar
/// - `fields.rs`: leading-integer, bracket and timestamp readers
/// - `model.rs`: events, drop and passthrough reasons
/// - `metrics.rs`: per-run parse statistics

pub mod traits;
pub mod record;
pub mod metrics;
pub mod model;
mod fields;

// Re-export commonly used types
pub use traits::LineParser;
pub use record::BackupRecordParser;
pub use metrics::ParseStats;
pub use model::{DropReason, Event, EventKind, Outcome, ParseOutcome, PassthroughReason};

// Constants
pub const MIN_RECORD_FIELDS: usize = 5;
/// Hash field width in UTF-16 code units
pub const HASH_FIELD_LEN: usize = 32;
pub const DELETED_MARKER: &str = "(deleted)";
pub const MAX_LINE_SIZE: usize = 1_048_576; // 1MB
