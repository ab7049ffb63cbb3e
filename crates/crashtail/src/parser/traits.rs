pub use super::model::{DropReason, Event, EventKind, Outcome, ParseOutcome, PassthroughReason};

pub trait LineParser: Send + Sync {
    /// parse one raw line sitting at `index` in the input
    fn parse(&self, raw: &str, index: usize) -> ParseOutcome;
}
