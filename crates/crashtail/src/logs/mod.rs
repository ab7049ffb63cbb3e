//! Logs module — line pipeline, trailing window, logfile discovery, and tailing.

pub mod discover;
pub mod pipeline;
pub mod tail;
pub mod window;

pub use pipeline::{parse_and_summarize, LinePipeline};
pub use window::TrailingWindow;
