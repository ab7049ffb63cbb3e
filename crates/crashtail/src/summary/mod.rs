//! Summary module — event display model, transfer figures, and styling.

pub mod model;
pub mod render;
pub mod summarize;
pub mod units;

pub use model::{Body, Previous, Rendered, Summary, Tone};
pub use render::Palette;
pub use summarize::summarize;
