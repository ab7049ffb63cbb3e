use serde::Serialize;

use crate::parser::{Event, Outcome};

/// Styling hint attached to a rendered fragment.
///
/// The core only states intent; the [`Palette`](super::Palette) decides
/// whether a hint becomes a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Failure,
    Warning,
    Info,
    Timestamp,
}

/// The most recent event together with the line index it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Previous {
    pub index: usize,
    pub event: Event,
}

impl Previous {
    pub fn new(event: Event) -> Self {
        Self {
            index: event.sequence_index,
            event,
        }
    }

    /// True when this record sat on the line right before `index`
    pub fn is_adjacent_to(&self, index: usize) -> bool {
        self.index.checked_add(1) == Some(index)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Body {
    pub text: String,
    pub tone: Tone,
}

impl Body {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Display model of one event before styling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub outcome: Outcome,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:mm`
    pub time: String,
    /// Empty for uploads whose predecessor line was not a record
    pub body: Option<Body>,
    pub path: String,
}

impl Summary {
    pub fn glyph(&self) -> (&'static str, Tone) {
        match self.outcome {
            Outcome::Included => ("✔", Tone::Success),
            Outcome::Excluded => ("✘", Tone::Failure),
        }
    }
}

/// What the driver prints for one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Summary(Summary),
    /// Raw line echoed because its payload could not be decoded
    Passthrough(String),
}
