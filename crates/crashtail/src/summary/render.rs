//! Render — turn a [`Summary`] into the printed line.

use std::io::IsTerminal;

use owo_colors::OwoColorize;

use super::model::{Rendered, Summary, Tone};
use crate::conf::ColorMode;

/// How style hints are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// Hints ignored, plain text
    Plain,
    /// Hints mapped to ANSI colours
    Ansi,
}

impl Palette {
    /// Resolve a colour policy against the current stdout and `NO_COLOR`.
    pub fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Always => Palette::Ansi,
            ColorMode::Never => Palette::Plain,
            ColorMode::Auto => {
                let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
                if !no_color && std::io::stdout().is_terminal() {
                    Palette::Ansi
                } else {
                    Palette::Plain
                }
            }
        }
    }

    pub fn paint(&self, text: &str, tone: Tone) -> String {
        match self {
            Palette::Plain => text.to_string(),
            Palette::Ansi => match tone {
                Tone::Success => text.green().to_string(),
                Tone::Failure => text.red().to_string(),
                Tone::Warning => text.yellow().to_string(),
                Tone::Info => text.cyan().to_string(),
                Tone::Timestamp => text.magenta().to_string(),
            },
        }
    }
}

impl Summary {
    /// `{glyph} {date} {time}[ - {body}] {path}`
    pub fn render(&self, palette: Palette) -> String {
        let (glyph, glyph_tone) = self.glyph();
        let body = self
            .body
            .as_ref()
            .filter(|b| !b.text.is_empty())
            .map(|b| format!(" - {}", palette.paint(&b.text, b.tone)))
            .unwrap_or_default();

        format!(
            "{} {} {}{} {}",
            palette.paint(glyph, glyph_tone),
            palette.paint(&self.date, Tone::Timestamp),
            palette.paint(&self.time, Tone::Timestamp),
            body,
            self.path
        )
    }
}

impl Rendered {
    pub fn render(&self, palette: Palette) -> String {
        match self {
            Rendered::Summary(summary) => summary.render(palette),
            Rendered::Passthrough(line) => line.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Outcome;
    use crate::summary::model::Body;

    fn summary(body: Option<Body>) -> Summary {
        Summary {
            outcome: Outcome::Included,
            date: "2020-01-02".into(),
            time: "15:04".into(),
            body,
            path: "/a/b.txt".into(),
        }
    }

    #[test]
    fn test_render_plain_with_body() {
        let s = summary(Some(Body::new("✘ [DELETED]", Tone::Warning)));
        assert_eq!(s.render(Palette::Plain), "✔ 2020-01-02 15:04 - ✘ [DELETED] /a/b.txt");
    }

    #[test]
    fn test_render_plain_without_body() {
        assert_eq!(summary(None).render(Palette::Plain), "✔ 2020-01-02 15:04 /a/b.txt");
    }

    #[test]
    fn test_render_empty_body_text_is_omitted() {
        let s = summary(Some(Body::new("", Tone::Info)));
        assert_eq!(s.render(Palette::Plain), "✔ 2020-01-02 15:04 /a/b.txt");
    }

    #[test]
    fn test_render_ansi_wraps_fragments() {
        let s = summary(Some(Body::new("x", Tone::Info)));
        let out = s.render(Palette::Ansi);
        assert!(out.contains("\u{1b}["), "expected escape codes: {:?}", out);
        assert!(out.contains("2020-01-02"));
        // Path is never styled
        assert!(out.ends_with(" /a/b.txt"));
    }

    #[test]
    fn test_passthrough_is_verbatim_in_any_palette() {
        let r = Rendered::Passthrough("raw line".into());
        assert_eq!(r.render(Palette::Plain), "raw line");
        assert_eq!(r.render(Palette::Ansi), "raw line");
    }

    #[test]
    fn test_palette_for_explicit_modes() {
        assert_eq!(Palette::for_mode(ColorMode::Always), Palette::Ansi);
        assert_eq!(Palette::for_mode(ColorMode::Never), Palette::Plain);
    }
}
