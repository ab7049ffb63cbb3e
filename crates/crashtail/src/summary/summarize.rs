//! Summarize — derive elapsed time and throughput, pick the body text.

use crate::parser::{Event, EventKind};

use super::model::{Body, Previous, Summary, Tone};
use super::units::{format_bytes, megabits_per_second, round_half_up};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Build the display model for `event`.
///
/// `previous` is the last event the pipeline produced. Transfer figures are
/// only computed when it came from the line directly above `event`.
pub fn summarize(event: &Event, previous: Option<&Previous>) -> Summary {
    let body = match event.kind {
        EventKind::Deleted => Some(Body::new("✘ [DELETED]", Tone::Warning)),
        EventKind::Upload { size_bytes, .. } if event.kind.is_hash_match() => Some(Body::new(
            format!("➡ FILE HASH MATCH ({})", format_bytes(size_bytes)),
            Tone::Success,
        )),
        // No adjacent predecessor leaves the body empty, not a fallback text
        EventKind::Upload { uploaded_bytes, .. } => previous
            .filter(|prev| prev.is_adjacent_to(event.sequence_index))
            .map(|prev| Body::new(transfer_stats(event, &prev.event, uploaded_bytes), Tone::Info)),
    };

    Summary {
        outcome: event.outcome,
        date: event.timestamp.format(DATE_FORMAT).to_string(),
        time: event.timestamp.format(TIME_FORMAT).to_string(),
        body,
        path: event.path.clone(),
    }
}

/// Minutes between two events; fractional and possibly negative.
pub fn elapsed_minutes(event: &Event, previous: &Event) -> f64 {
    let delta = event.timestamp.signed_duration_since(previous.timestamp);
    delta.num_milliseconds() as f64 / 60_000.0
}

fn transfer_stats(event: &Event, previous: &Event, uploaded_bytes: u64) -> String {
    let minutes = elapsed_minutes(event, previous);
    let mut text = format!("⬆ {} in {} mins", format_bytes(uploaded_bytes), minutes);
    if let Some(rate) = megabits_per_second(uploaded_bytes, minutes * 60.0) {
        text.push_str(&format!(" (approx. {:.1}mbps)", round_half_up(rate, 1)));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Outcome;
    use chrono::{DateTime, Duration, Local, TimeZone, Utc};

    fn at(minute: u32) -> DateTime<Local> {
        Utc.with_ymd_and_hms(2020, 1, 2, 15, minute, 0).unwrap().with_timezone(&Local)
    }

    fn upload(index: usize, minute: u32, uploaded_bytes: u64) -> Event {
        Event {
            outcome: Outcome::Included,
            timestamp: at(minute),
            kind: EventKind::Upload { size_bytes: 1, uploaded_bytes },
            path: "/a/b.txt".into(),
            sequence_index: index,
        }
    }

    fn body_text(summary: &Summary) -> Option<&str> {
        summary.body.as_ref().map(|b| b.text.as_str())
    }

    // ── Hash match ───────────────────────────────────────────────

    #[test]
    fn test_zero_upload_is_hash_match() {
        let event = Event {
            kind: EventKind::Upload { size_bytes: 2048, uploaded_bytes: 0 },
            ..upload(1, 5, 0)
        };
        let prev = Previous::new(upload(0, 4, 10));
        let summary = summarize(&event, Some(&prev));
        assert_eq!(body_text(&summary), Some("➡ FILE HASH MATCH (2.05 kB)"));
        assert_eq!(summary.body.unwrap().tone, Tone::Success);
    }

    #[test]
    fn test_hash_match_without_previous() {
        let summary = summarize(&upload(9, 5, 0), None);
        assert_eq!(body_text(&summary), Some("➡ FILE HASH MATCH (1 B)"));
    }

    // ── Transfer stats ───────────────────────────────────────────

    #[test]
    fn test_adjacent_upload_reports_elapsed_and_rate() {
        let prev = Previous::new(upload(0, 4, 0));
        let summary = summarize(&upload(1, 5, 512), Some(&prev));
        let text = body_text(&summary).unwrap();
        assert!(text.starts_with("⬆ 512 B in 1 mins"), "got: {}", text);
        // 512 * 8 bits / 60 s / 2^20
        assert!(text.ends_with(" (approx. 0.0mbps)"), "got: {}", text);
    }

    #[test]
    fn test_rate_is_one_decimal() {
        let prev = Previous::new(upload(0, 4, 0));
        // 60 MiB over one minute: 8 binary megabits per second
        let summary = summarize(&upload(1, 5, 60 * 1_048_576), Some(&prev));
        assert_eq!(body_text(&summary), Some("⬆ 62.9 MB in 1 mins (approx. 8.0mbps)"));
    }

    #[test]
    fn test_rate_rounds_ties_up() {
        let prev = Previous::new(upload(0, 4, 0));
        // 1 966 080 B over one minute is exactly 0.25 binary megabits per second
        let summary = summarize(&upload(1, 5, 1_966_080), Some(&prev));
        assert_eq!(body_text(&summary), Some("⬆ 1.97 MB in 1 mins (approx. 0.3mbps)"));
    }

    #[test]
    fn test_zero_elapsed_omits_rate() {
        let prev = Previous::new(upload(0, 5, 0));
        let summary = summarize(&upload(1, 5, 512), Some(&prev));
        assert_eq!(body_text(&summary), Some("⬆ 512 B in 0 mins"));
    }

    #[test]
    fn test_negative_elapsed_is_reported_as_is() {
        let prev = Previous::new(upload(0, 7, 0));
        let summary = summarize(&upload(1, 5, 512), Some(&prev));
        let text = body_text(&summary).unwrap();
        assert!(text.starts_with("⬆ 512 B in -2 mins"), "got: {}", text);
        assert!(text.contains("(approx. "), "got: {}", text);
    }

    #[test]
    fn test_non_adjacent_upload_has_empty_body() {
        // Known quirk: a gap between records suppresses the body entirely
        let prev = Previous::new(upload(0, 4, 0));
        let summary = summarize(&upload(2, 5, 512), Some(&prev));
        assert_eq!(summary.body, None);
    }

    #[test]
    fn test_upload_without_previous_has_empty_body() {
        assert_eq!(summarize(&upload(0, 5, 512), None).body, None);
    }

    // ── Deleted ──────────────────────────────────────────────────

    #[test]
    fn test_deleted_ignores_history() {
        let deleted = Event { kind: EventKind::Deleted, ..upload(1, 5, 0) };
        let prev = Previous::new(upload(0, 4, 0));
        for previous in [None, Some(&prev)] {
            let summary = summarize(&deleted, previous);
            assert_eq!(body_text(&summary), Some("✘ [DELETED]"));
            assert_eq!(summary.body.as_ref().unwrap().tone, Tone::Warning);
        }
    }

    // ── Date, time, elapsed ──────────────────────────────────────

    #[test]
    fn test_date_and_time_are_local() {
        let event = upload(0, 4, 0);
        let summary = summarize(&event, None);
        assert_eq!(summary.date, at(4).format("%Y-%m-%d").to_string());
        assert_eq!(summary.time, at(4).format("%H:%M").to_string());
        assert_eq!(summary.path, "/a/b.txt");
        assert_eq!(summary.outcome, Outcome::Included);
    }

    #[test]
    fn test_elapsed_minutes_fractional() {
        let a = upload(0, 4, 0);
        let b = Event { timestamp: a.timestamp + Duration::seconds(90), ..upload(1, 4, 0) };
        assert_eq!(elapsed_minutes(&b, &a), 1.5);
    }
}
