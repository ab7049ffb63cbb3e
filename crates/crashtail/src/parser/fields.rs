//! Small field readers shared by the record parser.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// Source timestamp layout: `01/02/20 03:04PM`
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%y %I:%M%p";

/// Read the integer at the start of `s`, ignoring whatever follows it.
///
/// `"12"` → 12, `"2x"` → 2, `"1.0kB"` → 1, `"-3"` → -3, `"0x1f"` → 31,
/// `"x1"` → None. Leading whitespace, a single sign and a `0x` prefix
/// (hexadecimal) are accepted.
pub fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = digits
        .bytes()
        .position(|b| !(b as char).is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Saturate instead of failing on absurdly long digit runs
    let value = i64::from_str_radix(&digits[..end], radix).unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Length of `s` in UTF-16 code units.
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Strip the first and last character of a wrapped token: `(1234)` → `1234`.
///
/// Tokens shorter than two characters yield an empty string.
pub fn unwrap_brackets(token: &str) -> &str {
    let mut chars = token.char_indices();
    let start = match chars.next() {
        Some((_, c)) => c.len_utf8(),
        None => return "",
    };
    match chars.next_back() {
        Some((end, _)) if end >= start => &token[start..end],
        _ => "",
    }
}

/// Parse the date and time columns as UTC and move them to local time.
pub fn parse_timestamp(date: &str, time: &str) -> Option<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(&format!("{} {}", date, time), TIMESTAMP_FORMAT).ok()?;
    Some(Utc.from_utc_datetime(&naive).with_timezone(&Local))
}
