//! Human-readable byte sizes and transfer rates.

const BYTE_UNITS: [&str; 9] = ["B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Bits in one megabit as reported by the throughput figure (2^20)
pub const BITS_PER_MEGABIT: f64 = 1_048_576.0;

/// Format a byte count with decimal units and three significant digits.
///
/// `0` → `0 B`, `512` → `512 B`, `1000` → `1 kB`, `1536` → `1.54 kB`.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1000 {
        return format!("{} B", bytes);
    }

    let mut exponent = 0;
    let mut scaled = bytes as f64;
    while scaled >= 1000.0 && exponent < BYTE_UNITS.len() - 1 {
        scaled /= 1000.0;
        exponent += 1;
    }

    format!("{} {}", three_significant(scaled), BYTE_UNITS[exponent])
}

/// `value` must be in `[1, 1000)`.
fn three_significant(value: f64) -> String {
    let integer_digits = if value >= 100.0 {
        3
    } else if value >= 10.0 {
        2
    } else {
        1
    };
    let decimals = 3 - integer_digits;
    let formatted = format!("{:.*}", decimals, round_half_up(value, decimals));
    if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        formatted
    }
}

/// Round to `decimals` places with ties away from zero.
///
/// `format!("{:.N}")` alone rounds exact ties to even (`1.125` → `1.12`).
pub fn round_half_up(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Transfer rate in megabits per second, `None` when no time elapsed.
pub fn megabits_per_second(bytes: u64, elapsed_secs: f64) -> Option<f64> {
    if elapsed_secs == 0.0 {
        return None;
    }
    Some(bytes as f64 * 8.0 / elapsed_secs / BITS_PER_MEGABIT)
}
