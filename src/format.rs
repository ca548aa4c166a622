//! Presentation helpers for sizes and dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Shown when a date string cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Human-readable size in base-1024 units, one decimal at most.
///
/// `1024` renders as `1 KB`, `1536` as `1.5 KB`. Sizes past the gigabyte
/// range stay in GB.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut unit = 0;
    let mut scale = 1u64;
    while unit + 1 < UNITS.len() && bytes / (scale * 1024) >= 1 {
        scale *= 1024;
        unit += 1;
    }

    // Half away from zero; `{:.1}` would round ties to even.
    let value = (bytes as f64 / scale as f64 * 10.0).round() / 10.0;
    format!("{} {}", value, UNITS[unit])
}

/// Long US-English calendar date, e.g. `March 4, 2024`.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS` timestamps and
/// bare `YYYY-MM-DD` dates. Timestamps are converted to UTC and the time
/// of day is dropped. Anything else yields [`INVALID_DATE`].
pub fn format_date(date: &str) -> String {
    match parse_date(date.trim()) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}
