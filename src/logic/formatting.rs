//! Formatting and display logic
//!
//! Pure functions for formatting listing data for human-readable display.

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

/// Placeholder shown for timestamps the server sent in an unknown format
pub const INVALID_DATE: &str = "Invalid Date";

/// Format a byte count with comma thousands separators
///
/// # Examples
/// ```
/// use webftp_tui::logic::formatting::format_size_grouped;
///
/// assert_eq!(format_size_grouped(0), "0");
/// assert_eq!(format_size_grouped(999), "999");
/// assert_eq!(format_size_grouped(1024), "1,024");
/// assert_eq!(format_size_grouped(1234567), "1,234,567");
/// ```
pub fn format_size_grouped(bytes: u64) -> String {
    let digits = bytes.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Format an RFC 3339 server timestamp as a local date-time string
pub fn format_timestamp(raw: &str) -> String {
    format_timestamp_in(raw, &Local)
}

/// Format an RFC 3339 timestamp in `tz`, e.g. `1/2/2024, 3:04:05 AM`
///
/// Returns [`INVALID_DATE`] when `raw` doesn't parse.
pub fn format_timestamp_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(parsed) => parsed
            .with_timezone(tz)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string(),
        Err(_) => INVALID_DATE.to_string(),
    }
}
