//! Show start-time parsing and display formatting
//!
//! Start times are stored as TEXT in one canonical format so that
//! lexicographic comparison in SQL matches chronological order.

use chrono::{Local, NaiveDateTime};

/// Canonical storage format for show start times
pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Accepted input formats, tried in order. Covers the HTML
/// `datetime-local` wire format with and without seconds, plus the
/// space-separated equivalents.
const INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a user-submitted start time.
///
/// # Examples
///
/// ```
/// use gigboard_common::datetime::parse_start_time;
///
/// assert!(parse_start_time("2026-08-01T20:00").is_some());
/// assert!(parse_start_time("2026-08-01 20:00:00").is_some());
/// assert!(parse_start_time("next friday").is_none());
/// ```
pub fn parse_start_time(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
}

/// Format a start time for storage.
pub fn to_storage(dt: &NaiveDateTime) -> String {
    dt.format(STORAGE_FORMAT).to_string()
}

/// Current wall-clock time in storage format, for SQL comparison against
/// stored start times.
pub fn now_stamp() -> String {
    to_storage(&Local::now().naive_local())
}

/// Format a stored start time for page display, e.g. `Sat Aug 01, 2026 8:00PM`.
///
/// Values that fail to parse (hand-edited rows) are shown as stored.
pub fn format_display(stored: &str) -> String {
    match NaiveDateTime::parse_from_str(stored, STORAGE_FORMAT) {
        Ok(dt) => dt.format("%a %b %d, %Y %-I:%M%p").to_string(),
        Err(_) => stored.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_datetime_local() {
        let dt = parse_start_time("2026-08-01T20:00").unwrap();
        assert_eq!(to_storage(&dt), "2026-08-01 20:00:00");
    }

    #[test]
    fn test_parse_with_seconds() {
        let dt = parse_start_time("2026-08-01T20:00:30").unwrap();
        assert_eq!(to_storage(&dt), "2026-08-01 20:00:30");
    }

    #[test]
    fn test_parse_space_separated() {
        let dt = parse_start_time(" 2026-08-01 20:00 ").unwrap();
        assert_eq!(to_storage(&dt), "2026-08-01 20:00:00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_start_time("").is_none());
        assert!(parse_start_time("tomorrow").is_none());
        assert!(parse_start_time("2026-13-40 99:99").is_none());
    }

    #[test]
    fn test_storage_order_matches_chronology() {
        // Lexicographic comparison of storage strings must equal
        // chronological comparison.
        let earlier = to_storage(&parse_start_time("2026-08-01T09:00").unwrap());
        let later = to_storage(&parse_start_time("2026-08-01T21:00").unwrap());
        assert!(earlier < later);

        let previous_year = to_storage(&parse_start_time("2025-12-31T23:59").unwrap());
        assert!(previous_year < earlier);
    }

    #[test]
    fn test_format_display() {
        assert_eq!(format_display("2026-08-01 20:00:00"), "Sat Aug 01, 2026 8:00PM");
    }

    #[test]
    fn test_format_display_passthrough_on_bad_value() {
        assert_eq!(format_display("not a timestamp"), "not a timestamp");
    }
}
