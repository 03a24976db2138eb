/// Utilities for date and time formatting
///
/// The API sends SQL `datetime2` values either ISO style (`2026-01-15T10:20:30.123`,
/// optionally with an offset) or space separated (`2026-01-15 10:20:30`).
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DISPLAY_DATETIME: &str = "%Y-%m-%d %H:%M:%S";

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS`
/// Example: "2024-03-15T14:02:26.123" -> "2024-03-15 14:02:26"
///
/// Unparseable input is returned unchanged.
pub fn format_datetime(datetime_str: &str) -> String {
    match parse_datetime(datetime_str) {
        Some(dt) => dt.format(DISPLAY_DATETIME).to_string(),
        None => datetime_str.to_string(),
    }
}

/// True for a `YYYY-MM-DD` string the date filters accept.
pub fn is_valid_filter_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123"),
            "2024-03-15 14:02:26"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59Z"),
            "2024-12-31 23:59:59"
        );
        assert_eq!(
            format_datetime("2026-01-15 10:20:30"),
            "2026-01-15 10:20:30"
        );
    }

    #[test]
    fn test_offset_is_converted_to_utc() {
        assert_eq!(
            format_datetime("2026-01-15T10:20:30+02:00"),
            "2026-01-15 08:20:30"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_datetime(""), "");
    }

    #[test]
    fn test_filter_date() {
        assert!(is_valid_filter_date("2026-02-28"));
        assert!(!is_valid_filter_date("2026-02-30"));
        assert!(!is_valid_filter_date("28.02.2026"));
    }
}
