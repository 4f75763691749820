/// Date utilities for normalizing API-provided timestamps.
///
/// GitHub returns `created_at` as an RFC 3339 timestamp, usually with a
/// trailing `Z` (`2023-01-15T10:30:00Z`). The display format is always the
/// plain calendar date as observed in UTC — `YYYY-MM-DD` — never the host
/// local time zone, so a date must not shift across a midnight boundary
/// just because of where the tool runs.
use chrono::{DateTime, Utc};

/// Normalize an RFC 3339 timestamp to `YYYY-MM-DD` in UTC.
///
/// Month and day are zero-padded to two digits; the year is rendered as
/// given by the source timestamp. Returns `None` if the input is not a
/// parseable RFC 3339 timestamp.
pub fn format_date_utc(timestamp: &str) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(timestamp).ok()?;
    Some(parsed.with_timezone(&Utc).format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_utc_timestamp() {
        assert_eq!(
            format_date_utc("2023-01-15T10:30:00Z"),
            Some("2023-01-15".into())
        );
    }

    #[test]
    fn keeps_date_at_utc_midnight_boundary() {
        assert_eq!(
            format_date_utc("1999-12-31T23:59:59Z"),
            Some("1999-12-31".into())
        );
    }

    #[test]
    fn converts_offset_timestamps_to_utc() {
        // 23:30 at -05:00 is 04:30 the next day in UTC
        assert_eq!(
            format_date_utc("2023-01-15T23:30:00-05:00"),
            Some("2023-01-16".into())
        );
        // 01:30 at +03:00 is 22:30 the previous day in UTC
        assert_eq!(
            format_date_utc("2023-01-15T01:30:00+03:00"),
            Some("2023-01-14".into())
        );
    }

    #[test]
    fn pads_single_digit_month_and_day() {
        assert_eq!(
            format_date_utc("2011-03-05T08:00:00Z"),
            Some("2011-03-05".into())
        );
    }

    #[test]
    fn rejects_unparseable_input() {
        assert_eq!(format_date_utc("not-a-date"), None);
        assert_eq!(format_date_utc(""), None);
        assert_eq!(format_date_utc("2023-01-15"), None);
    }
}
