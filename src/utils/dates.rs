//! `YYYY-MM-DD` handling for report filters.
//!
//! Days are UTC and windows are half-open: `[start, end)`.

use chrono::{DateTime, Days, NaiveDate, Utc};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Midnight of `date` up to midnight of the following day.
pub fn day_bounds(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    range_bounds(date, date)
}

/// Midnight of `start` up to midnight after `end`, so `end` is included.
pub fn range_bounds(start: NaiveDate, end: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let end = end.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX);
    (
        start.and_time(chrono::NaiveTime::MIN).and_utc(),
        end.and_time(chrono::NaiveTime::MIN).and_utc(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-02-29"),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(parse_date(" 2024-05-01 "), NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(parse_date("2023-02-29"), None);
        assert_eq!(parse_date("01-05-2024"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_day_bounds_cover_one_day() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let (start, end) = day_bounds(date);

        assert_eq!(start.to_rfc3339(), "2024-12-31T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_range_bounds_include_end_date() {
        let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
        let (from, to) = range_bounds(start, end);

        assert_eq!(from.to_rfc3339(), "2024-05-01T00:00:00+00:00");
        assert_eq!(to.to_rfc3339(), "2024-05-04T00:00:00+00:00");
    }
}
