//! UTC calendar-day helpers.
//!
//! Availability is always computed on UTC day boundaries; the server's local
//! time zone never takes part.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde_json::json;

use crate::error::AppError;

/// Parses a strict `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for anything else, including impossible
/// dates such as `2025-02-30`.
pub fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    let trimmed = raw.trim();
    let well_formed = trimmed.len() == 10
        && trimmed
            .char_indices()
            .all(|(i, c)| if i == 4 || i == 7 { c == '-' } else { c.is_ascii_digit() });

    if !well_formed {
        return Err(invalid_date(raw));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| invalid_date(raw))
}

fn invalid_date(raw: &str) -> AppError {
    AppError::bad_request(
        "Invalid date, expected YYYY-MM-DD",
        json!({ "field": "date", "value": raw }),
    )
}

/// Returns `[start, end)` covering `date` in UTC.
pub fn day_bounds(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    range_bounds(date, 1)
}

/// Returns `[start, end)` covering `days` consecutive UTC days from `date`.
pub fn range_bounds(date: NaiveDate, days: u32) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = date.and_time(chrono::NaiveTime::MIN).and_utc();
    let end_date = date
        .checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX);
    let end = end_date.and_time(chrono::NaiveTime::MIN).and_utc();
    (start, end)
}

/// Today's date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        let date = parse_date("2025-09-25").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 9, 25).unwrap());
    }

    #[test]
    fn test_parse_rejects_malformed_dates() {
        for raw in ["", "2025-9-25", "25-09-2025", "2025/09/25", "2025-09-25T00:00", "abcd-ef-gh"] {
            assert!(parse_date(raw).is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("2025-13-01").is_err());
    }

    #[test]
    fn test_day_bounds_are_utc_midnights() {
        let (start, end) = day_bounds(NaiveDate::from_ymd_opt(2025, 9, 25).unwrap());
        assert_eq!(start.to_rfc3339(), "2025-09-25T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2025-09-26T00:00:00+00:00");
    }

    #[test]
    fn test_day_bounds_cross_month_and_year() {
        let (_, end) = day_bounds(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
        assert_eq!(end.to_rfc3339(), "2026-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_range_bounds_span_days() {
        let (start, end) = range_bounds(NaiveDate::from_ymd_opt(2025, 2, 27).unwrap(), 3);
        assert_eq!(start.to_rfc3339(), "2025-02-27T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2025-03-02T00:00:00+00:00");
    }
}
