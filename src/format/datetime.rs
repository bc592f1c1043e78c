//! Date and time views
//!
//! Output is fixed to US English regardless of the host locale. The zone is
//! whatever the given `DateTime` carries; callers convert before formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;
use std::fmt;

use crate::error::{HorizonError, HorizonResult};

/// "Mon, Oct 25, 8:30 AM"
const DATE_TIME_FORMAT: &str = "%a, %b %-d, %-I:%M %p";
/// "Mon, 10/25/2023"
const DATE_DAY_FORMAT: &str = "%a, %m/%d/%Y";
/// "Oct 25, 2023"
const DATE_ONLY_FORMAT: &str = "%b %-d, %Y";
/// "8:30 AM"
const TIME_ONLY_FORMAT: &str = "%-I:%M %p";

/// The four renderings of one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedDateViews {
    /// Weekday, month, day and 12-hour time
    pub date_time: String,
    /// Weekday and 2-digit month/day with the full year
    pub date_day: String,
    /// Month, day and year
    pub date_only: String,
    /// 12-hour time
    pub time_only: String,
}

/// Render `date` into all four views
pub fn format_date_time<Tz>(date: &DateTime<Tz>) -> FormattedDateViews
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    FormattedDateViews {
        date_time: date.format(DATE_TIME_FORMAT).to_string(),
        date_day: date.format(DATE_DAY_FORMAT).to_string(),
        date_only: date.format(DATE_ONLY_FORMAT).to_string(),
        time_only: date.format(TIME_ONLY_FORMAT).to_string(),
    }
}

/// Parse a date string and render it in `tz`
///
/// # Errors
///
/// `InvalidDate` when `input` is not a date [`parse_date`] understands.
pub fn format_date_time_str<Tz>(input: &str, tz: &Tz) -> HorizonResult<FormattedDateViews>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let instant = parse_date(input)?;
    Ok(format_date_time(&instant.with_timezone(tz)))
}

/// Parse a timestamp from text
///
/// Accepts RFC 3339 (`2023-10-25T08:30:00-04:00`), a naive date-time
/// (`2023-10-25 08:30:00` or `2023-10-25T08:30:00`, read as UTC) and a bare
/// date (`2023-10-25`, midnight UTC).
pub fn parse_date(input: &str) -> HorizonResult<DateTime<Utc>> {
    let trimmed = input.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(date.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| HorizonError::invalid_date(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn morning() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 10, 25, 8, 30, 0).unwrap()
    }

    #[test]
    fn test_format_date_time() {
        let views = format_date_time(&morning());
        assert_eq!(views.date_time, "Wed, Oct 25, 8:30 AM");
        assert_eq!(views.date_day, "Wed, 10/25/2023");
        assert_eq!(views.date_only, "Oct 25, 2023");
        assert_eq!(views.time_only, "8:30 AM");
    }

    #[test]
    fn test_format_pm_and_midnight() {
        let evening = Utc.with_ymd_and_hms(2024, 1, 5, 20, 5, 0).unwrap();
        let views = format_date_time(&evening);
        assert_eq!(views.date_time, "Fri, Jan 5, 8:05 PM");
        assert_eq!(views.date_day, "Fri, 01/05/2024");

        let after_midnight = Utc.with_ymd_and_hms(2024, 1, 5, 0, 15, 0).unwrap();
        assert_eq!(format_date_time(&after_midnight).time_only, "12:15 AM");
    }

    #[test]
    fn test_format_is_idempotent() {
        let instant = morning();
        assert_eq!(format_date_time(&instant), format_date_time(&instant));
    }

    #[test]
    fn test_format_in_offset() {
        let eastern = FixedOffset::west_opt(5 * 3600).unwrap();
        let late = Utc.with_ymd_and_hms(2023, 10, 25, 2, 0, 0).unwrap();
        let views = format_date_time(&late.with_timezone(&eastern));
        assert_eq!(views.date_time, "Tue, Oct 24, 9:00 PM");
        assert_eq!(views.date_only, "Oct 24, 2023");
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2023-10-25T08:30:00Z").unwrap(), morning());
        assert_eq!(parse_date("2023-10-25T04:30:00-04:00").unwrap(), morning());
        assert_eq!(parse_date("2023-10-25 08:30:00").unwrap(), morning());
        assert_eq!(parse_date(" 2023-10-25T08:30:00 ").unwrap(), morning());
        assert_eq!(
            parse_date("2023-10-25").unwrap(),
            Utc.with_ymd_and_hms(2023, 10, 25, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        for input in ["", "not a date", "2023-13-01", "10/25/2023", "2023-02-30"] {
            let err = parse_date(input).unwrap_err();
            assert!(err.is_invalid_date(), "expected InvalidDate for {:?}", input);
        }
    }

    #[test]
    fn test_format_date_time_str() {
        let views = format_date_time_str("2023-10-25T08:30:00Z", &Utc).unwrap();
        assert_eq!(views.time_only, "8:30 AM");

        let err = format_date_time_str("Invalid Date", &Utc).unwrap_err();
        assert!(err.is_invalid_date());
    }

    #[test]
    fn test_views_serialize_camel_case() {
        let json = serde_json::to_value(format_date_time(&morning())).unwrap();
        assert_eq!(json["dateTime"], "Wed, Oct 25, 8:30 AM");
        assert_eq!(json["timeOnly"], "8:30 AM");
    }
}
