//! Date parsing at the input boundary.
//!
//! ISO dates (dispatch records, CLI arguments) and day/month/year dates
//! (work-panel products) are different formats and get separate parsers.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::consts::{DATE_FORMAT, DMY_FORMAT};
use crate::error::AppError;

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    let s = s.trim();
    // Try YYYYMMDD
    if s.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d")
    {
        return Ok(d);
    }
    // Try YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Ok(d);
    }
    Err(AppError::InvalidDate {
        input: s.to_string(),
    })
}

/// Parse a `DD/MM/YYYY` date. Never falls back to month-first.
pub(crate) fn parse_day_month_year(s: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(s.trim(), DMY_FORMAT).map_err(|_| AppError::InvalidDayMonthYear {
        input: s.to_string(),
    })
}

/// Parse an ISO week (`2025-W40`) into its Monday..=Sunday range.
pub(crate) fn parse_week(s: &str) -> Result<(NaiveDate, NaiveDate), AppError> {
    let invalid = || AppError::InvalidWeek {
        input: s.to_string(),
    };
    let (year, week) = s.trim().split_once("-W").ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let week: u32 = week.parse().map_err(|_| invalid())?;
    let monday = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).ok_or_else(invalid)?;
    Ok((monday, monday + Duration::days(6)))
}

/// Parse a calendar month (`2025-10`) into its first..=last day range.
pub(crate) fn parse_month(s: &str) -> Result<(NaiveDate, NaiveDate), AppError> {
    let invalid = || AppError::InvalidMonth {
        input: s.to_string(),
    };
    let trimmed = s.trim();
    if trimmed.len() != 7 {
        return Err(invalid());
    }
    let first =
        NaiveDate::parse_from_str(&format!("{trimmed}-01"), DATE_FORMAT).map_err(|_| invalid())?;
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    }
    .ok_or_else(invalid)?;
    Ok((first, next - Duration::days(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parse_date_accepts_both_iso_forms() {
        assert_eq!(parse_date("2025-10-05").unwrap(), d(2025, 10, 5));
        assert_eq!(parse_date("20251005").unwrap(), d(2025, 10, 5));
    }

    #[test]
    fn parse_date_rejects_day_month_year() {
        let err = parse_date("05/10/2025").unwrap_err();
        assert!(matches!(err, AppError::InvalidDate { .. }));
    }

    #[test]
    fn parse_day_month_year_is_day_first() {
        assert_eq!(parse_day_month_year("16/06/2025").unwrap(), d(2025, 6, 16));
        assert_eq!(parse_day_month_year("05/10/2025").unwrap(), d(2025, 10, 5));
    }

    #[test]
    fn parse_day_month_year_rejects_month_first() {
        assert!(parse_day_month_year("06/16/2025").is_err());
    }

    #[test]
    fn parse_day_month_year_rejects_iso() {
        let err = parse_day_month_year("2025-06-16").unwrap_err();
        assert!(matches!(err, AppError::InvalidDayMonthYear { .. }));
    }

    #[test]
    fn parse_week_returns_monday_to_sunday() {
        let (start, end) = parse_week("2025-W40").unwrap();
        assert_eq!(start, d(2025, 9, 29));
        assert_eq!(end, d(2025, 10, 5));
    }

    #[test]
    fn parse_week_rejects_garbage() {
        assert!(parse_week("2025-40").is_err());
        assert!(parse_week("2025-W60").is_err());
    }

    #[test]
    fn parse_month_covers_whole_month() {
        assert_eq!(parse_month("2025-02").unwrap(), (d(2025, 2, 1), d(2025, 2, 28)));
        assert_eq!(parse_month("2025-12").unwrap(), (d(2025, 12, 1), d(2025, 12, 31)));
    }

    #[test]
    fn parse_month_rejects_full_date() {
        assert!(parse_month("2025-10-01").is_err());
        assert!(parse_month("2025-13").is_err());
    }
}
