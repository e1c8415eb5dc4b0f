use chrono::{Days, Local, Months, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{AppError, AppResult};

/// Half-open `[first_of_month, first_of_next_month)` range for a `YYYY-MM` string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

pub fn parse_year_month(raw: &str) -> AppResult<MonthRange> {
    let invalid = || AppError::Validation("Invalid month format. Use YYYY-MM.".to_string());

    let raw = raw.trim();
    let (year, month) = raw.split_once('-').ok_or_else(invalid)?;
    if year.len() != 4 || month.len() != 2 {
        return Err(invalid());
    }
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;

    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let end = start
        .checked_add_months(Months::new(1))
        .ok_or_else(invalid)?;

    Ok(MonthRange { start, end })
}

/// `YYYY-MM` for the server's current local month
pub fn current_year_month() -> String {
    Local::now().format("%Y-%m").to_string()
}

/// `[midnight(date), midnight(date + 1))`
pub fn day_window(date: NaiveDate) -> AppResult<(NaiveDateTime, NaiveDateTime)> {
    let next = date
        .checked_add_days(Days::new(1))
        .ok_or_else(|| AppError::Validation(format!("Date out of range: {date}")))?;

    Ok((date.and_time(NaiveTime::MIN), next.and_time(NaiveTime::MIN)))
}

pub fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format. Use YYYY-MM-DD.".to_string()))
}

/// Accepts `YYYY-MM-DDTHH:MM:SS` and `YYYY-MM-DD HH:MM:SS`
pub fn parse_access_time(raw: &str) -> AppResult<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .map_err(|_| {
            AppError::Validation(
                "Invalid access_time format. Use YYYY-MM-DDTHH:MM:SS.".to_string(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_range_is_half_open() {
        let range = parse_year_month("2025-04").unwrap();
        assert_eq!(range.start, date(2025, 4, 1));
        assert_eq!(range.end, date(2025, 5, 1));
    }

    #[test]
    fn december_rolls_into_next_year() {
        let range = parse_year_month("2024-12").unwrap();
        assert_eq!(range.end, date(2025, 1, 1));
    }

    #[test]
    fn malformed_months_are_validation_errors() {
        for raw in ["2025-13", "2025/04", "April", "2025-4", "25-04", "2025-04-01", ""] {
            assert!(
                matches!(parse_year_month(raw), Err(AppError::Validation(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn day_window_spans_one_calendar_day() {
        let (start, end) = day_window(date(2025, 2, 28)).unwrap();
        assert_eq!(start.to_string(), "2025-02-28 00:00:00");
        assert_eq!(end.to_string(), "2025-03-01 00:00:00");
    }

    #[test]
    fn access_time_accepts_both_separators() {
        let t = parse_access_time("2025-05-02T08:05:00").unwrap();
        assert_eq!(t, parse_access_time("2025-05-02 08:05:00").unwrap());
        assert!(parse_access_time("2025-05-02").is_err());
    }
}
