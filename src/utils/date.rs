use chrono::{Datelike, NaiveDate};

use crate::consts::DATE_FORMAT;
use crate::error::ConfigError;

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, ConfigError> {
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
    Err(ConfigError::InvalidDate {
        input: s.to_string(),
    })
}

/// `YYYY-MM-DD` key for `year` combined with the month and day of `date`.
pub(crate) fn date_key(year: i32, date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", year, date.month(), date.day())
}

/// Move `date` into `year`, keeping month and day.
///
/// Feb 29 rolls over to Mar 1 when the target year is not a leap year.
pub(crate) fn with_year_or_rollover(date: NaiveDate, year: i32) -> NaiveDate {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(date)
}
