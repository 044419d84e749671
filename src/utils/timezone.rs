use chrono::{Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Timezone {
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| ConfigError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    /// Calendar date of "now" in this zone.
    pub(crate) fn today(self) -> NaiveDate {
        match self {
            Timezone::Local => Local::now().date_naive(),
            Timezone::Named(tz) => Utc::now().with_timezone(&tz).date_naive(),
        }
    }

    /// Unix seconds of local midnight at the start of `date`.
    ///
    /// Ambiguous midnights take the earlier instant; a midnight skipped by a
    /// DST jump falls back to reading the wall time as UTC.
    pub(crate) fn midnight_timestamp(self, date: NaiveDate) -> i64 {
        let midnight: NaiveDateTime = date.and_time(chrono::NaiveTime::MIN);
        let resolved = match self {
            Timezone::Local => Local
                .from_local_datetime(&midnight)
                .earliest()
                .map(|dt| dt.timestamp()),
            Timezone::Named(tz) => tz
                .from_local_datetime(&midnight)
                .earliest()
                .map(|dt| dt.timestamp()),
        };
        resolved.unwrap_or_else(|| midnight.and_utc().timestamp())
    }
}
