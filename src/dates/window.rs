use chrono::{Datelike, Days, NaiveDate};

use super::selector::YearPick;
use crate::consts::DATE_FORMAT;
use crate::i18n::Lang;
use crate::utils::Timezone;

/// The 24 hours of the searched date plus how long ago it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TimeWindow {
    pub(crate) start: NaiveDate,
    pub(crate) end: NaiveDate,
    pub(crate) years_past: i32,
    pub(crate) pick: YearPick,
}

impl TimeWindow {
    pub(crate) fn new(start: NaiveDate, today: NaiveDate, pick: YearPick) -> Self {
        Self {
            start,
            end: start.checked_add_days(Days::new(1)).unwrap_or(start),
            years_past: today.year() - start.year(),
            pick,
        }
    }

    /// Searched date as `YYYY-MM-DD`; burned into every mailed photo.
    pub(crate) fn label(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    /// Start and end of the window in Unix seconds.
    pub(crate) fn timestamps(&self, timezone: Timezone) -> (i64, i64) {
        (
            timezone.midnight_timestamp(self.start),
            timezone.midnight_timestamp(self.end),
        )
    }

    /// Translated "N years ago on <month> <day>" heading.
    pub(crate) fn heading(&self, lang: Lang) -> String {
        lang.years_past(self.years_past, self.start.month(), self.start.day())
    }
}
