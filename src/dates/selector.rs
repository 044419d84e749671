//! Unused-year selection
//!
//! Draws a random past year for today's month/day, skipping years already
//! recorded in the used-date store. The search is bounded: after
//! `MAX_YEAR_ATTEMPTS` retries the last drawn year is taken even if used.

use chrono::{Datelike, NaiveDate};
use rand::Rng;

use super::store::{DateStore, UsedDates};
use super::window::TimeWindow;
use crate::config::SelectionSettings;
use crate::consts::MAX_YEAR_ATTEMPTS;
use crate::utils::{date_key, with_year_or_rollover};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum YearPick {
    /// Drawn year was not in the used list.
    Accepted(i32),
    /// Every attempt hit a used year; this is the last one drawn.
    ExhaustedFallback(i32),
    /// Fixed-date mode, no draw happened.
    Fixed(i32),
}

impl YearPick {
    pub(crate) fn year(self) -> i32 {
        match self {
            YearPick::Accepted(y) | YearPick::ExhaustedFallback(y) | YearPick::Fixed(y) => y,
        }
    }
}

pub(crate) struct DateSelector<'a> {
    settings: &'a SelectionSettings,
    store: &'a DateStore,
}

impl<'a> DateSelector<'a> {
    pub(crate) fn new(settings: &'a SelectionSettings, store: &'a DateStore) -> Self {
        Self { settings, store }
    }

    pub(crate) fn select_year<R: Rng + ?Sized>(
        &self,
        used: &UsedDates,
        today: NaiveDate,
        rng: &mut R,
    ) -> YearPick {
        self.select_year_from(used, today, 0, rng)
    }

    /// Continue the search at `attempt`; a value above the ceiling yields
    /// at most one more draw.
    pub(crate) fn select_year_from<R: Rng + ?Sized>(
        &self,
        used: &UsedDates,
        today: NaiveDate,
        mut attempt: u32,
        rng: &mut R,
    ) -> YearPick {
        if self.settings.fixed_date.is_some() {
            tracing::debug!("Fixed date configured, skipping year draw");
            return YearPick::Fixed(today.year());
        }

        let (low, high) = self.year_range(today);
        loop {
            let year = rng.gen_range(low..=high);
            let key = date_key(year, today);

            if !used.contains(&key) {
                tracing::info!("Found unused year {year} (attempt {attempt})");
                return YearPick::Accepted(year);
            }
            if attempt > MAX_YEAR_ATTEMPTS {
                tracing::warn!("No unused year after {attempt} attempts, reusing {year}");
                return YearPick::ExhaustedFallback(year);
            }
            tracing::debug!("Year {year} already used, retrying");
            attempt += 1;
        }
    }

    /// Inclusive draw range `[min_year, min(max_year, today.year - 1)]`.
    /// An inverted range collapses onto its upper bound.
    fn year_range(&self, today: NaiveDate) -> (i32, i32) {
        let cap = today.year() - 1;
        let high = self.settings.max_year.map_or(cap, |max| max.min(cap));
        let low = self.settings.min_year;
        if low > high {
            tracing::warn!("MINYEAR {low} is after the latest usable year {high}, using {high}");
            return (high, high);
        }
        (low, high)
    }

    /// Date to search: the fixed date, or today moved into an unused year.
    /// Non-fixed picks are appended to the store and persisted.
    pub(crate) fn start_date<R: Rng + ?Sized>(
        &self,
        today: NaiveDate,
        rng: &mut R,
    ) -> (NaiveDate, YearPick) {
        if let Some(fixed) = self.settings.fixed_date {
            tracing::info!("Using fixed date {fixed}");
            return (fixed, YearPick::Fixed(fixed.year()));
        }

        let mut used = self.store.load();
        let pick = self.select_year(&used, today, rng);
        let date = with_year_or_rollover(today, pick.year());

        used.push(date_key(date.year(), date));
        if let Err(e) = self.store.save(&used) {
            tracing::warn!("Could not write dates used file: {e}");
        }

        (date, pick)
    }

    pub(crate) fn time_window<R: Rng + ?Sized>(&self, today: NaiveDate, rng: &mut R) -> TimeWindow {
        let (start, pick) = self.start_date(today, rng);
        let window = TimeWindow::new(start, today, pick);
        tracing::info!("Looking for photos on {} ({:?})", window.label(), window.pick);
        window
    }
}
