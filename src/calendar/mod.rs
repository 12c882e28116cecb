//! Business-day arithmetic.
//!
//! Counts weekdays in a date range, skipping the days a
//! [`HolidayCalendar`] marks as holidays. Independent of the burndown
//! pipeline; exposed through the `business-days` command.

mod japan;

pub use japan::{holiday_name as japanese_holiday_name, JapaneseHolidays};

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};

/// Source of non-working days beyond weekends.
pub trait HolidayCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

/// An explicit set of holiday dates.
#[derive(Debug, Clone, Default)]
pub struct FixedHolidays {
    dates: BTreeSet<NaiveDate>,
}

impl FixedHolidays {
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }
}

impl HolidayCalendar for FixedHolidays {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

/// Union of several calendars. The empty set skips weekends only.
#[derive(Default)]
pub struct CalendarSet {
    calendars: Vec<Box<dyn HolidayCalendar>>,
}

impl CalendarSet {
    #[must_use]
    pub fn with(mut self, calendar: impl HolidayCalendar + 'static) -> Self {
        self.calendars.push(Box::new(calendar));
        self
    }
}

impl HolidayCalendar for CalendarSet {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.calendars.iter().any(|c| c.is_holiday(date))
    }
}

/// Whether `date` is a Saturday or Sunday.
#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Number of business days in `[start, end]`, both ends inclusive.
///
/// A range with `start` after `end` has zero business days.
pub fn count_business_days<C>(start: NaiveDate, end: NaiveDate, calendar: &C) -> u32
where
    C: HolidayCalendar + ?Sized,
{
    let days = start
        .iter_days()
        .take_while(|date| *date <= end)
        .filter(|date| !is_weekend(*date) && !calendar.is_holiday(*date))
        .count();
    u32::try_from(days).unwrap_or(u32::MAX)
}
