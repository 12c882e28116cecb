//! Iteration window membership.
//!
//! An iteration starting on `D` with a duration of `N` days covers the
//! closed range `[D, D + N - 1]`. A one-day iteration covers only `D`; a
//! zero-day iteration covers nothing.

use chrono::{Days, NaiveDate};

use crate::model::Iteration;

/// Closed calendar-date range covered by an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl IterationWindow {
    /// Resolve the window of an iteration.
    ///
    /// Returns `None` for a zero-length iteration, or one whose end falls
    /// outside the representable date range.
    #[must_use]
    pub fn of(iteration: &Iteration) -> Option<Self> {
        let last_offset = iteration.duration.checked_sub(1)?;
        let end = iteration
            .start_date
            .checked_add_days(Days::new(u64::from(last_offset)))?;
        Some(Self {
            start: iteration.start_date,
            end,
        })
    }

    /// Whether `date` falls inside the window, both ends inclusive.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Whether `today` falls inside the item's iteration.
///
/// Unassigned items are never current.
#[must_use]
pub fn is_current(iteration: Option<&Iteration>, today: NaiveDate) -> bool {
    iteration
        .and_then(IterationWindow::of)
        .is_some_and(|window| window.contains(today))
}
