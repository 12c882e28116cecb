//! Japanese national holidays.
//!
//! Rules of the Act on National Holidays, including the moves of Happy
//! Monday days, the 2020/2021 Olympic shifts, substitute holidays and
//! "citizens' holidays" sandwiched between two holidays. Equinox days use
//! the standard approximation, accurate for 1980-2099.

use chrono::{Datelike, NaiveDate, Weekday};

use super::HolidayCalendar;

/// Japanese national holiday calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct JapaneseHolidays;

impl HolidayCalendar for JapaneseHolidays {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        holiday_name(date).is_some()
    }
}

/// Name of the holiday on `date`, if any.
#[must_use]
pub fn holiday_name(date: NaiveDate) -> Option<&'static str> {
    national_holiday(date)
        .or_else(|| is_substitute_holiday(date).then_some("Substitute Holiday"))
        .or_else(|| is_citizens_holiday(date).then_some("Citizens' Holiday"))
}

fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn nth_monday(year: i32, month: u32, n: u8) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, Weekday::Mon, n)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn equinox_day(base: f64, year: i32) -> u32 {
    let t = f64::from(year - 1980);
    (base + 0.242_194 * t - (t / 4.0).floor()).floor() as u32
}

fn coming_of_age_day(year: i32) -> Option<NaiveDate> {
    if year < 2000 {
        ymd(year, 1, 15)
    } else {
        nth_monday(year, 1, 2)
    }
}

fn marine_day(year: i32) -> Option<NaiveDate> {
    match year {
        1996..=2002 => ymd(year, 7, 20),
        2020 => ymd(year, 7, 23),
        2021 => ymd(year, 7, 22),
        2003.. => nth_monday(year, 7, 3),
        _ => None,
    }
}

fn mountain_day(year: i32) -> Option<NaiveDate> {
    match year {
        2020 => ymd(year, 8, 10),
        2021 => ymd(year, 8, 8),
        2016.. => ymd(year, 8, 11),
        _ => None,
    }
}

fn respect_for_the_aged_day(year: i32) -> Option<NaiveDate> {
    match year {
        1966..=2002 => ymd(year, 9, 15),
        2003.. => nth_monday(year, 9, 3),
        _ => None,
    }
}

fn sports_day(year: i32) -> Option<NaiveDate> {
    match year {
        1966..=1999 => ymd(year, 10, 10),
        2020 => ymd(year, 7, 24),
        2021 => ymd(year, 7, 23),
        2000.. => nth_monday(year, 10, 2),
        _ => None,
    }
}

fn emperors_birthday(year: i32) -> Option<NaiveDate> {
    match year {
        ..=1988 => ymd(year, 4, 29),
        1989..=2018 => ymd(year, 12, 23),
        2019 => None,
        _ => ymd(year, 2, 23),
    }
}

/// One-off holidays for imperial ceremonies.
fn imperial_ceremony(date: NaiveDate) -> bool {
    matches!(
        (date.year(), date.month(), date.day()),
        (1959, 4, 10) | (1989, 2, 24) | (1990, 11, 12) | (1993, 6, 9) | (2019, 5, 1) | (2019, 10, 22)
    )
}

/// Holidays named by the Act for `year`.
fn national_holidays(year: i32) -> Vec<(Option<NaiveDate>, &'static str)> {
    let april_29 = match year {
        ..=1988 => None,
        1989..=2006 => Some("Greenery Day"),
        _ => Some("Showa Day"),
    };

    let mut holidays = vec![
        (ymd(year, 1, 1), "New Year's Day"),
        (coming_of_age_day(year), "Coming of Age Day"),
        (
            ymd(year, 2, 11).filter(|_| year >= 1967),
            "National Foundation Day",
        ),
        (emperors_birthday(year), "Emperor's Birthday"),
        (ymd(year, 3, equinox_day(20.8431, year)), "Vernal Equinox Day"),
        (ymd(year, 5, 3), "Constitution Memorial Day"),
        (ymd(year, 5, 4).filter(|_| year >= 2007), "Greenery Day"),
        (ymd(year, 5, 5), "Children's Day"),
        (marine_day(year), "Marine Day"),
        (mountain_day(year), "Mountain Day"),
        (respect_for_the_aged_day(year), "Respect for the Aged Day"),
        (ymd(year, 9, equinox_day(23.2488, year)), "Autumnal Equinox Day"),
        (sports_day(year), "Sports Day"),
        (ymd(year, 11, 3), "Culture Day"),
        (ymd(year, 11, 23), "Labor Thanksgiving Day"),
    ];
    if let Some(name) = april_29 {
        holidays.push((ymd(year, 4, 29), name));
    }
    holidays
}

fn national_holiday(date: NaiveDate) -> Option<&'static str> {
    if date.year() < 1949 {
        return None;
    }
    if imperial_ceremony(date) {
        return Some("Imperial Ceremony");
    }
    national_holidays(date.year())
        .into_iter()
        .find(|(day, _)| *day == Some(date))
        .map(|(_, name)| name)
}

/// A national holiday on a Sunday moves to the next day that is not
/// itself a holiday. Before 2007 it could only move to the Monday.
fn is_substitute_holiday(date: NaiveDate) -> bool {
    let Some(first) = ymd(1973, 4, 12) else {
        return false;
    };
    if date < first || national_holiday(date).is_some() {
        return false;
    }

    let mut previous = date.pred_opt();
    while let Some(day) = previous {
        if national_holiday(day).is_none() {
            return false;
        }
        if day.weekday() == Weekday::Sun {
            return true;
        }
        if date.year() < 2007 {
            return false;
        }
        previous = day.pred_opt();
    }
    false
}

/// A weekday squeezed between two national holidays is a holiday too.
fn is_citizens_holiday(date: NaiveDate) -> bool {
    if date.year() < 1986 || date.weekday() == Weekday::Sun || national_holiday(date).is_some() {
        return false;
    }
    let before = date.pred_opt().and_then(national_holiday);
    let after = date.succ_opt().and_then(national_holiday);
    before.is_some() && after.is_some()
}
