//! Business-days command implementation.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::{
    count_business_days, is_weekend, japanese_holiday_name, CalendarSet, FixedHolidays,
    JapaneseHolidays,
};
use crate::cli::{BusinessDaysArgs, CalendarChoice};
use crate::error::Result;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BusinessDaysOutput {
    start: String,
    end: String,
    business_days: u32,
    holidays: Vec<SkippedHoliday>,
}

/// A weekday in the range that was not counted.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct SkippedHoliday {
    date: String,
    name: &'static str,
}

fn calendar_for(args: &BusinessDaysArgs) -> CalendarSet {
    let calendar = CalendarSet::default().with(FixedHolidays::new(args.holidays.iter().copied()));
    match args.calendar {
        CalendarChoice::Jp => calendar.with(JapaneseHolidays),
        CalendarChoice::None => calendar,
    }
}

fn holiday_name(args: &BusinessDaysArgs, date: NaiveDate) -> Option<&'static str> {
    let national = match args.calendar {
        CalendarChoice::Jp => japanese_holiday_name(date),
        CalendarChoice::None => None,
    };
    national.or_else(|| args.holidays.contains(&date).then_some("Holiday"))
}

fn skipped_holidays(args: &BusinessDaysArgs) -> Vec<SkippedHoliday> {
    args.start
        .iter_days()
        .take_while(|date| *date <= args.end)
        .filter(|date| !is_weekend(*date))
        .filter_map(|date| {
            holiday_name(args, date).map(|name| SkippedHoliday {
                date: date.to_string(),
                name,
            })
        })
        .collect()
}

/// Execute the business-days command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(args: &BusinessDaysArgs, json: bool) -> Result<()> {
    let days = count_business_days(args.start, args.end, &calendar_for(args));

    if json {
        let output = BusinessDaysOutput {
            start: args.start.to_string(),
            end: args.end.to_string(),
            business_days: days,
            holidays: skipped_holidays(args),
        };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("{days}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(calendar: CalendarChoice, holidays: Vec<NaiveDate>) -> BusinessDaysArgs {
        BusinessDaysArgs {
            start: NaiveDate::from_ymd_opt(2024, 4, 29).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
            calendar,
            holidays,
        }
    }

    fn count(args: &BusinessDaysArgs) -> u32 {
        count_business_days(args.start, args.end, &calendar_for(args))
    }

    fn skipped(date: &str, name: &'static str) -> SkippedHoliday {
        SkippedHoliday {
            date: date.to_string(),
            name,
        }
    }

    #[test]
    fn test_japanese_calendar() {
        assert_eq!(count(&args(CalendarChoice::Jp, vec![])), 3);
    }

    #[test]
    fn test_weekends_only() {
        assert_eq!(count(&args(CalendarChoice::None, vec![])), 6);
        assert!(skipped_holidays(&args(CalendarChoice::None, vec![])).is_empty());
    }

    #[test]
    fn test_extra_holidays() {
        let extra = vec![NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()];
        assert_eq!(count(&args(CalendarChoice::None, extra.clone())), 5);
        assert_eq!(count(&args(CalendarChoice::Jp, extra)), 2);
    }

    #[test]
    fn test_skipped_holidays_are_named() {
        let extra = vec![NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()];
        assert_eq!(
            skipped_holidays(&args(CalendarChoice::Jp, extra)),
            vec![
                skipped("2024-04-29", "Showa Day"),
                skipped("2024-05-01", "Holiday"),
                skipped("2024-05-03", "Constitution Memorial Day"),
                skipped("2024-05-06", "Substitute Holiday"),
            ]
        );
    }

    #[test]
    fn test_skipped_holidays_match_count() {
        let args = args(CalendarChoice::Jp, vec![]);
        let weekdays = args
            .start
            .iter_days()
            .take_while(|d| *d <= args.end)
            .filter(|d| !is_weekend(*d))
            .count();
        assert_eq!(weekdays - skipped_holidays(&args).len(), count(&args) as usize);
    }
}
