use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::constants::REPORT_DATE_FORMAT;

/// Iterates every calendar day from `start` to `end`, both inclusive.
///
/// Yields nothing when `start > end`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

/// Returns `date` moved forward by `days`, or `None` past the end of the calendar.
pub fn add_days(date: NaiveDate, days: u64) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(days))
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Formats a date the way rental reports print it (MM/DD/YY).
pub fn format_report_date(date: NaiveDate) -> String {
    date.format(REPORT_DATE_FORMAT).to_string()
}
