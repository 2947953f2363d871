//! Holiday definitions and observed-date calculation.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// How a holiday's date is determined within a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    /// Same month and day every year. With `shift_weekends`, a Saturday
    /// holiday is observed on the preceding Friday and a Sunday holiday on
    /// the following Monday.
    FixedDate {
        month: u32,
        day: u32,
        shift_weekends: bool,
    },
    /// The `nth` occurrence of `weekday` in `month`. Never shifted.
    NthWeekday {
        month: u32,
        weekday: Weekday,
        nth: u8,
    },
}

impl HolidayRule {
    /// Date on which the holiday is observed in `year`.
    ///
    /// Returns `None` only if the year lies outside the supported calendar range.
    pub fn observed_date(&self, year: i32) -> Option<NaiveDate> {
        match *self {
            HolidayRule::FixedDate {
                month,
                day,
                shift_weekends,
            } => {
                let nominal = NaiveDate::from_ymd_opt(year, month, day)?;
                if !shift_weekends {
                    return Some(nominal);
                }
                match nominal.weekday() {
                    Weekday::Sat => nominal.pred_opt(),
                    Weekday::Sun => nominal.succ_opt(),
                    _ => Some(nominal),
                }
            }
            HolidayRule::NthWeekday {
                month,
                weekday,
                nth,
            } => NaiveDate::from_weekday_of_month_opt(year, month, weekday, nth),
        }
    }
}

/// Holidays recognized by the rental billing calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Holiday {
    /// July 4th, moved to the nearest weekday when it falls on a weekend
    IndependenceDay,
    /// First Monday in September
    LaborDay,
}

impl Holiday {
    pub const ALL: [Holiday; 2] = [Holiday::IndependenceDay, Holiday::LaborDay];

    pub fn description(&self) -> &'static str {
        match self {
            Holiday::IndependenceDay => "Independence Day",
            Holiday::LaborDay => "Labor Day",
        }
    }

    pub fn rule(&self) -> HolidayRule {
        match self {
            Holiday::IndependenceDay => HolidayRule::FixedDate {
                month: 7,
                day: 4,
                shift_weekends: true,
            },
            Holiday::LaborDay => HolidayRule::NthWeekday {
                month: 9,
                weekday: Weekday::Mon,
                nth: 1,
            },
        }
    }

    /// Date on which this holiday is observed in `year`.
    pub fn observed_date(&self, year: i32) -> Option<NaiveDate> {
        self.rule().observed_date(year)
    }

    /// The soonest observed occurrence of this holiday on or after `from`.
    ///
    /// Only this year's and next year's occurrences are ever considered.
    pub fn next_observed(&self, from: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.observed_date(from.year())?;
        if from <= this_year {
            Some(this_year)
        } else {
            self.observed_date(from.year() + 1)
        }
    }
}
