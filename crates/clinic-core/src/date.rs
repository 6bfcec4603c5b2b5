//! Calendar dates with the clinic's booking rules.
//!
//! `Date` is a plain (year, month, day) value. Construction never fails and
//! parsing checks token shape only — callers must check [`Date::is_valid`]
//! before treating a value as a calendar date, so malformed input flows
//! through as an invalid value instead of a crash.
//!
//! Predicates that are relative to "today" take the reference date as an
//! argument; the engine owns the clock and injects a fixed date in tests.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ParseDateError;

/// Dates before 1900 are not accepted anywhere in the system.
const MIN_YEAR: i32 = 1900;

/// The booking horizon: appointments may be at most this many calendar
/// months from today, inclusive.
const BOOKING_HORIZON_MONTHS: u32 = 6;

/// A calendar date. Ordered by (year, month, day); immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Date {
    year: i32,
    month: u32,
    day: u32,
}

impl Date {
    /// Builds a date from US-order components. No validation happens here;
    /// see [`Date::is_valid`].
    pub fn new(month: u32, day: u32, year: i32) -> Self {
        Self { year, month, day }
    }

    /// Today according to the local clock.
    pub fn today() -> Self {
        Self::from_naive(chrono::Local::now().date_naive())
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    /// True iff this is a real calendar date: year at least 1900, month
    /// 1-12, and day within the month accounting for leap years.
    pub fn is_valid(self) -> bool {
        if self.year < MIN_YEAR {
            return false;
        }
        if self.month < 1 || self.month > 12 {
            return false;
        }
        self.day >= 1 && self.day <= days_in_month(self.year, self.month)
    }

    /// Bridge to chrono for weekday and month arithmetic. `None` when the
    /// components do not name a real date.
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn is_today(self, today: Date) -> bool {
        self == today
    }

    pub fn is_past(self, today: Date) -> bool {
        self < today
    }

    /// True iff the date falls on a Saturday or Sunday. Non-calendar dates
    /// have no weekday and are never weekends.
    pub fn is_weekend(self) -> bool {
        match self.to_naive() {
            Some(date) => {
                let weekday = date.weekday();
                weekday == chrono::Weekday::Sat || weekday == chrono::Weekday::Sun
            }
            None => false,
        }
    }

    /// True iff the date is at most six calendar months after `today`,
    /// inclusive. Adding months clamps to the end of the target month, so
    /// e.g. six months from August 31 is the last day of February.
    pub fn is_within_six_months_of(self, today: Date) -> bool {
        let (Some(date), Some(today)) = (self.to_naive(), today.to_naive()) else {
            return false;
        };
        match today.checked_add_months(Months::new(BOOKING_HORIZON_MONTHS)) {
            Some(horizon) => date <= horizon,
            None => false,
        }
    }
}

impl fmt::Display for Date {
    /// `m/d/yyyy`, no zero padding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.year)
    }
}

impl FromStr for Date {
    type Err = ParseDateError;

    /// Parses `m/d/yyyy`. Shape only: out-of-range components such as
    /// `13/1/2025` parse successfully and fail [`Date::is_valid`] instead,
    /// so the caller reports one uniform not-a-calendar-date reason.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        let [month, day, year] = parts.as_slice() else {
            return Err(ParseDateError(s.to_string()));
        };
        let month: u32 = month.trim().parse().map_err(|_| ParseDateError(s.to_string()))?;
        let day: u32 = day.trim().parse().map_err(|_| ParseDateError(s.to_string()))?;
        let year: i32 = year.trim().parse().map_err(|_| ParseDateError(s.to_string()))?;
        Ok(Date::new(month, day, year))
    }
}

fn is_leap_year(year: i32) -> bool {
    if year % 4 != 0 {
        return false;
    }
    if year % 100 != 0 {
        return true;
    }
    year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}
