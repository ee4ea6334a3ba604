//! Calendar helpers for the main clock's day-of-year readout

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Position of a date within its year, 1-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOfYear {
    pub day: u32,
    pub year_length: u32,
}

impl DayOfYear {
    /// Computed from the calendar date, so January 1 is always day 1
    /// regardless of any DST shift earlier in the year.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            day: date.ordinal(),
            year_length: days_in_year(date.year()),
        }
    }
}

impl fmt::Display for DayOfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {} of {}", self.day, self.year_length)
    }
}
