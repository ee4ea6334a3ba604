//! Text formatting shared by the clock, stopwatch and timer displays

use chrono::{Duration, NaiveDate};
use std::fmt;

use crate::entities::TimeFormat;

/// Shown in place of a time that could not be resolved
pub const TIME_PLACEHOLDER: &str = "--:--:--";

/// Shown in place of a date that could not be resolved
pub const DATE_PLACEHOLDER: &str = "--";

const MS_PER_HOUR: i64 = 60 * 60 * 1000;
const MS_PER_MINUTE: i64 = 60 * 1000;

/// Stopwatch digit groups, each rendered zero-padded to two places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElapsedDigits {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub centiseconds: i64,
}

impl ElapsedDigits {
    /// Split a duration into digit groups, flooring each; negative is zero
    pub fn from_duration(elapsed: Duration) -> Self {
        let ms = elapsed.num_milliseconds().max(0);
        Self {
            hours: ms / MS_PER_HOUR,
            minutes: (ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (ms % MS_PER_MINUTE) / 1000,
            centiseconds: (ms % 1000) / 10,
        }
    }
}

/// `HH:MM:SS.cc`
impl fmt::Display for ElapsedDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:02}",
            self.hours, self.minutes, self.seconds, self.centiseconds
        )
    }
}

/// `HH:MM:SS.cc`
pub fn format_elapsed(elapsed: Duration) -> String {
    ElapsedDigits::from_duration(elapsed).to_string()
}

/// `HH:MM:SS`, floored to whole seconds and never negative
pub fn format_countdown(remaining: Duration) -> String {
    let d = ElapsedDigits::from_duration(remaining);
    format!("{:02}:{:02}:{:02}", d.hours, d.minutes, d.seconds)
}

/// Wall-clock `hh:mm:ss` in the given convention, without AM/PM
pub fn format_wall_time(hour: u32, minute: u32, second: u32, format: TimeFormat) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        format.hour_label(hour),
        minute,
        second
    )
}

/// e.g. `Sunday, October 18, 2026`
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// e.g. `Oct 18`
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}
