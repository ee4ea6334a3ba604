use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three timer duration fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationField {
    Hours,
    Minutes,
    Seconds,
}

impl FromStr for DurationField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "h" | "hours" => Ok(DurationField::Hours),
            "m" | "minutes" => Ok(DurationField::Minutes),
            "s" | "seconds" => Ok(DurationField::Seconds),
            other => Err(format!("unknown duration field '{}'", other)),
        }
    }
}

/// Requested countdown duration as entered by the user
///
/// Fields are independent and unbounded: `minutes = 90` is a valid
/// entry and simply contributes 5400 seconds to the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationInput {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl DurationInput {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Parse a raw field edit into a non-negative integer
    ///
    /// Leading digits are taken after optional whitespace and a `+` sign.
    /// Anything else (empty, negative, non-numeric, overflowing) is zero.
    pub fn parse_field(raw: &str) -> u32 {
        let trimmed = raw.trim_start();
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        unsigned[..end].parse().unwrap_or(0)
    }

    /// Apply a raw edit to a single field
    pub fn set_raw(&mut self, field: DurationField, raw: &str) {
        self.set(field, Self::parse_field(raw));
    }

    pub fn set(&mut self, field: DurationField, value: u32) {
        match field {
            DurationField::Hours => self.hours = value,
            DurationField::Minutes => self.minutes = value,
            DurationField::Seconds => self.seconds = value,
        }
    }

    /// Total requested seconds
    pub fn total_seconds(&self) -> i64 {
        i64::from(self.hours) * 3600 + i64::from(self.minutes) * 60 + i64::from(self.seconds)
    }

    pub fn total(&self) -> Duration {
        Duration::seconds(self.total_seconds())
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }

    /// Normalize a duration into whole hours/minutes/seconds (floored)
    ///
    /// Negative durations clamp to zero.
    pub fn from_duration(duration: Duration) -> Self {
        let secs = duration.num_seconds().max(0);
        let hours = u32::try_from(secs / 3600).unwrap_or(u32::MAX);
        Self {
            hours,
            minutes: ((secs % 3600) / 60) as u32,
            seconds: (secs % 60) as u32,
        }
    }
}

impl fmt::Display for DurationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}
