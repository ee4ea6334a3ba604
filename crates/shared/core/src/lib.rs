//! Horae Core Domain
//!
//! Pure domain types for the Horae clock widget.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod calendar;
pub mod display;
pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use calendar::{DayOfYear, days_in_year, is_leap_year};
pub use display::{
    DATE_PLACEHOLDER, ElapsedDigits, TIME_PLACEHOLDER, format_countdown, format_elapsed,
    format_wall_time, long_date, short_date,
};
pub use entities::{ClockPreferences, City, Meridiem, Tab, Theme, TimeFormat, ZoneSelection};
pub use values::{DurationField, DurationInput, Timestamp};
