//! Input - discrete user events and their console syntax
//!
//! ```text
//! format 12|24            tz <zone>|local        theme
//! tab clock|stopwatch|timer|world
//! sw start|pause|reset|lap
//! timer start|pause|reset
//! timer hours|minutes|seconds <value>
//! quit
//! ```

use horae_core::{DurationField, Tab, TimeFormat, ZoneSelection};
use std::str::FromStr;
use thiserror::Error;

/// Everything a user can do to the widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    SetTimeFormat(TimeFormat),
    SetTimezone(ZoneSelection),
    ToggleTheme,
    SelectTab(Tab),

    StopwatchStart,
    StopwatchPause,
    StopwatchReset,
    StopwatchLap,

    /// Raw edit of one duration field, parsed leniently by the timer
    TimerField(DurationField, String),
    TimerStart,
    TimerPause,
    TimerReset,

    Quit,
}

/// Console command errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl FromStr for InputEvent {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or(InputError::Empty)?.to_ascii_lowercase();

        match command.as_str() {
            "format" => {
                let arg = words.next().ok_or(InputError::MissingArgument("12|24"))?;
                arg.parse()
                    .map(InputEvent::SetTimeFormat)
                    .map_err(InputError::InvalidArgument)
            }
            "tz" | "timezone" => {
                let arg = words
                    .next()
                    .ok_or(InputError::MissingArgument("timezone id or 'local'"))?;
                Ok(InputEvent::SetTimezone(ZoneSelection::parse(arg)))
            }
            "theme" => Ok(InputEvent::ToggleTheme),
            "tab" => {
                let arg = words.next().ok_or(InputError::MissingArgument("tab name"))?;
                arg.parse()
                    .map(InputEvent::SelectTab)
                    .map_err(InputError::InvalidArgument)
            }
            "sw" | "stopwatch" => {
                let action = words
                    .next()
                    .ok_or(InputError::MissingArgument("start|pause|reset|lap"))?;
                match action.to_ascii_lowercase().as_str() {
                    "start" => Ok(InputEvent::StopwatchStart),
                    "pause" => Ok(InputEvent::StopwatchPause),
                    "reset" => Ok(InputEvent::StopwatchReset),
                    "lap" => Ok(InputEvent::StopwatchLap),
                    other => Err(InputError::InvalidArgument(other.to_string())),
                }
            }
            "timer" => {
                let action = words
                    .next()
                    .ok_or(InputError::MissingArgument("start|pause|reset|<field>"))?;
                match action.to_ascii_lowercase().as_str() {
                    "start" => Ok(InputEvent::TimerStart),
                    "pause" => Ok(InputEvent::TimerPause),
                    "reset" => Ok(InputEvent::TimerReset),
                    field => {
                        let field: DurationField =
                            field.parse().map_err(InputError::InvalidArgument)?;
                        // A missing value is an emptied field
                        let raw = words.next().unwrap_or_default();
                        Ok(InputEvent::TimerField(field, raw.to_string()))
                    }
                }
            }
            "quit" | "exit" => Ok(InputEvent::Quit),
            _ => Err(InputError::Unknown(command)),
        }
    }
}
