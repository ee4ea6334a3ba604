use chrono::{NaiveDateTime, Timelike};
use horae_core::{TimeFormat, Timestamp, ZoneSelection, format_wall_time, long_date, short_date};

use crate::error::FormatResult;

/// Port for locale/timezone formatting
///
/// Implementations only have to resolve a zone and produce the local
/// wall-clock reading; the text layouts are provided on top of that.
pub trait TimeFormatter: Send + Sync {
    /// Wall-clock reading of `instant` in `zone`
    fn to_local(&self, instant: Timestamp, zone: &ZoneSelection) -> FormatResult<NaiveDateTime>;

    /// `hh:mm:ss` in the requested convention, without AM/PM
    fn format_time(
        &self,
        instant: Timestamp,
        zone: &ZoneSelection,
        format: TimeFormat,
    ) -> FormatResult<String> {
        let local = self.to_local(instant, zone)?;
        Ok(format_wall_time(
            local.hour(),
            local.minute(),
            local.second(),
            format,
        ))
    }

    /// e.g. `Sunday, October 18, 2026`
    fn format_date(&self, instant: Timestamp, zone: &ZoneSelection) -> FormatResult<String> {
        let local = self.to_local(instant, zone)?;
        Ok(long_date(local.date()))
    }

    /// e.g. `Oct 18`
    fn format_short_date(&self, instant: Timestamp, zone: &ZoneSelection) -> FormatResult<String> {
        let local = self.to_local(instant, zone)?;
        Ok(short_date(local.date()))
    }

    /// Hour of day (0-23) in `zone`, for the AM/PM indicator
    fn hour_of(&self, instant: Timestamp, zone: &ZoneSelection) -> FormatResult<u32> {
        Ok(self.to_local(instant, zone)?.hour())
    }

    /// Get the formatter's name/identifier for debugging
    fn name(&self) -> &str {
        "TimeFormatter"
    }
}
