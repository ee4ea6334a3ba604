use chrono::{Local, NaiveDateTime};
use chrono_tz::Tz;
use horae_core::{Timestamp, ZoneSelection};
use horae_ports::{FormatError, FormatResult, TimeFormatter};

/// `TimeFormatter` backed by the chrono-tz IANA database
///
/// `ZoneSelection::Local` resolves to the host's zone unless a fixed zone
/// was pinned with [`TzFormatter::with_local_zone`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TzFormatter {
    local_override: Option<Tz>,
}

impl TzFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat "local" as `zone` instead of the host setting
    pub fn with_local_zone(zone: Tz) -> Self {
        Self {
            local_override: Some(zone),
        }
    }

    /// Check an id against the database without formatting anything
    pub fn resolve(id: &str) -> FormatResult<Tz> {
        id.parse::<Tz>()
            .map_err(|_| FormatError::UnknownZone(id.to_string()))
    }
}

impl TimeFormatter for TzFormatter {
    fn to_local(&self, instant: Timestamp, zone: &ZoneSelection) -> FormatResult<NaiveDateTime> {
        match zone {
            ZoneSelection::Local => Ok(match self.local_override {
                Some(tz) => instant.with_timezone(&tz).naive_local(),
                None => instant.with_timezone(&Local).naive_local(),
            }),
            ZoneSelection::Named(id) => {
                let tz = Self::resolve(id)?;
                Ok(instant.with_timezone(&tz).naive_local())
            }
        }
    }

    fn name(&self) -> &str {
        "TzFormatter"
    }
}
