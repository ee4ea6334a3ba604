use serde::{Deserialize, Serialize};

use super::{Theme, TimeFormat, ZoneSelection};

/// User-selected display preferences
///
/// Defaults to 12-hour, local timezone, light theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockPreferences {
    #[serde(default)]
    pub time_format: TimeFormat,
    #[serde(default)]
    pub timezone: ZoneSelection,
    #[serde(default)]
    pub theme: Theme,
}
