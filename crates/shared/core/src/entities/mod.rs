mod city;
mod preferences;
mod tab;
mod theme;
mod time_format;
mod zone;

pub use city::City;
pub use preferences::ClockPreferences;
pub use tab::Tab;
pub use theme::Theme;
pub use time_format::{Meridiem, TimeFormat};
pub use zone::ZoneSelection;
