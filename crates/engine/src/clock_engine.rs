//! Clock Engine - main clock and world-clock panel
//!
//! Every snapshot is a full recomputation from one clock reading:
//! - Main clock time, AM/PM, long date, zone label, day-of-year
//! - One time/date pair per configured city
//!
//! A zone that cannot be resolved only blanks its own fields.

use horae_core::{
    City, ClockPreferences, DATE_PLACEHOLDER, DayOfYear, TIME_PLACEHOLDER, TimeFormat, Timestamp,
    ZoneSelection,
};
use horae_ports::{CityView, Clock, ClockView, FormatResult, TimeFormatter};
use std::sync::Arc;

/// Everything the clock panes show for one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockSnapshot {
    pub clock: ClockView,
    pub cities: Vec<CityView>,
}

/// Formats the host clock for the main display and each world city
pub struct ClockEngine {
    clock: Arc<dyn Clock>,
    formatter: Arc<dyn TimeFormatter>,
    cities: Vec<City>,
}

impl ClockEngine {
    pub fn new(
        clock: Arc<dyn Clock>,
        formatter: Arc<dyn TimeFormatter>,
        cities: Vec<City>,
    ) -> Self {
        Self {
            clock,
            formatter,
            cities,
        }
    }

    /// New York, London, Tokyo, Sydney
    pub fn with_default_cities(clock: Arc<dyn Clock>, formatter: Arc<dyn TimeFormatter>) -> Self {
        Self::new(clock, formatter, City::defaults())
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Read the clock once and format both panes from that reading
    pub fn snapshot(&self, prefs: &ClockPreferences) -> ClockSnapshot {
        let now = self.clock.now();
        ClockSnapshot {
            clock: self.main_view(now, prefs),
            cities: self.city_views(now, prefs.time_format),
        }
    }

    /// Main clock for `now` under the given preferences
    pub fn main_view(&self, now: Timestamp, prefs: &ClockPreferences) -> ClockView {
        self.localize_main(now, prefs).unwrap_or_else(|e| {
            log::debug!("Main clock falls back to placeholders: {}", e);
            ClockView {
                time: TIME_PLACEHOLDER.to_string(),
                meridiem: None,
                date: DATE_PLACEHOLDER.to_string(),
                zone_label: prefs.timezone.label().to_string(),
                day_of_year: DATE_PLACEHOLDER.to_string(),
            }
        })
    }

    /// One entry per city, each formatted independently
    pub fn city_views(&self, now: Timestamp, format: TimeFormat) -> Vec<CityView> {
        self.cities
            .iter()
            .map(|city| self.city_view(now, city, format))
            .collect()
    }

    fn localize_main(&self, now: Timestamp, prefs: &ClockPreferences) -> FormatResult<ClockView> {
        let zone = &prefs.timezone;
        let hour = self.formatter.hour_of(now, zone)?;
        let local_date = self.formatter.to_local(now, zone)?.date();

        Ok(ClockView {
            time: self.formatter.format_time(now, zone, prefs.time_format)?,
            meridiem: prefs.time_format.meridiem(hour).map(|m| m.as_str()),
            date: self.formatter.format_date(now, zone)?,
            zone_label: zone.label().to_string(),
            day_of_year: DayOfYear::of(local_date).to_string(),
        })
    }

    fn localize_city(
        &self,
        now: Timestamp,
        zone: &ZoneSelection,
        format: TimeFormat,
    ) -> FormatResult<(String, String)> {
        let hour = self.formatter.hour_of(now, zone)?;
        let clock = self.formatter.format_time(now, zone, format)?;
        let time = match format.meridiem(hour) {
            Some(meridiem) => format!("{} {}", clock, meridiem),
            None => clock,
        };
        Ok((time, self.formatter.format_short_date(now, zone)?))
    }

    fn city_view(&self, now: Timestamp, city: &City, format: TimeFormat) -> CityView {
        let zone = ZoneSelection::named(city.timezone.as_str());

        match self.localize_city(now, &zone, format) {
            Ok((time, date)) => CityView {
                name: city.name.clone(),
                time,
                date,
            },
            Err(e) => {
                log::debug!("{} falls back to placeholders: {}", city.name, e);
                CityView {
                    name: city.name.clone(),
                    time: TIME_PLACEHOLDER.to_string(),
                    date: DATE_PLACEHOLDER.to_string(),
                }
            }
        }
    }
}
