use horae_core::{ElapsedDigits, Tab, Theme, TimeFormat};

/// Main clock readout for one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockView {
    /// `hh:mm:ss` or the placeholder
    pub time: String,
    /// `AM`/`PM` in 12-hour mode, hidden otherwise
    pub meridiem: Option<&'static str>,
    pub date: String,
    pub zone_label: String,
    /// `Day N of M`
    pub day_of_year: String,
}

/// One world-clock entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityView {
    pub name: String,
    pub time: String,
    pub date: String,
}

/// Which control buttons are enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub start: bool,
    pub pause: bool,
    pub lap: bool,
}

impl Controls {
    /// Start enabled, everything else disabled
    pub fn stopped() -> Self {
        Self {
            start: true,
            pause: false,
            lap: false,
        }
    }

    /// Start disabled, pause (and lap, when supported) enabled
    pub fn running(with_lap: bool) -> Self {
        Self {
            start: false,
            pause: true,
            lap: with_lap,
        }
    }
}

/// Port for the rendering surface
///
/// Every call carries fully formatted text; the sink only places it.
pub trait RenderSink: Send {
    fn render_clock(&mut self, view: &ClockView);

    fn render_world_clock(&mut self, cities: &[CityView]);

    fn render_stopwatch(&mut self, digits: &ElapsedDigits);

    /// Full lap list, newest first
    fn render_laps(&mut self, laps: &[String]);

    fn render_timer(&mut self, display: &str);

    fn set_stopwatch_controls(&mut self, controls: Controls);

    fn set_timer_controls(&mut self, controls: Controls);

    fn set_active_tab(&mut self, tab: Tab);

    fn set_time_format(&mut self, format: TimeFormat);

    fn set_theme(&mut self, theme: Theme);

    /// Blocking user-facing message (validation failures, completion)
    fn show_message(&mut self, message: &str);
}
