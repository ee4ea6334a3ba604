//! Console render sink
//!
//! Keeps the latest text for every pane and redraws a single status line
//! for the active tab whenever it changes. Messages, laps and tab switches
//! are printed on their own lines.

use horae_core::{ElapsedDigits, Tab, Theme, TimeFormat};
use horae_ports::{CityView, ClockView, Controls, RenderSink};
use std::io::Write;

/// Erase the current terminal line and return to column 0
const CLEAR_LINE: &str = "\r\x1b[2K";

pub struct ConsoleSink<W: Write + Send> {
    out: W,
    active_tab: Tab,
    theme: Theme,
    clock: Option<ClockView>,
    cities: Vec<CityView>,
    stopwatch: ElapsedDigits,
    timer: String,
    status_line: String,
}

impl ConsoleSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            active_tab: Tab::default(),
            theme: Theme::default(),
            clock: None,
            cities: Vec::new(),
            stopwatch: ElapsedDigits::default(),
            timer: String::new(),
            status_line: String::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// The line currently shown for the active tab
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    fn compose_status(&self) -> String {
        match self.active_tab {
            Tab::Clock => match &self.clock {
                Some(view) => {
                    let meridiem = view.meridiem.map(|m| format!(" {}", m)).unwrap_or_default();
                    format!(
                        "{}{} | {} | {} | {}",
                        view.time, meridiem, view.date, view.zone_label, view.day_of_year
                    )
                }
                None => String::new(),
            },
            Tab::Stopwatch => self.stopwatch.to_string(),
            Tab::Timer => self.timer.clone(),
            Tab::World => self
                .cities
                .iter()
                .map(|c| format!("{} {} {}", c.name, c.time, c.date))
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }

    fn refresh(&mut self) {
        let line = self.compose_status();
        if line != self.status_line {
            self.status_line = line;
            let text = format!("{}{}", CLEAR_LINE, self.status_line);
            self.write(&text);
        }
    }

    /// Print on a fresh line, then redraw the status line below it
    fn announce(&mut self, text: &str) {
        self.write(&format!("{}{}\n", CLEAR_LINE, text));
        self.status_line.clear();
        self.refresh();
    }

    fn write(&mut self, text: &str) {
        if let Err(e) = self
            .out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush())
        {
            log::warn!("Console write failed: {}", e);
        }
    }
}

impl<W: Write + Send> RenderSink for ConsoleSink<W> {
    fn render_clock(&mut self, view: &ClockView) {
        self.clock = Some(view.clone());
        self.refresh();
    }

    fn render_world_clock(&mut self, cities: &[CityView]) {
        self.cities = cities.to_vec();
        self.refresh();
    }

    fn render_stopwatch(&mut self, digits: &ElapsedDigits) {
        self.stopwatch = *digits;
        self.refresh();
    }

    fn render_laps(&mut self, laps: &[String]) {
        match laps.first() {
            Some(newest) => self.announce(&format!("Lap {}: {}", laps.len(), newest)),
            None => log::debug!("Laps cleared"),
        }
    }

    fn render_timer(&mut self, display: &str) {
        self.timer = display.to_string();
        self.refresh();
    }

    fn set_stopwatch_controls(&mut self, controls: Controls) {
        log::debug!("Stopwatch controls: {:?}", controls);
    }

    fn set_timer_controls(&mut self, controls: Controls) {
        log::debug!("Timer controls: {:?}", controls);
    }

    fn set_active_tab(&mut self, tab: Tab) {
        if tab != self.active_tab {
            self.active_tab = tab;
            self.announce(&format!("[{}]", tab.as_str()));
        }
    }

    fn set_time_format(&mut self, format: TimeFormat) {
        log::debug!("Time format: {}h", format);
        self.refresh();
    }

    fn set_theme(&mut self, theme: Theme) {
        if theme != self.theme {
            self.theme = theme;
            self.announce(&format!("Theme: {}", theme.as_str()));
        }
    }

    fn show_message(&mut self, message: &str) {
        self.announce(&format!("*** {} ***", message));
    }
}
