//! Configuration loading for the widget
//!
//! Supports a JSON file with:
//! - Tick intervals per engine
//! - Initial display preferences (format, timezone, theme)
//! - World-clock cities
//!
//! Environment variables `HORAE_TIMEZONE` and `HORAE_TIME_FORMAT` override
//! the file.

use horae_core::{City, ClockPreferences, TimeFormat, ZoneSelection};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const ENV_TIMEZONE: &str = "HORAE_TIMEZONE";
pub const ENV_TIME_FORMAT: &str = "HORAE_TIME_FORMAT";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Root configuration for the widget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Main and world clock refresh period
    #[serde(default = "default_clock_interval_ms")]
    pub clock_interval_ms: u64,

    /// Stopwatch refresh period
    #[serde(default = "default_stopwatch_interval_ms")]
    pub stopwatch_interval_ms: u64,

    /// Countdown refresh period
    #[serde(default = "default_timer_interval_ms")]
    pub timer_interval_ms: u64,

    /// Initial preferences (`time_format`, `timezone`, `theme`)
    #[serde(flatten)]
    pub preferences: ClockPreferences,

    /// World-clock panel entries
    #[serde(default = "City::defaults")]
    pub cities: Vec<City>,
}

fn default_clock_interval_ms() -> u64 {
    1000
}

fn default_stopwatch_interval_ms() -> u64 {
    10
}

fn default_timer_interval_ms() -> u64 {
    100
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            clock_interval_ms: default_clock_interval_ms(),
            stopwatch_interval_ms: default_stopwatch_interval_ms(),
            timer_interval_ms: default_timer_interval_ms(),
            preferences: ClockPreferences::default(),
            cities: City::defaults(),
        }
    }
}

impl WidgetConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `HORAE_*` overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(zone) = lookup(ENV_TIMEZONE) {
            self.preferences.timezone = ZoneSelection::parse(&zone);
        }
        if let Some(format) = lookup(ENV_TIME_FORMAT) {
            self.preferences.time_format = format
                .parse::<TimeFormat>()
                .map_err(|e| ConfigError::Invalid(format!("{}: {}", ENV_TIME_FORMAT, e)))?;
        }
        Ok(self)
    }

    /// Intervals must be positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("clock_interval_ms", self.clock_interval_ms),
            ("stopwatch_interval_ms", self.stopwatch_interval_ms),
            ("timer_interval_ms", self.timer_interval_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{} must be > 0", name)));
            }
        }
        Ok(())
    }

    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms)
    }

    pub fn stopwatch_interval(&self) -> Duration {
        Duration::from_millis(self.stopwatch_interval_ms)
    }

    pub fn timer_interval(&self) -> Duration {
        Duration::from_millis(self.timer_interval_ms)
    }
}
