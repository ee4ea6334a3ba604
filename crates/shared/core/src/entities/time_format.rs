use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hour display convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    /// 12-hour clock with an AM/PM indicator
    #[default]
    #[serde(rename = "12")]
    Twelve,
    /// 24-hour clock, no indicator
    #[serde(rename = "24")]
    TwentyFour,
}

impl TimeFormat {
    /// Hour as it should be displayed (`hour` is 0-23)
    pub fn hour_label(&self, hour: u32) -> u32 {
        match self {
            TimeFormat::TwentyFour => hour,
            TimeFormat::Twelve => match hour % 12 {
                0 => 12,
                h => h,
            },
        }
    }

    /// AM/PM indicator, hidden in 24-hour mode
    pub fn meridiem(&self, hour: u32) -> Option<Meridiem> {
        match self {
            TimeFormat::TwentyFour => None,
            TimeFormat::Twelve => Some(Meridiem::from_hour(hour)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFormat::Twelve => "12",
            TimeFormat::TwentyFour => "24",
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "12" | "12h" => Ok(TimeFormat::Twelve),
            "24" | "24h" => Ok(TimeFormat::TwentyFour),
            other => Err(format!("unknown time format '{}'", other)),
        }
    }
}

/// Ante/post meridiem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn from_hour(hour: u32) -> Self {
        if hour >= 12 { Meridiem::Pm } else { Meridiem::Am }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
