use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Widget panes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Clock,
    Stopwatch,
    Timer,
    World,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Clock, Tab::Stopwatch, Tab::Timer, Tab::World];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Clock => "clock",
            Tab::Stopwatch => "stopwatch",
            Tab::Timer => "timer",
            Tab::World => "world",
        }
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown tab '{}'", s.trim()))
    }
}
