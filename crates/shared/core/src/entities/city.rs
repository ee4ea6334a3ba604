use serde::{Deserialize, Serialize};

/// A world-clock entry bound to a fixed IANA timezone
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub timezone: String,
}

impl City {
    pub fn new(name: impl Into<String>, timezone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            timezone: timezone.into(),
        }
    }

    /// New York, London, Tokyo, Sydney
    pub fn defaults() -> Vec<City> {
        vec![
            City::new("New York", "America/New_York"),
            City::new("London", "Europe/London"),
            City::new("Tokyo", "Asia/Tokyo"),
            City::new("Sydney", "Australia/Sydney"),
        ]
    }
}
