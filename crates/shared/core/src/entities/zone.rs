use serde::{Deserialize, Serialize};
use std::fmt;

/// Timezone chosen for the main clock
///
/// `Local` follows the host's configured zone; `Named` carries an IANA id
/// that is resolved lazily, so an unknown id is representable and only
/// fails at formatting time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ZoneSelection {
    #[default]
    Local,
    Named(String),
}

impl ZoneSelection {
    /// `"local"` (any case) or an empty string select the host zone
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            ZoneSelection::Local
        } else {
            ZoneSelection::Named(trimmed.to_string())
        }
    }

    pub fn named(id: impl Into<String>) -> Self {
        ZoneSelection::Named(id.into())
    }

    /// Text shown next to the main clock
    pub fn label(&self) -> &str {
        match self {
            ZoneSelection::Local => "Local Time",
            ZoneSelection::Named(id) => id,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, ZoneSelection::Local)
    }
}

impl From<String> for ZoneSelection {
    fn from(raw: String) -> Self {
        ZoneSelection::parse(&raw)
    }
}

impl From<ZoneSelection> for String {
    fn from(zone: ZoneSelection) -> Self {
        match zone {
            ZoneSelection::Local => "local".to_string(),
            ZoneSelection::Named(id) => id,
        }
    }
}

impl fmt::Display for ZoneSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneSelection::Local => f.write_str("local"),
            ZoneSelection::Named(id) => f.write_str(id),
        }
    }
}
