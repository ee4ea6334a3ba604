use chrono::{DateTime, Utc};

mod duration_input;

pub use duration_input::{DurationField, DurationInput};

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;
