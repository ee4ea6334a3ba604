//! Horae Clock Infrastructure
//!
//! Adapters for the `Clock` and `TimeFormatter` ports:
//!
//! ```text
//! Clock
//!     ├── SystemClock   (host wall clock, production)
//!     └── ManualClock   (frozen, advanced explicitly, tests)
//!
//! TimeFormatter
//!     └── TzFormatter   (IANA zones via chrono-tz, "local" via the host)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use horae_clock::{ManualClock, SystemClock, TzFormatter};
//! use chrono::Duration;
//!
//! let clock = ManualClock::at_epoch_millis(0);
//! clock.advance(Duration::seconds(5));
//!
//! let formatter = TzFormatter::new();
//! let text = formatter.format_short_date(clock.now(), &ZoneSelection::named("Asia/Tokyo"))?;
//! ```

mod manual;
mod system;
mod tz;

pub use manual::ManualClock;
pub use system::SystemClock;
pub use tz::TzFormatter;

// Re-export the ports for convenience
pub use horae_ports::{Clock, TimeFormatter};
