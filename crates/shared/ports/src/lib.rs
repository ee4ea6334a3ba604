//! Horae Ports
//!
//! Port definitions (traits) for the Horae clock widget.
//! These define the boundaries between the engines and the host:
//! where time comes from, how it is localized, where output goes.

mod clock;
mod error;
mod formatter;
mod notify;
mod render;

pub use clock::Clock;
pub use error::{FormatError, FormatResult, NotifyError, NotifyResult};
pub use formatter::TimeFormatter;
pub use notify::{Notification, Notifier};
pub use render::{CityView, ClockView, Controls, RenderSink};
