//! Horae Engines
//!
//! The two independent halves of the widget:
//!
//! - **Clock Engine**: re-derives the main clock and the world-clock panel
//!   from a single clock reading per tick. Stateless between ticks.
//! - **Elapsed-Time Engine**: the stopwatch (counts up, pausable, laps) and
//!   the countdown timer (counts down, completes exactly once).
//!
//! Engines never schedule anything themselves. The owner calls `tick`
//! whenever its periodic task fires and renders what comes back.

pub mod clock_engine;
pub mod error;
pub mod stopwatch;
pub mod timer;

pub use clock_engine::{ClockEngine, ClockSnapshot};
pub use error::{TimerError, TimerResult};
pub use stopwatch::{Stopwatch, StopwatchStatus};
pub use timer::{CountdownTimer, TimerStatus, TimerTick};
