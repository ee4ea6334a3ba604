//! Countdown timer - counts down to zero and completes exactly once
//!
//! Remaining time is always derived as `end_ref - now`, never decremented,
//! so a late tick can only shorten the display, not drift it.

use chrono::Duration;
use horae_core::{DurationField, DurationInput, Timestamp, format_countdown};
use horae_ports::Clock;
use std::sync::Arc;

use crate::error::{TimerError, TimerResult};

/// Timer lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerStatus {
    /// Showing the requested duration
    #[default]
    Idle,
    /// Counting down
    Running,
    /// Reached zero
    Completed,
}

/// Outcome of a periodic tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTick {
    /// Not running; nothing to recompute
    Idle,
    /// Still counting down
    Remaining(Duration),
    /// Just reached zero. Emitted once per run.
    Completed,
}

pub struct CountdownTimer {
    clock: Arc<dyn Clock>,
    status: TimerStatus,
    input: DurationInput,
    end_ref: Timestamp,
    /// Last value computed by a tick (never negative)
    remaining: Duration,
}

impl CountdownTimer {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let end_ref = clock.now();
        Self {
            clock,
            status: TimerStatus::Idle,
            input: DurationInput::default(),
            end_ref,
            remaining: Duration::zero(),
        }
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    pub fn input(&self) -> DurationInput {
        self.input
    }

    /// Apply a raw field edit; invalid text becomes zero
    ///
    /// Inputs are locked while running, so an edit then is dropped and
    /// `false` is returned. Editing a completed timer returns it to idle so
    /// the display follows the inputs again.
    pub fn set_input(&mut self, field: DurationField, raw: &str) -> bool {
        if self.is_running() {
            log::debug!("Ignoring {:?} edit while running", field);
            return false;
        }
        self.input.set_raw(field, raw);
        self.status = TimerStatus::Idle;
        true
    }

    pub fn set_duration(&mut self, input: DurationInput) -> bool {
        if self.is_running() {
            return false;
        }
        self.input = input;
        self.status = TimerStatus::Idle;
        true
    }

    /// Idle/Completed -> Running
    ///
    /// Returns `Ok(false)` if already running. A zero duration, or one whose
    /// end lies past the representable range, is rejected and leaves the
    /// state untouched.
    pub fn start(&mut self) -> TimerResult<bool> {
        if self.is_running() {
            return Ok(false);
        }
        if self.input.is_zero() {
            return Err(TimerError::ZeroDuration);
        }

        let duration = self.input.total();
        self.end_ref = self
            .clock
            .now()
            .checked_add_signed(duration)
            .ok_or(TimerError::TooLong)?;
        self.remaining = duration;
        self.status = TimerStatus::Running;
        log::debug!("Timer started for {}", self.input);
        Ok(true)
    }

    /// Running -> Idle
    ///
    /// The requested duration becomes the last displayed remaining time, so
    /// a later `start` resumes from there at whole-second precision. The
    /// clock is not read again.
    pub fn pause(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.input = DurationInput::from_duration(self.remaining);
        self.status = TimerStatus::Idle;
        log::debug!("Timer paused with {} left", self.input);
        true
    }

    /// Any state -> Idle with all inputs cleared
    pub fn reset(&mut self) {
        self.status = TimerStatus::Idle;
        self.input = DurationInput::default();
        self.remaining = Duration::zero();
        log::debug!("Timer reset");
    }

    /// Recompute remaining time (call on every periodic tick)
    pub fn tick(&mut self) -> TimerTick {
        if !self.is_running() {
            return TimerTick::Idle;
        }

        let remaining = self.end_ref - self.clock.now();
        if remaining <= Duration::zero() {
            self.remaining = Duration::zero();
            self.status = TimerStatus::Completed;
            log::info!("Timer complete");
            TimerTick::Completed
        } else {
            self.remaining = remaining;
            TimerTick::Remaining(remaining)
        }
    }

    /// Last computed remaining time
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// `HH:MM:SS` as it should be shown right now
    pub fn display(&self) -> String {
        match self.status {
            TimerStatus::Running => format_countdown(self.remaining),
            TimerStatus::Completed => format_countdown(Duration::zero()),
            TimerStatus::Idle => self.input.to_string(),
        }
    }
}
