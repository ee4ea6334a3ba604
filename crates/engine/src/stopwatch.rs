//! Stopwatch - counts up from zero, pausable, records laps
//!
//! While running, elapsed is always `now - start_ref`; `start_ref` is
//! shifted back by the accumulated time on every resume so pausing never
//! loses or double-counts time.

use chrono::Duration;
use horae_core::{ElapsedDigits, Timestamp, format_elapsed};
use horae_ports::Clock;
use std::collections::VecDeque;
use std::sync::Arc;

/// Stopwatch lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopwatchStatus {
    /// Nothing recorded
    #[default]
    Idle,
    /// Counting
    Running,
    /// Frozen at the accumulated value
    Paused,
}

pub struct Stopwatch {
    clock: Arc<dyn Clock>,
    status: StopwatchStatus,
    /// Effective start, already adjusted for prior accumulation
    start_ref: Timestamp,
    /// Authoritative while not running
    accumulated: Duration,
    /// Newest first
    laps: VecDeque<Duration>,
}

impl Stopwatch {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let start_ref = clock.now();
        Self {
            clock,
            status: StopwatchStatus::Idle,
            start_ref,
            accumulated: Duration::zero(),
            laps: VecDeque::new(),
        }
    }

    pub fn status(&self) -> StopwatchStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == StopwatchStatus::Running
    }

    /// Idle/Paused -> Running. Returns false if already running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.start_ref = self.clock.now() - self.accumulated;
        self.status = StopwatchStatus::Running;
        log::debug!("Stopwatch started at {}", format_elapsed(self.accumulated));
        true
    }

    /// Running -> Paused. Returns false if not running.
    pub fn pause(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.accumulated = self.clock.now() - self.start_ref;
        self.status = StopwatchStatus::Paused;
        log::debug!("Stopwatch paused at {}", format_elapsed(self.accumulated));
        true
    }

    /// Any state -> Idle, clearing elapsed time and laps
    pub fn reset(&mut self) {
        self.status = StopwatchStatus::Idle;
        self.accumulated = Duration::zero();
        self.laps.clear();
        log::debug!("Stopwatch reset");
    }

    /// Record the current elapsed time as the newest lap
    ///
    /// Only valid while running; returns `None` otherwise.
    pub fn lap(&mut self) -> Option<Duration> {
        if !self.is_running() {
            return None;
        }
        let elapsed = self.clock.now() - self.start_ref;
        self.laps.push_front(elapsed);
        Some(elapsed)
    }

    /// Recompute elapsed time (call on every periodic tick)
    pub fn tick(&mut self) -> Duration {
        if self.is_running() {
            self.accumulated = self.clock.now() - self.start_ref;
        }
        self.accumulated
    }

    pub fn elapsed(&self) -> Duration {
        if self.is_running() {
            self.clock.now() - self.start_ref
        } else {
            self.accumulated
        }
    }

    pub fn digits(&self) -> ElapsedDigits {
        ElapsedDigits::from_duration(self.elapsed())
    }

    /// Recorded laps, newest first
    pub fn laps(&self) -> &VecDeque<Duration> {
        &self.laps
    }

    /// Laps as `HH:MM:SS.cc`, newest first
    pub fn formatted_laps(&self) -> Vec<String> {
        self.laps.iter().map(|lap| format_elapsed(*lap)).collect()
    }
}
