//! Scheduler - cancellable periodic ticks
//!
//! Each running engine owns a `TickHandle`. The handle's task pushes
//! generation-tagged `Tick`s into the controller's channel; dropping the
//! handle aborts the task. Ticks already queued when a handle is dropped
//! carry a generation nobody holds any more, so the controller discards
//! them instead of acting on stale state.

use std::time::Duration;
use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Capacity of the shared tick channel
const TICK_CHANNEL_CAPACITY: usize = 256;

/// Which engine a tick is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSource {
    Clock,
    Stopwatch,
    Timer,
}

/// One firing of a periodic task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub source: TickSource,
    pub generation: u64,
}

/// Registration for one periodic task; aborts the task when dropped
#[derive(Debug)]
pub struct TickHandle {
    source: TickSource,
    generation: u64,
    task: JoinHandle<()>,
}

impl TickHandle {
    pub fn source(&self) -> TickSource {
        self.source
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether `tick` was produced by this registration
    pub fn accepts(&self, tick: &Tick) -> bool {
        tick.source == self.source && tick.generation == self.generation
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawns periodic tick tasks feeding a single channel
pub struct TickScheduler {
    tx: Sender<Tick>,
    next_generation: u64,
}

impl TickScheduler {
    /// Create a scheduler and the receiver its ticks arrive on
    pub fn new() -> (Self, Receiver<Tick>) {
        let (tx, rx) = mpsc::channel(TICK_CHANNEL_CAPACITY);
        (
            Self {
                tx,
                next_generation: 0,
            },
            rx,
        )
    }

    /// Register a task that ticks every `period`, first firing one period
    /// from now. Must be called inside a tokio runtime.
    pub fn start(&mut self, source: TickSource, period: Duration) -> TickHandle {
        self.next_generation += 1;
        let generation = self.next_generation;
        let tx = self.tx.clone();

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately; callers render on start
            interval.tick().await;

            loop {
                interval.tick().await;
                if tx.send(Tick { source, generation }).await.is_err() {
                    break;
                }
            }
        });

        log::debug!(
            "Registered {:?} ticks every {:?} (generation {})",
            source,
            period,
            generation
        );

        TickHandle {
            source,
            generation,
            task,
        }
    }
}
