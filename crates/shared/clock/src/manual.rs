use chrono::{DateTime, Duration, Utc};
use horae_core::Timestamp;
use horae_ports::Clock;
use parking_lot::RwLock;
use std::sync::Arc;

/// Frozen clock that only moves when told to
///
/// Shared through an `Arc` so a test can hold one handle while the engine
/// under test reads through another.
pub struct ManualClock {
    current: RwLock<Timestamp>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Arc<Self> {
        Arc::new(Self {
            current: RwLock::new(start),
        })
    }

    /// Start at a Unix epoch offset; out-of-range values start at the epoch
    pub fn at_epoch_millis(millis: i64) -> Arc<Self> {
        Self::new(DateTime::from_timestamp_millis(millis).unwrap_or_default())
    }

    /// Start at the current wall time
    pub fn starting_now() -> Arc<Self> {
        Self::new(Utc::now())
    }

    /// Move time forward (or backward, for a negative duration)
    pub fn advance(&self, by: Duration) {
        let mut current = self.current.write();
        *current += by;
    }

    pub fn advance_millis(&self, millis: i64) {
        self.advance(Duration::milliseconds(millis));
    }

    /// Jump to an arbitrary instant
    pub fn set(&self, to: Timestamp) {
        *self.current.write() = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.current.read()
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frozen_until_advanced() {
        let clock = ManualClock::at_epoch_millis(1_000);
        let t1 = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(clock.now(), t1);

        clock.advance(Duration::seconds(5));
        assert_eq!(clock.now() - t1, Duration::seconds(5));

        clock.advance_millis(-500);
        assert_eq!(clock.now() - t1, Duration::milliseconds(4_500));
    }

    #[test]
    fn test_set_jumps() {
        let clock = ManualClock::at_epoch_millis(0);
        let target = DateTime::from_timestamp_millis(86_400_000).unwrap();
        clock.set(target);
        assert_eq!(clock.now(), target);
    }
}
