use horae_core::Timestamp;
use horae_ports::Clock;
use chrono::Utc;

/// Host wall clock
///
/// Every call reads the system time afresh; nothing is cached between ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
