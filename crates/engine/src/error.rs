//! Error types for the engines

use thiserror::Error;

/// Timer control errors
///
/// Messages are user-facing and shown verbatim.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    #[error("Please set a timer duration")]
    ZeroDuration,

    #[error("Timer duration is too long")]
    TooLong,
}

pub type TimerResult<T> = std::result::Result<T, TimerError>;
