use thiserror::Error;

/// Failure to localize an instant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Unknown timezone: {0}")]
    UnknownZone(String),
}

pub type FormatResult<T> = std::result::Result<T, FormatError>;

/// Failure to deliver a user notification
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("Notification permission not granted")]
    PermissionDenied,

    #[error("Notifications not supported on this host")]
    Unsupported,

    #[error("Notification delivery failed: {0}")]
    Delivery(String),
}

pub type NotifyResult<T> = std::result::Result<T, NotifyError>;
