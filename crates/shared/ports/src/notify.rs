use crate::error::NotifyResult;

/// User-facing notification request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Sent when a countdown reaches zero
    pub fn timer_complete() -> Self {
        Self::new("Timer Complete!", "Your timer has finished")
    }
}

/// Port for out-of-band user notifications
///
/// Delivery is best effort: callers log failures and carry on.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification) -> NotifyResult<()>;

    fn name(&self) -> &str {
        "Notifier"
    }
}
