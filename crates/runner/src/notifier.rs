//! Notification adapters
//!
//! The terminal has no notification permission model, so completion
//! notices go to the log. `SilentNotifier` stands in for a host without
//! any notification support.

use horae_ports::{Notification, Notifier, NotifyError, NotifyResult};

/// Writes notifications to the log at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) -> NotifyResult<()> {
        log::info!("{} {}", notification.title, notification.body);
        Ok(())
    }

    fn name(&self) -> &str {
        "LogNotifier"
    }
}

/// Host without notification support
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _notification: &Notification) -> NotifyResult<()> {
        Err(NotifyError::Unsupported)
    }

    fn name(&self) -> &str {
        "SilentNotifier"
    }
}
