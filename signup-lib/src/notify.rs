use std::time::Duration;

use crate::config::DEFAULT_NOTIFICATION_DURATION;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationLevel {
    #[default]
    Success,
    Error,
}

/// A transient message for the user.
///
/// The form only requests notifications; showing them and dismissing them
/// after `duration` is up to the [`Notifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Text to display.
    pub message: String,
    /// Severity.
    pub level: NotificationLevel,
    /// How long to show the notification.
    pub duration: Duration,
}

impl Notification {
    /// Create a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Success,
            duration: DEFAULT_NOTIFICATION_DURATION,
        }
    }

    /// Create an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Error,
            duration: DEFAULT_NOTIFICATION_DURATION,
        }
    }

    /// Set a custom duration for this notification.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Receiver of form notifications.
pub trait Notifier: Send + Sync {
    /// Display a notification.
    fn notify(&self, notification: Notification);
}

/// Notifier that drops every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notification: Notification) {}
}
