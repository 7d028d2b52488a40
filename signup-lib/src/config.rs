//! Form configuration

use std::time::Duration;

/// Key under which the registered user record is stored.
pub const DEFAULT_STORAGE_KEY: &str = "user";

/// How long notifications stay visible by default.
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(2000);

pub const DEFAULT_SUCCESS_MESSAGE: &str = "user registered successfully";
pub const DEFAULT_REJECTION_MESSAGE: &str = "the fields are not valid";

/// Configuration for a [`FormModel`](crate::FormModel).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use signup_lib::FormConfig;
///
/// let config = FormConfig::default()
///     .with_storage_key("registration")
///     .with_notification_duration(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Storage key for the persisted record.
    ///
    /// Default: `user`
    pub storage_key: String,

    /// Display duration handed to the notifier.
    ///
    /// Default: 2 seconds
    pub notification_duration: Duration,

    /// Message shown after a successful submit.
    pub success_message: String,

    /// Message shown after a rejected submit.
    pub rejection_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            notification_duration: DEFAULT_NOTIFICATION_DURATION,
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            rejection_message: DEFAULT_REJECTION_MESSAGE.to_string(),
        }
    }
}

impl FormConfig {
    /// Creates a new form config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets the notification duration.
    pub fn with_notification_duration(mut self, duration: Duration) -> Self {
        self.notification_duration = duration;
        self
    }

    /// Sets the success message.
    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = message.into();
        self
    }

    /// Sets the rejection message.
    pub fn with_rejection_message(mut self, message: impl Into<String>) -> Self {
        self.rejection_message = message.into();
        self
    }
}
