//! The form model: field updates, completeness and submission.

use std::sync::Arc;

use chrono::NaiveDate;

use super::state::{FormState, UserData, UserDataErrors};
use crate::config::FormConfig;
use crate::field::FieldName;
use crate::notify::{Notification, Notifier};
use crate::store::{RecordStore, UserRecords};
use crate::validation;

type Clock = Box<dyn Fn() -> NaiveDate + Send + Sync>;

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The record was handed to storage and the form was reset.
    Success,
    /// At least one field is invalid; errors are now visible.
    Rejected,
}

impl SubmitOutcome {
    /// Returns `true` for [`SubmitOutcome::Success`].
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Registration form state plus its storage and notification collaborators.
///
/// Every edit goes through [`set_field`](Self::set_field), which re-validates
/// the edited field immediately, so the error map always reflects the latest
/// values. Errors are tracked from the first edit but only meant to be shown
/// once a submit has been rejected (see [`visible_error`](Self::visible_error)).
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use signup_lib::{FieldName, FormModel, InMemoryStore, SubmitOutcome};
/// use signup_lib::notify::NullNotifier;
///
/// let mut form = FormModel::new(Arc::new(InMemoryStore::new()), Arc::new(NullNotifier));
/// form.set_field(FieldName::Email, "bad");
///
/// assert_eq!(form.visible_error(FieldName::Email), None);
/// assert_eq!(form.submit(), SubmitOutcome::Rejected);
/// assert_eq!(form.visible_error(FieldName::Email), Some("invalid email"));
/// ```
pub struct FormModel {
    state: FormState,
    records: UserRecords,
    notifier: Arc<dyn Notifier>,
    config: FormConfig,
    clock: Clock,
}

impl FormModel {
    /// Create a pristine form persisting to `store` and notifying `notifier`.
    pub fn new(store: Arc<dyn RecordStore>, notifier: Arc<dyn Notifier>) -> Self {
        let config = FormConfig::default();
        Self {
            state: FormState::default(),
            records: UserRecords::with_key(store, config.storage_key.clone()),
            notifier,
            config,
            clock: Box::new(validation::today),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: FormConfig) -> Self {
        self.records = UserRecords::with_key(self.records.store(), config.storage_key.clone());
        self.config = config;
        self
    }

    /// Replace the source of "today" used for the age rule.
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDate + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Set a field's value and re-validate it.
    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) {
        let value = value.into();
        let error = validation::validate_on(name, &value, (self.clock)());
        log::debug!("field {} updated, valid: {}", name, error.is_empty());

        self.state.values.set(name, value);
        self.state.errors.set(name, error);
    }

    /// Set a field by its key.
    ///
    /// Unknown keys are ignored and leave the state untouched. Returns whether
    /// the key named a field.
    pub fn set_field_by_key(&mut self, key: &str, value: impl Into<String>) -> bool {
        match key.parse::<FieldName>() {
            Ok(name) => {
                self.set_field(name, value);
                true
            }
            Err(e) => {
                log::warn!("ignoring update: {}", e);
                false
            }
        }
    }

    /// Returns `true` if every field has a value.
    ///
    /// Front ends use this to enable the submit action.
    pub fn is_complete(&self) -> bool {
        self.state.values.is_complete()
    }

    /// Returns `true` if no field has an error.
    pub fn is_valid(&self) -> bool {
        self.state.errors.is_valid()
    }

    /// Try to register the current values.
    ///
    /// When every error is empty the values are stored, a success
    /// notification is sent and the form goes back to its pristine state.
    /// Otherwise errors become visible, an error notification is sent and
    /// values and errors are left as they are.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.is_valid() {
            log::info!(
                "submit rejected, invalid fields: {:?}",
                self.state.errors.invalid_fields()
            );
            self.state.errors_visible = true;
            self.notify(Notification::error(self.config.rejection_message.clone()));
            return SubmitOutcome::Rejected;
        }

        // Best-effort write: failures are logged only.
        if let Err(e) = self.records.save(&self.state.values) {
            log::error!("failed to store user record: {}", e);
        }
        log::info!("user registered under key '{}'", self.records.key());

        self.notify(Notification::success(self.config.success_message.clone()));
        self.reset();
        SubmitOutcome::Success
    }

    fn notify(&self, notification: Notification) {
        self.notifier
            .notify(notification.with_duration(self.config.notification_duration));
    }

    /// Return to the pristine state.
    pub fn reset(&mut self) {
        self.state = FormState::default();
    }

    /// Error to display for a field.
    ///
    /// `Some` only after a rejected submit and only when the field currently
    /// has an error.
    pub fn visible_error(&self, name: FieldName) -> Option<&str> {
        if !self.state.errors_visible {
            return None;
        }
        self.state.errors.get(name).filter(|error| !error.is_empty())
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn values(&self) -> &UserData {
        &self.state.values
    }

    pub fn errors(&self) -> &UserDataErrors {
        &self.state.errors
    }

    pub fn errors_visible(&self) -> bool {
        self.state.errors_visible
    }

    /// The stored record provider.
    pub fn records(&self) -> &UserRecords {
        &self.records
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }
}

impl std::fmt::Debug for FormModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormModel")
            .field("state", &self.state)
            .field("records", &self.records)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::notify::NotificationLevel;
    use crate::store::InMemoryStore;
    use crate::validation::{INVALID_EMAIL, NOT_ADULT, ZIP_CODE_TOO_SHORT};

    #[derive(Default)]
    struct Recorder(Mutex<Vec<Notification>>);

    impl Notifier for Recorder {
        fn notify(&self, notification: Notification) {
            self.0.lock().unwrap().push(notification);
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn form() -> (FormModel, Arc<InMemoryStore>, Arc<Recorder>) {
        let store = Arc::new(InMemoryStore::new());
        let notifier = Arc::new(Recorder::default());
        let form = FormModel::new(store.clone(), notifier.clone()).with_clock(today);
        (form, store, notifier)
    }

    fn fill_valid(form: &mut FormModel) {
        form.set_field(FieldName::FirstName, "Marie");
        form.set_field(FieldName::LastName, "Curie");
        form.set_field(FieldName::BirthDate, "1994-06-01");
        form.set_field(FieldName::City, "Paris");
        form.set_field(FieldName::Email, "m@x.fr");
        form.set_field(FieldName::ZipCode, "75001");
    }

    #[test]
    fn test_pristine_state() {
        let (form, _, _) = form();
        assert_eq!(form.state(), &FormState::default());
        assert!(!form.is_complete());
        assert!(form.is_valid());
        assert!(!form.errors_visible());
    }

    #[test]
    fn test_set_field_tracks_errors() {
        let (mut form, _, _) = form();
        form.set_field(FieldName::ZipCode, "7500");
        assert_eq!(form.values().zip_code, "7500");
        assert_eq!(form.errors().get(FieldName::ZipCode), Some(ZIP_CODE_TOO_SHORT));

        form.set_field(FieldName::ZipCode, "75001");
        assert_eq!(form.errors().get(FieldName::ZipCode), Some(""));
    }

    #[test]
    fn test_birth_date_uses_clock() {
        let (mut form, _, _) = form();
        form.set_field(FieldName::BirthDate, "2006-06-02");
        assert_eq!(form.errors().get(FieldName::BirthDate), Some(NOT_ADULT));
        form.set_field(FieldName::BirthDate, "2006-06-01");
        assert_eq!(form.errors().get(FieldName::BirthDate), Some(""));
        form.set_field(FieldName::BirthDate, "");
        assert_eq!(form.errors().get(FieldName::BirthDate), Some(NOT_ADULT));
    }

    #[test]
    fn test_city_has_no_error() {
        let (mut form, _, _) = form();
        form.set_field(FieldName::City, "12 ** !!");
        assert_eq!(form.values().city, "12 ** !!");
        assert_eq!(form.errors().get(FieldName::City), None);
        assert!(form.is_valid());
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let (mut form, _, _) = form();
        let before = form.state().clone();
        assert!(!form.set_field_by_key("phone", "0102030405"));
        assert_eq!(form.state(), &before);

        assert!(form.set_field_by_key("zipCode", "12a45"));
        assert_eq!(form.values().zip_code, "12a45");
    }

    #[test]
    fn test_rejected_submit_shows_errors() {
        let (mut form, store, notifier) = form();
        fill_valid(&mut form);
        form.set_field(FieldName::Email, "bad");
        let values = form.values().clone();

        assert_eq!(form.visible_error(FieldName::Email), None);
        assert_eq!(form.submit(), SubmitOutcome::Rejected);

        assert!(form.errors_visible());
        assert_eq!(form.values(), &values);
        assert_eq!(form.visible_error(FieldName::Email), Some(INVALID_EMAIL));
        assert_eq!(form.visible_error(FieldName::FirstName), None);
        assert!(store.is_empty());

        let sent = notifier.0.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].level, NotificationLevel::Error);
        assert_eq!(sent[0].message, form.config().rejection_message);
    }

    #[test]
    fn test_errors_stay_visible_until_success() {
        let (mut form, _, _) = form();
        fill_valid(&mut form);
        form.set_field(FieldName::Email, "bad");
        form.submit();

        form.set_field(FieldName::Email, "m@x.fr");
        assert!(form.errors_visible());
        assert_eq!(form.visible_error(FieldName::Email), None);

        form.set_field(FieldName::ZipCode, "7500");
        assert_eq!(form.visible_error(FieldName::ZipCode), Some(ZIP_CODE_TOO_SHORT));

        form.set_field(FieldName::ZipCode, "75001");
        assert_eq!(form.submit(), SubmitOutcome::Success);
        assert!(!form.errors_visible());
    }

    #[test]
    fn test_successful_submit_persists_and_resets() {
        let (mut form, _, notifier) = form();
        fill_valid(&mut form);
        let values = form.values().clone();

        assert_eq!(form.submit(), SubmitOutcome::Success);
        assert_eq!(form.state(), &FormState::default());
        assert_eq!(form.records().load().unwrap(), Some(values));

        let sent = notifier.0.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].level, NotificationLevel::Success);
    }

    #[test]
    fn test_config_is_applied() {
        let store = Arc::new(InMemoryStore::new());
        let notifier = Arc::new(Recorder::default());
        let config = FormConfig::default()
            .with_storage_key("registration")
            .with_notification_duration(std::time::Duration::from_secs(5))
            .with_success_message("welcome");
        let mut form = FormModel::new(store.clone(), notifier.clone())
            .with_config(config)
            .with_clock(today);

        fill_valid(&mut form);
        form.submit();

        assert!(store.get_item("registration").unwrap().is_some());
        assert!(store.get_item("user").unwrap().is_none());
        let sent = notifier.0.lock().unwrap();
        assert_eq!(sent[0].message, "welcome");
        assert_eq!(sent[0].duration, std::time::Duration::from_secs(5));
    }
}
