//! Registration form engine
//!
//! Field validation rules and the form-state model behind a registration form
//! that collects a person's identity fields and persists a single record.

pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod notify;
pub mod store;
pub mod validation;

pub use config::FormConfig;
pub use field::FieldName;
pub use form::{FormModel, FormState, SubmitOutcome, UserData, UserDataErrors};
pub use notify::{Notification, NotificationLevel, Notifier};
pub use store::{InMemoryStore, RecordStore, SqliteStore, UserRecords};
