//! Error types

/// Error returned by the age computation when its input is unusable.
///
/// The form never lets these reach the user; the birth date rule maps both
/// variants to the regular "must be at least 18" message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgeError {
    /// No date was given.
    #[error("missing required date")]
    MissingDate,

    /// The value is not a `YYYY-MM-DD` calendar date.
    #[error("invalid date '{value}'")]
    InvalidDate { value: String },
}

impl AgeError {
    /// Creates a new invalid date error.
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
        }
    }
}

/// Error returned when parsing a field key that is not part of the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field '{key}'")]
pub struct UnknownField {
    /// The key that was rejected.
    pub key: String,
}

impl UnknownField {
    /// Creates a new unknown field error.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Error type for record storage.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("store lock poisoned")]
    Lock,
}
