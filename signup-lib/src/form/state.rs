//! Form values, errors and visibility state.

use serde::{Deserialize, Serialize};

use crate::field::FieldName;

/// Values entered by the user, one string per field.
///
/// Every field is always present; an unset field is the empty string.
/// Serializes to a flat JSON object keyed by [`FieldName::key`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserData {
    pub firstname: String,
    pub lastname: String,
    pub birth_date: String,
    pub city: String,
    pub email: String,
    pub zip_code: String,
}

impl UserData {
    /// Value of a field.
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.firstname,
            FieldName::LastName => &self.lastname,
            FieldName::BirthDate => &self.birth_date,
            FieldName::City => &self.city,
            FieldName::Email => &self.email,
            FieldName::ZipCode => &self.zip_code,
        }
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::FirstName => &mut self.firstname,
            FieldName::LastName => &mut self.lastname,
            FieldName::BirthDate => &mut self.birth_date,
            FieldName::City => &mut self.city,
            FieldName::Email => &mut self.email,
            FieldName::ZipCode => &mut self.zip_code,
        };
        *slot = value.into();
    }

    /// All fields with their values, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        FieldName::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Returns `true` if every field is non-empty.
    pub fn is_complete(&self) -> bool {
        is_complete(self)
    }
}

/// Current error message per validated field. Empty means no error.
///
/// `city` has no slot. Only the form model writes errors, always right after
/// writing the matching value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDataErrors {
    firstname: String,
    lastname: String,
    email: String,
    birth_date: String,
    zip_code: String,
}

impl UserDataErrors {
    /// Error of a field, `None` for fields without a rule.
    pub fn get(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::FirstName => Some(&self.firstname),
            FieldName::LastName => Some(&self.lastname),
            FieldName::Email => Some(&self.email),
            FieldName::BirthDate => Some(&self.birth_date),
            FieldName::ZipCode => Some(&self.zip_code),
            FieldName::City => None,
        }
    }

    /// Record the error of a field. Ignored for fields without a rule.
    pub(crate) fn set(&mut self, field: FieldName, error: String) {
        let slot = match field {
            FieldName::FirstName => &mut self.firstname,
            FieldName::LastName => &mut self.lastname,
            FieldName::Email => &mut self.email,
            FieldName::BirthDate => &mut self.birth_date,
            FieldName::ZipCode => &mut self.zip_code,
            FieldName::City => return,
        };
        *slot = error;
    }

    /// Every validated field with its error.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        FieldName::VALIDATED
            .into_iter()
            .filter_map(move |field| self.get(field).map(|error| (field, error)))
    }

    /// Fields that currently have an error.
    pub fn invalid_fields(&self) -> Vec<FieldName> {
        self.iter()
            .filter(|(_, error)| !error.is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    /// Returns `true` if no field has an error.
    pub fn is_valid(&self) -> bool {
        is_valid(self.iter().map(|(_, error)| error))
    }
}

/// Returns `true` if every error message is empty.
///
/// Works on any collection of messages, e.g. `map.values().map(String::as_str)`.
pub fn is_valid<'a>(errors: impl IntoIterator<Item = &'a str>) -> bool {
    errors.into_iter().all(str::is_empty)
}

/// Returns `true` if all six values are non-empty.
pub fn is_complete(values: &UserData) -> bool {
    values.iter().all(|(_, value)| !value.is_empty())
}

/// Complete state of one in-progress form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub values: UserData,
    pub errors: UserDataErrors,
    /// Set by a rejected submit, cleared by the reset after a successful one.
    pub errors_visible: bool,
}
