//! Field validation for the registration form.
//!
//! Each validated field maps to one pure rule. A rule returns `None` for a
//! valid value and an error message otherwise; [`validate`] flattens that to
//! the form's convention where the empty string means "no error".
//!
//! # Example
//!
//! ```
//! use signup_lib::FieldName;
//! use signup_lib::validation::validate;
//!
//! assert_eq!(validate(FieldName::ZipCode, "75001"), "");
//! assert_eq!(validate(FieldName::ZipCode, "750"), "zip code must contain at least 5 digits");
//! assert_eq!(validate(FieldName::City, "anything at all"), "");
//! ```

mod age;
mod rules;

pub use age::{ADULT_AGE, DATE_FORMAT, calculate_age, is_adult, parse_date};
pub use rules::{
    EMAIL_PATTERN, INVALID_EMAIL, INVALID_FIRST_NAME, INVALID_LAST_NAME, NAME_PATTERN, NOT_ADULT,
    ZIP_CODE_LENGTH, ZIP_CODE_NOT_DIGITS, ZIP_CODE_TOO_LONG, ZIP_CODE_TOO_SHORT, is_valid_email,
    is_valid_name, zip_code_error,
};

use chrono::{Local, NaiveDate};

use crate::field::FieldName;

/// A validation rule: value and current date in, error message out.
pub type Rule = fn(&str, NaiveDate) -> Option<&'static str>;

/// Look up the rule for a field. `city` has none.
pub fn rule_for(field: FieldName) -> Option<Rule> {
    match field {
        FieldName::FirstName => Some(rules::first_name as Rule),
        FieldName::LastName => Some(rules::last_name as Rule),
        FieldName::Email => Some(rules::email as Rule),
        FieldName::BirthDate => Some(rules::birth_date as Rule),
        FieldName::ZipCode => Some(rules::zip_code as Rule),
        FieldName::City => None,
    }
}

/// Validate a value as of `today`. Returns an empty string when valid.
pub fn validate_on(field: FieldName, value: &str, today: NaiveDate) -> String {
    rule_for(field)
        .and_then(|rule| rule(value, today))
        .map(str::to_string)
        .unwrap_or_default()
}

/// Validate a value as of the local current date.
pub fn validate(field: FieldName, value: &str) -> String {
    validate_on(field, value, today())
}

/// Local current date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_every_validated_field_has_a_rule() {
        for field in FieldName::ALL {
            assert_eq!(rule_for(field).is_some(), field.is_validated(), "{field}");
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(validate_on(FieldName::FirstName, "Marie", june_first()), "");
        assert_eq!(
            validate_on(FieldName::FirstName, "Marie2", june_first()),
            INVALID_FIRST_NAME
        );
        assert_eq!(
            validate_on(FieldName::LastName, "Curie!", june_first()),
            INVALID_LAST_NAME
        );
    }

    #[test]
    fn test_empty_values() {
        let today = june_first();
        assert_eq!(validate_on(FieldName::FirstName, "", today), INVALID_FIRST_NAME);
        assert_eq!(validate_on(FieldName::LastName, "", today), INVALID_LAST_NAME);
        assert_eq!(validate_on(FieldName::Email, "", today), INVALID_EMAIL);
        assert_eq!(validate_on(FieldName::BirthDate, "", today), NOT_ADULT);
        assert_eq!(validate_on(FieldName::ZipCode, "", today), ZIP_CODE_NOT_DIGITS);
        assert_eq!(validate_on(FieldName::City, "", today), "");
    }

    #[test]
    fn test_birth_date_boundary() {
        let today = june_first();
        assert_eq!(validate_on(FieldName::BirthDate, "2006-06-01", today), "");
        assert_eq!(validate_on(FieldName::BirthDate, "2006-06-02", today), NOT_ADULT);
    }

    #[test]
    fn test_validate_uses_current_date() {
        assert_eq!(validate(FieldName::BirthDate, "1900-01-01"), "");
        assert_eq!(validate(FieldName::BirthDate, "9999-12-31"), NOT_ADULT);
    }
}
