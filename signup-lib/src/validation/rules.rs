//! Built-in field rules.
//!
//! Every rule returns `None` when the value is valid and the error message
//! otherwise.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::age;

pub const INVALID_FIRST_NAME: &str = "invalid first name";
pub const INVALID_LAST_NAME: &str = "invalid last name";
pub const INVALID_EMAIL: &str = "invalid email";
pub const ZIP_CODE_NOT_DIGITS: &str = "zip code must not contain letters";
pub const ZIP_CODE_TOO_SHORT: &str = "zip code must contain at least 5 digits";
pub const ZIP_CODE_TOO_LONG: &str = "zip code must contain at most 5 digits";
pub const NOT_ADULT: &str = "must be at least 18 years old";

/// Required length of a zip code, in digits.
pub const ZIP_CODE_LENGTH: usize = 5;

/// Latin letters including the Latin-1 accented range, hyphen and space.
pub const NAME_PATTERN: &str = r"^[A-Za-zÀ-ÖØ-öø-ÿ\- ]+$";

/// Letters, dots and hyphens, `@`, letters, `.`, then a 2-4 letter lowercase suffix.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z\.\-]+@[a-zA-Z]+\.[a-z]{2,4}$";

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NAME_PATTERN).expect("Invalid name pattern"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("Invalid email pattern"));

/// Returns `true` if the value is an acceptable first or last name.
pub fn is_valid_name(value: &str) -> bool {
    NAME_RE.is_match(value)
}

/// Returns `true` if the value is an acceptable email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Composite zip code rule.
///
/// Checks run in order and the first failure wins: digits only, then minimum
/// length, then maximum length. The empty string fails the digits check.
pub fn zip_code_error(value: &str) -> Option<&'static str> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        Some(ZIP_CODE_NOT_DIGITS)
    } else if value.len() < ZIP_CODE_LENGTH {
        Some(ZIP_CODE_TOO_SHORT)
    } else if value.len() > ZIP_CODE_LENGTH {
        Some(ZIP_CODE_TOO_LONG)
    } else {
        None
    }
}

pub(crate) fn first_name(value: &str, _today: NaiveDate) -> Option<&'static str> {
    (!is_valid_name(value)).then_some(INVALID_FIRST_NAME)
}

pub(crate) fn last_name(value: &str, _today: NaiveDate) -> Option<&'static str> {
    (!is_valid_name(value)).then_some(INVALID_LAST_NAME)
}

pub(crate) fn email(value: &str, _today: NaiveDate) -> Option<&'static str> {
    (!is_valid_email(value)).then_some(INVALID_EMAIL)
}

pub(crate) fn zip_code(value: &str, _today: NaiveDate) -> Option<&'static str> {
    zip_code_error(value)
}

/// Empty and unparsable dates count as not adult.
pub(crate) fn birth_date(value: &str, today: NaiveDate) -> Option<&'static str> {
    match age::is_adult(value, today) {
        Ok(true) => None,
        Ok(false) | Err(_) => Some(NOT_ADULT),
    }
}
