//! Age computation from a birth date.

use chrono::{Datelike, NaiveDate};

use crate::error::AgeError;

/// Minimum age, in whole years, to register.
pub const ADULT_AGE: i32 = 18;

/// Date format produced by HTML date inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` birth date.
pub fn parse_date(date: &str) -> Result<NaiveDate, AgeError> {
    if date.is_empty() {
        return Err(AgeError::MissingDate);
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| AgeError::invalid_date(date))
}

/// Age in whole years on `today` of someone born on `date`.
///
/// The naive year difference is reduced by one when today's month/day falls
/// before the birth month/day. A birth date in the future yields a negative
/// age.
pub fn calculate_age(date: &str, today: NaiveDate) -> Result<i32, AgeError> {
    let birth = parse_date(date)?;
    Ok(age_between(birth, today))
}

/// Returns `true` if someone born on `date` is at least [`ADULT_AGE`] on `today`.
pub fn is_adult(date: &str, today: NaiveDate) -> Result<bool, AgeError> {
    Ok(calculate_age(date, today)? >= ADULT_AGE)
}

fn age_between(birth: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years - 1
    } else {
        years
    }
}
