//! Form field names

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownField;

/// One of the six fields of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    FirstName,
    LastName,
    BirthDate,
    City,
    Email,
    ZipCode,
}

impl FieldName {
    /// Every field, in display order.
    pub const ALL: [FieldName; 6] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::BirthDate,
        FieldName::City,
        FieldName::Email,
        FieldName::ZipCode,
    ];

    /// Fields that carry a validation rule (everything but `city`).
    pub const VALIDATED: [FieldName; 5] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::BirthDate,
        FieldName::ZipCode,
    ];

    /// Stable key used in the persisted record and by front ends.
    pub const fn key(self) -> &'static str {
        match self {
            FieldName::FirstName => "firstname",
            FieldName::LastName => "lastname",
            FieldName::BirthDate => "birthDate",
            FieldName::City => "city",
            FieldName::Email => "email",
            FieldName::ZipCode => "zipCode",
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            FieldName::FirstName => "First name",
            FieldName::LastName => "Last name",
            FieldName::BirthDate => "Birth date",
            FieldName::City => "City",
            FieldName::Email => "Email",
            FieldName::ZipCode => "Zip code",
        }
    }

    /// Returns `true` if a validation rule applies to this field.
    pub const fn is_validated(self) -> bool {
        !matches!(self, FieldName::City)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| UnknownField::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for field in FieldName::ALL {
            assert_eq!(field.key().parse::<FieldName>(), Ok(field));
        }
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            "birthdate".parse::<FieldName>(),
            Err(UnknownField::new("birthdate"))
        );
        assert!("".parse::<FieldName>().is_err());
    }

    #[test]
    fn test_city_is_not_validated() {
        assert!(!FieldName::City.is_validated());
        assert!(!FieldName::VALIDATED.contains(&FieldName::City));
        assert!(FieldName::VALIDATED.iter().all(|f| f.is_validated()));
    }
}
