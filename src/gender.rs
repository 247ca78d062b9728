//! Gender classification used by person records.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Gender of a person as reported by TVMaze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// All variants, in declaration order.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// The canonical member name (`MALE`, `FEMALE`).
    pub fn name(self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gender.{}", self.name())
    }
}

/// Returned when a string matches no [`Gender`] member name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown gender: {0:?}")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    /// Case-insensitive exact match against the member names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|gender| gender.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownGender(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_from_str_ignores_case() {
        assert_eq!("Male".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("FEMALE".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!("female".parse::<Gender>(), Ok(Gender::Female));
    }

    #[test]
    fn test_gender_from_str_rejects_unknown() {
        assert_eq!(
            "Unknown".parse::<Gender>(),
            Err(UnknownGender("Unknown".to_string()))
        );
        assert!("".parse::<Gender>().is_err());
        assert!(" male".parse::<Gender>().is_err());
    }

    #[test]
    fn test_gender_display_contains_name() {
        for gender in Gender::ALL {
            assert!(gender.to_string().contains(gender.name()));
        }
    }

    #[test]
    fn test_gender_serializes_as_name() {
        assert_eq!(serde_json::to_value(Gender::Male).unwrap(), "MALE");
        assert_eq!(serde_json::to_value(Gender::Female).unwrap(), "FEMALE");
    }
}
