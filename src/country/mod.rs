//! Country registry
//!
//! Verified ISO 3166-1 country references with lookups by alpha-2 code and
//! by exact country name.

mod iso3166;

use iso3166::COUNTRIES;
use serde::{Serialize, Serializer};
use std::fmt;

/// A country entry from the ISO 3166-1 registry.
///
/// Values only ever come out of the bundled registry, so two `Country`
/// values are equal exactly when they refer to the same registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Country {
    alpha_2: &'static str,
    alpha_3: &'static str,
    numeric: u16,
    name: &'static str,
    aliases: &'static [&'static str],
}

impl Country {
    const fn new(
        alpha_2: &'static str,
        alpha_3: &'static str,
        numeric: u16,
        name: &'static str,
        aliases: &'static [&'static str],
    ) -> Self {
        Self {
            alpha_2,
            alpha_3,
            numeric,
            name,
            aliases,
        }
    }

    /// Looks up a country by its two-letter code (e.g. `US`).
    ///
    /// The match is exact; lowercase codes are not accepted.
    pub fn from_alpha_2(code: &str) -> Option<Country> {
        COUNTRIES.iter().find(|c| c.alpha_2 == code).copied()
    }

    /// Looks up a country by its exact name (e.g. `United Kingdom`).
    ///
    /// Matches the ISO short name or one of the registered common names.
    pub fn from_name(name: &str) -> Option<Country> {
        COUNTRIES
            .iter()
            .find(|c| c.name == name || c.aliases.contains(&name))
            .copied()
    }

    /// Iterates over every registered country.
    pub fn all() -> impl Iterator<Item = Country> {
        COUNTRIES.iter().copied()
    }

    pub fn alpha_2(&self) -> &'static str {
        self.alpha_2
    }

    pub fn alpha_3(&self) -> &'static str {
        self.alpha_3
    }

    /// ISO 3166-1 numeric code.
    pub fn numeric(&self) -> u16 {
        self.numeric
    }

    /// ISO short name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.alpha_2)
    }
}

impl Serialize for Country {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.alpha_2)
    }
}
