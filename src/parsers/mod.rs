//! Parsers for raw TVMaze records.
//!
//! Each parser takes one upstream JSON record shape and produces a typed,
//! validated value. Parsers are pure: no state is kept between calls and the
//! only side effect is diagnostic `tracing` output.

mod character;
mod country;
mod datetime;
mod episode;
mod links;
mod network;
mod person;
mod record;
mod season;
mod updates;

pub use character::{Character, parse_character};
pub use country::{CountryInfo, parse_country};
pub use episode::{Episode, EpisodeOrder, parse_episode};
pub use links::{ImageUrls, parse_images, parse_link};
pub use network::{Network, WebChannel, parse_network, parse_web_channel};
pub use person::{Person, parse_person};
pub use season::{Season, parse_season};
pub use updates::{UpdatesMap, parse_updates};

use crate::country::Country;
use thiserror::Error;

/// Errors that can occur while parsing a TVMaze record.
///
/// Any error aborts the parse of the whole record; no partial results are
/// produced.
#[derive(Debug, Error)]
pub enum MazeParseError {
    /// A required key is absent from the record
    #[error("Missing field: {field}")]
    MissingField { field: String },

    /// A key is present but holds the wrong kind of JSON value
    #[error("Field {field} has an invalid type, expected {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },

    /// A date, time or datetime string does not match its fixed format
    #[error("Field {field} has an invalid date format: {value:?} ({source})")]
    DateFormat {
        field: String,
        value: String,
        source: chrono::ParseError,
    },

    /// The country code and country name resolve to different countries
    #[error("Country is ambiguous: {} != {}", display_country(.by_code), display_country(.by_name))]
    AmbiguousCountry {
        by_code: Option<Country>,
        by_name: Option<Country>,
    },

    /// Neither the country code nor the country name is known
    #[error("Unknown country: code {code:?}, name {name:?}")]
    UnknownCountry { code: String, name: String },

    /// The timezone name is not in the IANA database
    #[error("Unknown timezone: {name:?}")]
    UnknownTimezone { name: String },

    /// The gender string matches no gender name
    #[error("Unknown gender: {value:?}")]
    UnknownGender { value: String },

    /// An update key is not an integer id
    #[error("Invalid id: {key:?}")]
    InvalidId { key: String },

    /// An epoch timestamp is outside the representable range
    #[error("Invalid timestamp for id {id}: {timestamp}")]
    InvalidTimestamp { id: u32, timestamp: i64 },

    /// A runtime in minutes is outside the representable range
    #[error("Invalid runtime: {minutes} minutes")]
    InvalidRuntime { minutes: i64 },
}

fn display_country(country: &Option<Country>) -> String {
    match country {
        Some(country) => country.to_string(),
        None => "unresolved".to_string(),
    }
}
