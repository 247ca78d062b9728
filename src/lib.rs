//! maze_records - Normalize raw TVMaze API records
//!
//! This library turns the loosely-typed JSON records returned by the TVMaze
//! API into validated, strongly-typed values: people, characters, episodes,
//! seasons, networks, web channels and update timestamps. Country data is
//! resolved against the ISO 3166-1 registry and timezones against the IANA
//! database.
//!
//! Fetching the records is left to the caller; every parser takes an already
//! decoded [`serde_json::Value`].
//!
//! # Examples
//!
//! ```
//! use maze_records::parse_updates;
//! use serde_json::json;
//!
//! let updates = parse_updates(&json!({"1": 1562326291})).unwrap();
//! assert_eq!(updates[&1].timestamp(), 1562326291);
//! ```

mod country;
mod gender;
mod parsers;

pub use country::Country;
pub use gender::{Gender, UnknownGender};

// Re-export error types
pub use parsers::MazeParseError;

// Re-export parsed record types
pub use parsers::{
    Character, CountryInfo, Episode, EpisodeOrder, ImageUrls, Network, Person, Season,
    UpdatesMap, WebChannel,
};

// Re-export parsers
pub use parsers::{
    parse_character, parse_country, parse_episode, parse_images, parse_link, parse_network,
    parse_person, parse_season, parse_updates, parse_web_channel,
};
