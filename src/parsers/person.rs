//! Person records (cast and crew).

use super::country::{CountryInfo, country_field};
use super::links::{EntityLinks, ImageUrls};
use super::record::Record;
use super::{MazeParseError, datetime};
use crate::gender::Gender;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

/// A person as listed by TVMaze.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub maze_id: u32,
    pub name: String,
    #[serde(flatten)]
    pub location: CountryInfo,
    pub birth: NaiveDate,
    /// `None` while the person is alive
    pub death: Option<NaiveDate>,
    pub gender: Gender,
    pub web_url: String,
    pub api_url: String,
    #[serde(flatten)]
    pub images: ImageUrls,
}

/// Parses a TVMaze person.
///
/// `birthday` is required; `deathday` may be `null` or empty. `gender` is
/// matched case-insensitively against the [`Gender`] names.
pub fn parse_person(data: &Value) -> Result<Person, MazeParseError> {
    let record = Record::new(data)?;

    let birth = datetime::date(&record, "birthday")?;
    let death = datetime::optional_date(&record, "deathday")?;

    let gender = record
        .str("gender")?
        .parse::<Gender>()
        .map_err(|e| MazeParseError::UnknownGender { value: e.0 })?;

    let location = country_field(&record)?;
    let links = EntityLinks::parse(&record)?;

    Ok(Person {
        maze_id: record.u32("id")?,
        name: record.str("name")?.to_string(),
        location,
        birth,
        death,
        gender,
        web_url: links.web_url,
        api_url: links.api_url,
        images: links.images,
    })
}
