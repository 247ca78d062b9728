//! Image and hyperlink extraction.

use super::MazeParseError;
use super::record::Record;
use serde::Serialize;
use serde_json::Value;

/// The pair of image URLs TVMaze attaches to most entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageUrls {
    pub medium_image_url: String,
    pub original_image_url: String,
}

/// Parses a TVMaze `image` object.
///
/// The URLs are passed through as given.
pub fn parse_images(data: &Value) -> Result<ImageUrls, MazeParseError> {
    images(&Record::new(data)?)
}

/// Returns the `href` of the link called `key` in a TVMaze `_links` object.
pub fn parse_link(data: &Value, key: &str) -> Result<String, MazeParseError> {
    link(&Record::new(data)?, key)
}

pub(super) fn images(record: &Record<'_>) -> Result<ImageUrls, MazeParseError> {
    Ok(ImageUrls {
        medium_image_url: record.str("medium")?.to_string(),
        original_image_url: record.str("original")?.to_string(),
    })
}

pub(super) fn link(record: &Record<'_>, key: &str) -> Result<String, MazeParseError> {
    Ok(record.record(key)?.str("href")?.to_string())
}

/// The link and image fields shared by people, characters, episodes and
/// seasons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct EntityLinks {
    pub web_url: String,
    pub api_url: String,
    pub images: ImageUrls,
}

impl EntityLinks {
    pub fn parse(record: &Record<'_>) -> Result<Self, MazeParseError> {
        Ok(Self {
            web_url: record.str("url")?.to_string(),
            api_url: link(&record.record("_links")?, "self")?,
            images: images(&record.record("image")?)?,
        })
    }
}
