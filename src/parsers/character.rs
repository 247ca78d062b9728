//! Character records.

use super::MazeParseError;
use super::links::{EntityLinks, ImageUrls};
use super::record::Record;
use serde::Serialize;
use serde_json::Value;

/// A character played in a show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    pub maze_id: u32,
    pub name: String,
    pub web_url: String,
    pub api_url: String,
    #[serde(flatten)]
    pub images: ImageUrls,
}

/// Parses a TVMaze character.
pub fn parse_character(data: &Value) -> Result<Character, MazeParseError> {
    let record = Record::new(data)?;
    let links = EntityLinks::parse(&record)?;

    Ok(Character {
        maze_id: record.u32("id")?,
        name: record.str("name")?.to_string(),
        web_url: links.web_url,
        api_url: links.api_url,
        images: links.images,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn barbie() -> Value {
        json!({
            "_links": {
                "self": {
                    "href": "http://api.tvmaze.com/characters/1",
                },
            },
            "id": 1,
            "image": {
                "medium": "http://static.tvmaze.com/uploads/images/medium_portrait/0/3.jpg",
                "original": "http://static.tvmaze.com/uploads/images/original_untouched/0/3.jpg",
            },
            "name": "Dale \"Barbie\" Barbara",
            "url": "http://www.tvmaze.com/characters/1/under-the-dome-dale-barbie-barbara",
        })
    }

    #[test]
    fn test_parse_character() {
        let parsed = parse_character(&barbie()).unwrap();

        assert_eq!(parsed.maze_id, 1);
        assert_eq!(parsed.name, "Dale \"Barbie\" Barbara");
        assert_eq!(
            parsed.web_url,
            "http://www.tvmaze.com/characters/1/under-the-dome-dale-barbie-barbara"
        );
        assert_eq!(parsed.api_url, "http://api.tvmaze.com/characters/1");
        assert_eq!(
            parsed.images.original_image_url,
            "http://static.tvmaze.com/uploads/images/original_untouched/0/3.jpg"
        );
    }

    #[test]
    fn test_character_keys() {
        let serialized = serde_json::to_value(parse_character(&barbie()).unwrap()).unwrap();
        let mut keys: Vec<&str> = serialized
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            [
                "api_url",
                "maze_id",
                "medium_image_url",
                "name",
                "original_image_url",
                "web_url",
            ]
        );
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let mut data = barbie();
        data["updated"] = json!(1_562_326_291);
        assert_eq!(
            parse_character(&data).unwrap(),
            parse_character(&barbie()).unwrap()
        );
    }

    #[test]
    fn test_missing_image() {
        let mut data = barbie();
        data.as_object_mut().unwrap().remove("image");
        match parse_character(&data) {
            Err(MazeParseError::MissingField { field }) => assert_eq!(field, "image"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
