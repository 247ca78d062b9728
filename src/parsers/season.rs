//! Season records.

use super::links::{EntityLinks, ImageUrls};
use super::network::{Network, WebChannel, network_record};
use super::record::Record;
use super::{MazeParseError, datetime};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

/// A season of a show, with the network or web channel that aired it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Season {
    pub maze_id: u32,
    /// Season title; usually empty
    pub title: String,
    pub season_number: u32,
    pub episodes_ordered: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// HTML summary; `None` when TVMaze has none, `Some("")` when it is blank
    pub summary: Option<String>,
    pub network: Option<Network>,
    pub web_channel: Option<WebChannel>,
    pub web_url: String,
    pub api_url: String,
    #[serde(flatten)]
    pub images: ImageUrls,
}

impl Season {
    /// The summary with its HTML markup rendered as plain text.
    ///
    /// Empty when the season has no summary.
    pub fn summary_text(&self) -> String {
        self.summary
            .as_deref()
            .map(|summary| nanohtml2text::html2text(summary).trim().to_string())
            .unwrap_or_default()
    }
}

/// Parses a TVMaze season.
///
/// `network` and `webChannel` are each optional and parsed independently.
pub fn parse_season(data: &Value) -> Result<Season, MazeParseError> {
    let record = Record::new(data)?;

    let start_date = datetime::date(&record, "premiereDate")?;
    let end_date = datetime::date(&record, "endDate")?;

    let network = record
        .optional_record("network")?
        .map(|sub| network_record(&sub))
        .transpose()?;
    let web_channel = record
        .optional_record("webChannel")?
        .map(|sub| network_record(&sub))
        .transpose()?;

    let links = EntityLinks::parse(&record)?;

    Ok(Season {
        maze_id: record.u32("id")?,
        title: record.str("name")?.to_string(),
        season_number: record.u32("number")?,
        episodes_ordered: record.u32("episodeOrder")?,
        start_date,
        end_date,
        summary: record.optional_str("summary")?.map(str::to_string),
        network,
        web_channel,
        web_url: links.web_url,
        api_url: links.api_url,
        images: links.images,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeSet;

    fn under_the_dome() -> Value {
        json!({
            "_links": {
                "self": {
                    "href": "http://api.tvmaze.com/seasons/1",
                },
            },
            "endDate": "2013-09-16",
            "episodeOrder": 13,
            "id": 1,
            "image": {
                "medium": "http://static.tvmaze.com/uploads/images/medium_portrait/24/60941.jpg",
                "original": "http://static.tvmaze.com/uploads/images/original_untouched/24/60941.jpg",
            },
            "name": "",
            "network": {
                "country": {
                    "code": "US",
                    "name": "United States",
                    "timezone": "America/New_York",
                },
                "id": 2,
                "name": "CBS",
            },
            "number": 1,
            "premiereDate": "2013-06-24",
            "summary": "",
            "url": "http://www.tvmaze.com/seasons/1/under-the-dome-season-1",
            "webChannel": null,
        })
    }

    fn hemlock_grove() -> Value {
        json!({
            "_links": {
                "self": {
                    "href": "http://api.tvmaze.com/seasons/116",
                },
            },
            "endDate": "2013-04-19",
            "episodeOrder": 13,
            "id": 116,
            "image": {
                "medium": "http://static.tvmaze.com/uploads/images/medium_portrait/59/149429.jpg",
                "original": "http://static.tvmaze.com/uploads/images/original_untouched/59/149429.jpg",
            },
            "name": "",
            "network": null,
            "number": 1,
            "premiereDate": "2013-04-19",
            "summary": null,
            "url": "http://www.tvmaze.com/seasons/116/hemlock-grove-season-1",
            "webChannel": {
                "country": null,
                "id": 1,
                "name": "Netflix",
            },
        })
    }

    #[test]
    fn test_parse_network_season() {
        let parsed = parse_season(&under_the_dome()).unwrap();

        assert_eq!(parsed.maze_id, 1);
        assert_eq!(parsed.title, "");
        assert_eq!(parsed.season_number, 1);
        assert_eq!(parsed.episodes_ordered, 13);
        assert_eq!(parsed.start_date, NaiveDate::from_ymd_opt(2013, 6, 24).unwrap());
        assert_eq!(parsed.end_date, NaiveDate::from_ymd_opt(2013, 9, 16).unwrap());
        assert_eq!(parsed.summary.as_deref(), Some(""));
        assert_eq!(parsed.web_channel, None);
        assert_eq!(parsed.api_url, "http://api.tvmaze.com/seasons/1");

        let network = parsed.network.unwrap();
        assert_eq!(network.maze_id, 2);
        assert_eq!(network.name, "CBS");
        assert_eq!(network.location.country().unwrap().alpha_2(), "US");
    }

    #[test]
    fn test_parse_web_channel_season() {
        let parsed = parse_season(&hemlock_grove()).unwrap();

        assert_eq!(parsed.maze_id, 116);
        assert_eq!(parsed.network, None);
        assert_eq!(parsed.summary, None);
        assert_eq!(parsed.summary_text(), "");

        let web_channel = parsed.web_channel.unwrap();
        assert_eq!(web_channel.maze_id, 1);
        assert_eq!(web_channel.name, "Netflix");
        assert_eq!(web_channel.location.country(), None);
        assert_eq!(web_channel.location.timezone(), None);
    }

    #[test]
    fn test_season_keys() {
        let serialized = serde_json::to_value(parse_season(&hemlock_grove()).unwrap()).unwrap();
        let keys: BTreeSet<&str> = serialized
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();

        assert_eq!(
            keys,
            BTreeSet::from([
                "maze_id",
                "title",
                "season_number",
                "episodes_ordered",
                "start_date",
                "end_date",
                "summary",
                "network",
                "web_channel",
                "api_url",
                "web_url",
                "medium_image_url",
                "original_image_url",
            ])
        );
        assert_eq!(serialized["network"], Value::Null);
        assert_eq!(
            serialized["web_channel"],
            json!({"maze_id": 1, "name": "Netflix", "country": null, "timezone": null})
        );
    }

    #[test]
    fn test_both_channels_may_be_present() {
        let mut data = under_the_dome();
        data["webChannel"] = hemlock_grove()["webChannel"].clone();
        let parsed = parse_season(&data).unwrap();

        assert!(parsed.network.is_some());
        assert!(parsed.web_channel.is_some());
    }

    #[test]
    fn test_summary_text() {
        let mut data = under_the_dome();
        data["summary"] = json!("<p>The dome closes.</p>");
        let parsed = parse_season(&data).unwrap();

        assert_eq!(parsed.summary_text(), "The dome closes.");
    }

    #[test]
    fn test_invalid_end_date() {
        let mut data = under_the_dome();
        data["endDate"] = json!(null);
        match parse_season(&data) {
            Err(MazeParseError::InvalidType { field, .. }) => assert_eq!(field, "endDate"),
            other => panic!("unexpected result: {:?}", other),
        }

        data["endDate"] = json!("2013/09/16");
        match parse_season(&data) {
            Err(MazeParseError::DateFormat { field, .. }) => assert_eq!(field, "endDate"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_network_errors_propagate() {
        let mut data = under_the_dome();
        data["network"]["country"]["name"] = json!("Brazil");
        assert!(matches!(
            parse_season(&data),
            Err(MazeParseError::AmbiguousCountry { .. })
        ));
    }
}
