//! Network and web channel records.

use super::MazeParseError;
use super::country::{CountryInfo, country_field};
use super::record::Record;
use serde::Serialize;
use serde_json::Value;

/// A broadcast network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Network {
    pub maze_id: u32,
    pub name: String,
    /// Country and timezone the network broadcasts from
    #[serde(flatten)]
    pub location: CountryInfo,
}

/// A streaming web channel; TVMaze models it with the network shape.
pub type WebChannel = Network;

/// Parses a TVMaze network.
pub fn parse_network(data: &Value) -> Result<Network, MazeParseError> {
    network_record(&Record::new(data)?)
}

/// Parses a TVMaze web channel.
pub fn parse_web_channel(data: &Value) -> Result<WebChannel, MazeParseError> {
    parse_network(data)
}

pub(super) fn network_record(record: &Record<'_>) -> Result<Network, MazeParseError> {
    Ok(Network {
        maze_id: record.u32("id")?,
        name: record.str("name")?.to_string(),
        location: country_field(record)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeSet;

    fn keys(value: &Value) -> BTreeSet<String> {
        value.as_object().unwrap().keys().cloned().collect()
    }

    #[test]
    fn test_parse_network() {
        let data = json!({
            "country": {
                "code": "US",
                "name": "United States",
                "timezone": "America/New_York",
            },
            "id": 1,
            "name": "NBC",
        });
        let parsed = parse_network(&data).unwrap();

        assert_eq!(parsed.maze_id, 1);
        assert_eq!(parsed.name, "NBC");
        assert_eq!(parsed.location.country().unwrap().alpha_2(), "US");
        assert_eq!(
            parsed.location.timezone(),
            Some(chrono_tz::America::New_York)
        );

        let serialized = serde_json::to_value(&parsed).unwrap();
        assert_eq!(
            keys(&serialized),
            BTreeSet::from(["country", "maze_id", "name", "timezone"].map(String::from))
        );
    }

    #[test]
    fn test_parse_web_channel_without_country() {
        let data = json!({
            "country": null,
            "id": 1,
            "name": "Netflix",
        });
        let parsed = parse_web_channel(&data).unwrap();

        assert_eq!(parsed.maze_id, 1);
        assert_eq!(parsed.name, "Netflix");
        assert_eq!(parsed.location.country(), None);
        assert_eq!(parsed.location.timezone(), None);
    }

    #[test]
    fn test_parse_web_channel_with_country() {
        let data = json!({
            "country": {
                "code": "US",
                "name": "United States",
                "timezone": "America/New_York",
            },
            "id": 2,
            "name": "Hulu",
        });
        let parsed = parse_web_channel(&data).unwrap();

        assert_eq!(parsed, parse_network(&data).unwrap());
        assert!(parsed.location.is_known());
    }

    #[test]
    fn test_parse_network_missing_name() {
        let data = json!({"id": 1, "country": null});
        match parse_network(&data) {
            Err(MazeParseError::MissingField { field }) => assert_eq!(field, "name"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_network_reports_nested_country_field() {
        let data = json!({
            "id": 3,
            "name": "BBC One",
            "country": {"code": "GB", "name": "United Kingdom"},
        });
        match parse_network(&data) {
            Err(MazeParseError::MissingField { field }) => assert_eq!(field, "country.timezone"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
