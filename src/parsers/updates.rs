//! Update timestamps from the TVMaze `/updates` endpoints.

use super::record::Record;
use super::{MazeParseError, datetime};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::BTreeMap;

/// Last modification instant per maze id, ordered by id.
pub type UpdatesMap = BTreeMap<u32, DateTime<Utc>>;

/// Parses a TVMaze updates object mapping stringified ids to epoch seconds.
pub fn parse_updates(data: &Value) -> Result<UpdatesMap, MazeParseError> {
    let record = Record::new(data)?;

    let mut updates = UpdatesMap::new();
    for (key, _) in record.entries() {
        let id = key
            .parse::<u32>()
            .map_err(|_| MazeParseError::InvalidId { key: key.clone() })?;
        let instant = datetime::epoch(id, record.i64(key)?)?;
        updates.insert(id, instant);
    }

    Ok(updates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_updates() {
        let data = json!({
            "1": 1562326291,
            "2": 1551364282,
            "3": 1558460773,
        });
        let parsed = parse_updates(&data).unwrap();

        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[&1].timestamp(), 1_562_326_291);
        assert_eq!(parsed[&2].timestamp(), 1_551_364_282);
        assert_eq!(parsed[&3].timestamp(), 1_558_460_773);
        assert_eq!(parsed.keys().copied().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(parsed[&1].to_rfc3339(), "2019-07-05T11:31:31+00:00");
    }

    #[test]
    fn test_parse_empty_updates() {
        assert!(parse_updates(&json!({})).unwrap().is_empty());
    }

    #[test]
    fn test_non_numeric_key() {
        match parse_updates(&json!({"abc": 1562326291})) {
            Err(MazeParseError::InvalidId { key }) => assert_eq!(key, "abc"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_non_integer_timestamp() {
        match parse_updates(&json!({"7": "yesterday"})) {
            Err(MazeParseError::InvalidType { field, .. }) => assert_eq!(field, "7"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_timestamp() {
        assert!(matches!(
            parse_updates(&json!({"7": i64::MAX})),
            Err(MazeParseError::InvalidTimestamp { id: 7, .. })
        ));
    }
}
