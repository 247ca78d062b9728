//! Strict date and time conversions for TVMaze fields.

use super::MazeParseError;
use super::record::Record;
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};
use serde::Serializer;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";
const DATETIME_COLON_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

fn date_format_error(
    record: &Record<'_>,
    key: &str,
    value: &str,
    source: chrono::ParseError,
) -> MazeParseError {
    MazeParseError::DateFormat {
        field: record.field_name(key),
        value: value.to_string(),
        source,
    }
}

/// Parses a required `YYYY-MM-DD` field.
pub(super) fn date(record: &Record<'_>, key: &str) -> Result<NaiveDate, MazeParseError> {
    let value = record.str(key)?;
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| date_format_error(record, key, value, e))
}

/// Parses a `YYYY-MM-DD` field that may be missing, `null` or empty.
pub(super) fn optional_date(
    record: &Record<'_>,
    key: &str,
) -> Result<Option<NaiveDate>, MazeParseError> {
    match record.optional_str(key)? {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Some)
            .map_err(|e| date_format_error(record, key, value, e)),
    }
}

/// Parses a required `HH:MM` field.
pub(super) fn time(record: &Record<'_>, key: &str) -> Result<NaiveTime, MazeParseError> {
    let value = record.str(key)?;
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|e| date_format_error(record, key, value, e))
}

/// Parses a required ISO-8601 datetime with UTC offset.
///
/// The offset may be written with or without a colon (`+0000`, `+00:00`).
pub(super) fn datetime(
    record: &Record<'_>,
    key: &str,
) -> Result<DateTime<FixedOffset>, MazeParseError> {
    let value = record.str(key)?;
    DateTime::parse_from_str(value, DATETIME_FORMAT)
        .or_else(|e| DateTime::parse_from_str(value, DATETIME_COLON_FORMAT).map_err(|_| e))
        .map_err(|e| date_format_error(record, key, value, e))
}

/// Converts a runtime in whole minutes to a duration.
pub(super) fn runtime(minutes: i64) -> Result<Duration, MazeParseError> {
    Duration::try_minutes(minutes).ok_or(MazeParseError::InvalidRuntime { minutes })
}

/// Converts epoch seconds to a UTC instant.
pub(super) fn epoch(id: u32, timestamp: i64) -> Result<DateTime<Utc>, MazeParseError> {
    DateTime::from_timestamp(timestamp, 0).ok_or(MazeParseError::InvalidTimestamp { id, timestamp })
}

/// Serializes a duration as whole minutes.
pub(super) fn serialize_minutes<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(duration.num_minutes())
}
