//! Key-value accessor over raw JSON records.
//!
//! Upstream records are loosely typed. `Record` gives parsers explicit
//! required/optional lookups that fail with the dotted path of the offending
//! key (e.g. `_links.self.href`).

use super::MazeParseError;
use serde_json::{Map, Value};

/// A borrowed view of one JSON object.
#[derive(Debug, Clone)]
pub(super) struct Record<'a> {
    fields: &'a Map<String, Value>,
    /// Dotted path of this object inside the top-level record, with trailing dot
    prefix: String,
}

impl<'a> Record<'a> {
    /// Wraps a top-level record, which must be a JSON object.
    pub fn new(value: &'a Value) -> Result<Self, MazeParseError> {
        Self::nested(value, String::new(), "record")
    }

    fn nested(value: &'a Value, prefix: String, field: &str) -> Result<Self, MazeParseError> {
        match value {
            Value::Object(fields) => Ok(Self { fields, prefix }),
            _ => Err(MazeParseError::InvalidType {
                field: field.to_string(),
                expected: "object",
            }),
        }
    }

    /// Returns true if the object has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Full dotted name of a key in this object.
    pub fn field_name(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    fn invalid(&self, key: &str, expected: &'static str) -> MazeParseError {
        MazeParseError::InvalidType {
            field: self.field_name(key),
            expected,
        }
    }

    /// Returns the value of a required key.
    pub fn get(&self, key: &str) -> Result<&'a Value, MazeParseError> {
        self.fields
            .get(key)
            .ok_or_else(|| MazeParseError::MissingField {
                field: self.field_name(key),
            })
    }

    /// Returns the value of an optional key, treating `null` as absent.
    fn get_optional(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key).filter(|value| !value.is_null())
    }

    pub fn u32(&self, key: &str) -> Result<u32, MazeParseError> {
        self.get(key)?
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| self.invalid(key, "unsigned 32-bit integer"))
    }

    pub fn i64(&self, key: &str) -> Result<i64, MazeParseError> {
        self.get(key)?
            .as_i64()
            .ok_or_else(|| self.invalid(key, "integer"))
    }

    pub fn str(&self, key: &str) -> Result<&'a str, MazeParseError> {
        self.get(key)?
            .as_str()
            .ok_or_else(|| self.invalid(key, "string"))
    }

    /// Returns a string that may be missing or `null`.
    pub fn optional_str(&self, key: &str) -> Result<Option<&'a str>, MazeParseError> {
        match self.get_optional(key) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| self.invalid(key, "string or null")),
        }
    }

    /// Returns a required nested object.
    pub fn record(&self, key: &str) -> Result<Record<'a>, MazeParseError> {
        let field = self.field_name(key);
        Self::nested(self.get(key)?, format!("{field}."), &field)
    }

    /// Returns a nested object that may be missing or `null`.
    pub fn optional_record(&self, key: &str) -> Result<Option<Record<'a>>, MazeParseError> {
        let field = self.field_name(key);
        self.get_optional(key)
            .map(|value| Self::nested(value, format!("{field}."), &field))
            .transpose()
    }

    /// Iterates over the raw key/value pairs of this object.
    pub fn entries(&self) -> impl Iterator<Item = (&'a String, &'a Value)> {
        self.fields.iter()
    }
}
