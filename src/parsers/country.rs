//! Country and timezone resolution.

use super::MazeParseError;
use super::record::Record;
use crate::country::Country;
use chrono_tz::Tz;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::debug;

/// A resolved country together with its timezone.
///
/// Either both are known or neither is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountryInfo {
    resolved: Option<(Country, Tz)>,
}

impl CountryInfo {
    /// A country info with neither country nor timezone.
    pub fn unknown() -> Self {
        Self { resolved: None }
    }

    pub fn new(country: Country, timezone: Tz) -> Self {
        Self {
            resolved: Some((country, timezone)),
        }
    }

    pub fn country(&self) -> Option<Country> {
        self.resolved.map(|(country, _)| country)
    }

    pub fn timezone(&self) -> Option<Tz> {
        self.resolved.map(|(_, timezone)| timezone)
    }

    pub fn is_known(&self) -> bool {
        self.resolved.is_some()
    }
}

impl Serialize for CountryInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CountryInfo", 2)?;
        state.serialize_field("country", &self.country())?;
        state.serialize_field("timezone", &self.timezone())?;
        state.end()
    }
}

/// Parses a TVMaze country sub-record.
///
/// A missing, `null` or empty sub-record yields [`CountryInfo::unknown`].
/// Otherwise the timezone must be a known IANA name and the country code and
/// country name must resolve to the same registry entry.
pub fn parse_country(data: Option<&serde_json::Value>) -> Result<CountryInfo, MazeParseError> {
    match data {
        None => Ok(CountryInfo::unknown()),
        Some(value) if value.is_null() => Ok(CountryInfo::unknown()),
        Some(value) => resolve_country(&Record::new(value)?),
    }
}

/// Resolves the optional `country` sub-record of a network or person.
pub(super) fn country_field(record: &Record<'_>) -> Result<CountryInfo, MazeParseError> {
    match record.optional_record("country")? {
        Some(country) => resolve_country(&country),
        None => Ok(CountryInfo::unknown()),
    }
}

fn resolve_country(record: &Record<'_>) -> Result<CountryInfo, MazeParseError> {
    if record.is_empty() {
        return Ok(CountryInfo::unknown());
    }

    let tzname = record.str("timezone")?;
    let timezone = tzname.parse::<Tz>().ok();
    debug!("Timezone {:?} parses as: {:?}", tzname, timezone);

    let code = record.str("code")?;
    let by_code = Country::from_alpha_2(code);
    debug!("Country code {:?} parses as: {:?}", code, by_code);

    let name = record.str("name")?;
    let by_name = Country::from_name(name);
    debug!("Country name {:?} parses as: {:?}", name, by_name);

    if by_code != by_name {
        return Err(MazeParseError::AmbiguousCountry { by_code, by_name });
    }

    let country = by_code.ok_or_else(|| MazeParseError::UnknownCountry {
        code: code.to_string(),
        name: name.to_string(),
    })?;
    let timezone = timezone.ok_or_else(|| MazeParseError::UnknownTimezone {
        name: tzname.to_string(),
    })?;

    Ok(CountryInfo::new(country, timezone))
}
