//! Episode records.

use super::links::{EntityLinks, ImageUrls};
use super::record::Record;
use super::{MazeParseError, datetime};
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime};
use serde::Serialize;
use serde_json::Value;

/// `(season_number, episode_number)`; the natural sort key of an episode.
pub type EpisodeOrder = (u32, u32);

/// A single episode of a show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Episode {
    pub maze_id: u32,
    pub title: String,
    pub order: EpisodeOrder,
    /// Local air date in the network's timezone
    pub air_date: NaiveDate,
    /// Local air time in the network's timezone
    pub air_time: NaiveTime,
    /// Absolute air instant
    pub airs: DateTime<FixedOffset>,
    #[serde(serialize_with = "datetime::serialize_minutes")]
    pub runtime: Duration,
    /// HTML summary as delivered by TVMaze
    pub summary: String,
    pub web_url: String,
    pub api_url: String,
    #[serde(flatten)]
    pub images: ImageUrls,
}

impl Episode {
    pub fn season_number(&self) -> u32 {
        self.order.0
    }

    pub fn episode_number(&self) -> u32 {
        self.order.1
    }

    /// The summary with its HTML markup rendered as plain text.
    pub fn summary_text(&self) -> String {
        nanohtml2text::html2text(&self.summary).trim().to_string()
    }
}

/// Parses a TVMaze episode.
///
/// `airdate`, `airtime` and `airstamp` must match `YYYY-MM-DD`, `HH:MM` and
/// `YYYY-MM-DDTHH:MM:SS±HHMM` respectively. The order tuple is taken as given.
pub fn parse_episode(data: &Value) -> Result<Episode, MazeParseError> {
    let record = Record::new(data)?;

    let air_date = datetime::date(&record, "airdate")?;
    let air_time = datetime::time(&record, "airtime")?;
    let airs = datetime::datetime(&record, "airstamp")?;
    let runtime = datetime::runtime(record.i64("runtime")?)?;
    let links = EntityLinks::parse(&record)?;

    Ok(Episode {
        maze_id: record.u32("id")?,
        title: record.str("name")?.to_string(),
        order: (record.u32("season")?, record.u32("number")?),
        air_date,
        air_time,
        airs,
        runtime,
        summary: record.str("summary")?.to_string(),
        web_url: links.web_url,
        api_url: links.api_url,
        images: links.images,
    })
}
