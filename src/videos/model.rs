//! # Video Model
//!
//! Internal video record, its external view and the resolution enumeration.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Supported video quality tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    P144,
    P240,
    P360,
    P480,
    P720,
    P1080,
    P1440,
    P2160,
}

impl Resolution {
    /// Every valid resolution, lowest first
    pub const ALL: [Resolution; 8] = [
        Resolution::P144,
        Resolution::P240,
        Resolution::P360,
        Resolution::P480,
        Resolution::P720,
        Resolution::P1080,
        Resolution::P1440,
        Resolution::P2160,
    ];

    /// Wire name of the resolution
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::P144 => "P144",
            Resolution::P240 => "P240",
            Resolution::P360 => "P360",
            Resolution::P480 => "P480",
            Resolution::P720 => "P720",
            Resolution::P1080 => "P1080",
            Resolution::P1440 => "P1440",
            Resolution::P2160 => "P2160",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = String;

    /// Exact, case-sensitive match on the wire name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resolution::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("invalid resolution: {}", s))
    }
}

/// A stored video
#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub can_be_downloaded: bool,
    /// 1..=18, `None` means no restriction
    pub min_age_restriction: Option<u8>,
    pub created_at: DateTime<Utc>,
    pub publication_date: DateTime<Utc>,
    pub available_resolutions: Vec<Resolution>,
}

impl Record for Video {
    fn id(&self) -> i64 {
        self.id
    }
}

/// External representation of a video
///
/// Currently exposes every field of [`Video`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoView {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub can_be_downloaded: bool,
    pub min_age_restriction: Option<u8>,
    #[serde(with = "iso_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso_timestamp")]
    pub publication_date: DateTime<Utc>,
    pub available_resolutions: Vec<Resolution>,
}

impl From<&Video> for VideoView {
    fn from(video: &Video) -> Self {
        Self {
            id: video.id,
            title: video.title.clone(),
            author: video.author.clone(),
            can_be_downloaded: video.can_be_downloaded,
            min_age_restriction: video.min_age_restriction,
            created_at: video.created_at,
            publication_date: video.publication_date,
            available_resolutions: video.available_resolutions.clone(),
        }
    }
}

/// Timestamps on the wire: UTC, millisecond precision, `Z` suffix
/// (`2024-05-01T12:30:00.000Z`).
pub(crate) mod iso_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
