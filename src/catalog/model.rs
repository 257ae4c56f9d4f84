// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Identifier of a show as delivered by the catalog API.
///
/// The API is not consistent about the JSON type, so both strings and
/// integers are accepted and kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShowId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for ShowId {
    fn from(value: &str) -> Self {
        value
            .parse::<i64>()
            .map(Self::Number)
            .unwrap_or_else(|_| Self::Text(value.to_string()))
    }
}

/// A lightweight catalog entry for a podcast show.
///
/// Only `id` is required. Every other field falls back to a default when it
/// is absent, `null`, or of an unexpected JSON type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowPreview {
    pub id: ShowId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub seasons: u32,
    #[serde(default, deserialize_with = "lenient_genres")]
    pub genres: Option<Vec<u32>>,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub updated: Option<String>,
}

fn lenient_optional_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    lenient_optional_string(d).map(Option::unwrap_or_default)
}

fn lenient_count<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()).unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// Non-array values become `None`; non-integer elements are dropped
fn lenient_genres<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<u32>>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|item| item.as_u64().and_then(|n| u32::try_from(n).ok()))
                .collect(),
        ),
        _ => None,
    })
}

impl ShowPreview {
    /// Genre codes, or an empty slice when the field was absent
    pub fn genre_codes(&self) -> &[u32] {
        self.genres.as_deref().unwrap_or(&[])
    }

    /// Parsed `updated` timestamp, if present and readable
    pub fn updated_at(&self) -> Option<DateTime<FixedOffset>> {
        self.updated.as_deref().and_then(parse_timestamp)
    }
}

/// Parse an ISO-8601 timestamp, tolerating the variants seen in the wild.
///
/// Timestamps without an offset are taken as UTC, bare dates as midnight UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt);
    }

    let utc = FixedOffset::east_opt(0)?;

    let naive_formats = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
    for format in naive_formats {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_local_timezone(utc).single()?);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .and_then(|naive| naive.and_local_timezone(utc).single())
}
