//! Raw scheme records.
//!
//! These types map directly to the metro scheme JSON document. Only the
//! fields the graph model needs are declared; everything else is ignored.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

/// An identifier as it appears in raw data: either a JSON integer or a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(u64),
    Text(String),
}

impl RawId {
    /// The key this id refers to in the scheme's maps.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawId::Number(n) => write!(f, "{n}"),
            RawId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RawId {
    fn from(s: &str) -> Self {
        RawId::Text(s.to_string())
    }
}

impl From<u64> for RawId {
    fn from(n: u64) -> Self {
        RawId::Number(n)
    }
}

/// A station entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRecord {
    pub name: String,
    pub line_id: RawId,
    #[serde(default)]
    pub link_ids: Vec<RawId>,
}

/// A link entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    /// `"link"` or `"transfer"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub from_station_id: RawId,
    pub to_station_id: RawId,
    /// Seconds.
    pub weight_time: u32,
    pub weight_transfer: u32,
}

/// A line entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRecord {
    /// Hex color code, e.g. `"#FBAA33"`.
    pub color: String,
    pub name: Option<String>,
}

/// A complete metro scheme: stations, links and lines keyed by id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scheme {
    #[serde(default)]
    pub stations: HashMap<String, StationRecord>,
    #[serde(default)]
    pub links: HashMap<String, LinkRecord>,
    #[serde(default)]
    pub lines: HashMap<String, LineRecord>,
}
