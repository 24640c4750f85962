//! Metro scheme documents.
//!
//! A scheme is the raw description of a network: three maps of stations,
//! links and lines keyed by id, as published alongside metro map data.
//! This module only reads and deserializes it; resolving records into
//! stations is the graph model's job.

mod builder;
mod error;
mod types;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

pub use builder::SchemeBuilder;
pub use error::SchemaError;
pub use types::{LineRecord, LinkRecord, RawId, Scheme, StationRecord};

impl Scheme {
    /// Parse a scheme from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a scheme from a reader yielding JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SchemaError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a scheme from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let scheme = Self::from_reader(BufReader::new(file))?;
        debug!(
            path = %path.display(),
            stations = scheme.stations.len(),
            links = scheme.links.len(),
            lines = scheme.lines.len(),
            "Loaded metro scheme"
        );
        Ok(scheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r##"{
        "version": "1.0",
        "stations": {
            "93": {"name": "Kitay-Gorod", "lineId": 6, "linkIds": [10, 11]},
            "94": {"name": "Tretyakovskaya", "lineId": 6, "linkIds": [10]},
            "95": {"name": "Kitay-Gorod", "lineId": 7, "linkIds": [11]}
        },
        "links": {
            "10": {"type": "link", "fromStationId": 93, "toStationId": 94, "weightTime": 120, "weightTransfer": 0},
            "11": {"type": "transfer", "fromStationId": 93, "toStationId": 95, "weightTime": 60, "weightTransfer": 1}
        },
        "lines": {
            "6": {"color": "#FBAA33", "name": "Kaluzhsko-Rizhskaya"},
            "7": {"color": "#B61D8E"}
        }
    }"##;

    #[test]
    fn parse_sample() {
        let scheme = Scheme::from_json_str(SAMPLE).unwrap();
        assert_eq!(scheme.stations.len(), 3);
        assert_eq!(scheme.links.len(), 2);
        assert_eq!(scheme.lines.len(), 2);
        assert_eq!(scheme.stations["93"].name, "Kitay-Gorod");
        assert_eq!(scheme.links["11"].kind, "transfer");
        assert_eq!(scheme.lines["7"].name, None);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let scheme = Scheme::from_json_str("{}").unwrap();
        assert!(scheme.stations.is_empty());
        assert!(scheme.links.is_empty());
        assert!(scheme.lines.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = Scheme::from_json_str("{\"stations\": [").unwrap_err();
        assert!(matches!(err, SchemaError::Json(_)));
        assert!(err.to_string().starts_with("JSON parse error"));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let scheme = Scheme::load(file.path()).unwrap();
        assert_eq!(scheme.stations.len(), 3);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Scheme::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SchemaError::Io(_)));
    }
}
