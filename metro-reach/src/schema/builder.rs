//! Programmatic scheme construction.

use super::types::{LineRecord, LinkRecord, RawId, Scheme, StationRecord};

/// Builder for creating schemes without a JSON document.
///
/// Provides a fluent API for adding lines, stations and links. Adding a link
/// also registers it with both endpoint stations, so stations must be added
/// before the links that touch them.
///
/// # Example
///
/// ```
/// use metro_reach::schema::SchemeBuilder;
///
/// let scheme = SchemeBuilder::new()
///     .line("1", "#EF1E25")
///     .station("A", "Alpha", "1")
///     .station("B", "Beta", "1")
///     .link("ab", "A", "B", 100)
///     .build();
///
/// assert_eq!(scheme.stations["A"].link_ids.len(), 1);
/// assert_eq!(scheme.links["ab"].weight_time, 100);
/// ```
#[derive(Debug, Default)]
pub struct SchemeBuilder {
    inner: Scheme,
}

impl SchemeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line with the given hex color code.
    pub fn line(mut self, id: &str, color: &str) -> Self {
        self.inner.lines.insert(
            id.to_string(),
            LineRecord {
                color: color.to_string(),
                name: None,
            },
        );
        self
    }

    /// Add a station on a line, with no links yet.
    pub fn station(mut self, id: &str, name: &str, line: &str) -> Self {
        self.inner.stations.insert(
            id.to_string(),
            StationRecord {
                name: name.to_string(),
                line_id: line.into(),
                link_ids: Vec::new(),
            },
        );
        self
    }

    /// Add a raw station record as-is.
    ///
    /// Useful for stations whose link ids do not resolve.
    pub fn station_record(mut self, id: &str, record: StationRecord) -> Self {
        self.inner.stations.insert(id.to_string(), record);
        self
    }

    /// Add an ordinary link with zero transfer cost.
    pub fn link(self, id: &str, from: &str, to: &str, weight_time: u32) -> Self {
        self.edge(id, "link", from, to, weight_time, 0)
    }

    /// Add a transfer link with a transfer cost of one.
    pub fn transfer(self, id: &str, from: &str, to: &str, weight_time: u32) -> Self {
        self.edge(id, "transfer", from, to, weight_time, 1)
    }

    /// Add a link with explicit kind and weights.
    pub fn edge(
        mut self,
        id: &str,
        kind: &str,
        from: &str,
        to: &str,
        weight_time: u32,
        weight_transfer: u32,
    ) -> Self {
        self.inner.links.insert(
            id.to_string(),
            LinkRecord {
                kind: kind.to_string(),
                from_station_id: from.into(),
                to_station_id: to.into(),
                weight_time,
                weight_transfer,
            },
        );
        self.attach(from, id);
        if to != from {
            self.attach(to, id);
        }
        self
    }

    fn attach(&mut self, station: &str, link: &str) {
        if let Some(record) = self.inner.stations.get_mut(station) {
            record.link_ids.push(RawId::from(link));
        }
    }

    pub fn build(self) -> Scheme {
        self.inner
    }
}
