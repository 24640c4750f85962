//! The metro graph model.
//!
//! `Metro` owns a scheme and resolves its raw records into fully hydrated
//! [`Station`] values: name, line color and every incident [`Link`]. It is
//! read-only once built and can be shared between threads; each lookup is a
//! constant-time map access plus the resolution of that station's links.

mod cache;
mod error;

use std::sync::Arc;

use tracing::trace;

use crate::domain::{Color, LineId, Link, LinkId, LinkKind, Station, StationId};
use crate::schema::{RawId, Scheme};

pub use cache::CacheConfig;
pub use error::GraphError;

use cache::StationCache;

/// Source of hydrated stations.
///
/// The reachability search only needs this lookup, which allows it to be
/// tested against in-memory graphs.
pub trait StationLookup {
    /// Resolve a station and its incident links.
    fn station(&self, id: &StationId) -> Result<Arc<Station>, GraphError>;
}

/// Immutable metro network.
pub struct Metro {
    scheme: Scheme,
    cache: StationCache,
}

impl Metro {
    /// Build a network over `scheme` with the default cache.
    pub fn new(scheme: Scheme) -> Self {
        Self::with_cache(scheme, &CacheConfig::default())
    }

    pub fn with_cache(scheme: Scheme, config: &CacheConfig) -> Self {
        Self {
            scheme,
            cache: StationCache::new(config),
        }
    }

    /// Number of station records.
    pub fn len(&self) -> usize {
        self.scheme.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scheme.stations.is_empty()
    }

    /// Ids of every station record, in no particular order.
    pub fn station_ids(&self) -> impl Iterator<Item = Result<StationId, GraphError>> + '_ {
        self.scheme
            .stations
            .keys()
            .map(|key| StationId::parse(key).map_err(GraphError::from))
    }

    /// Resolve every station, returning the first error found.
    ///
    /// Lookups are otherwise lazy; call this to surface malformed records
    /// before running any query.
    pub fn validate(&self) -> Result<(), GraphError> {
        for id in self.station_ids() {
            self.station(&id?)?;
        }
        Ok(())
    }

    fn hydrate(&self, id: &StationId) -> Result<Station, GraphError> {
        let record = self
            .scheme
            .stations
            .get(id.as_str())
            .ok_or_else(|| GraphError::StationNotFound(id.clone()))?;

        let line_id = LineId::parse(&record.line_id.key())?;
        let line = self
            .scheme
            .lines
            .get(line_id.as_str())
            .ok_or(GraphError::LineNotFound(line_id))?;
        let color = Color::from_code(&line.color)?;

        let links = record
            .link_ids
            .iter()
            .map(|raw| self.resolve_link(id, raw))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Station::new(id.clone(), record.name.clone(), color, links))
    }

    fn resolve_link(&self, station: &StationId, raw: &RawId) -> Result<Link, GraphError> {
        let id = LinkId::parse(&raw.key())?;
        let record = self
            .scheme
            .links
            .get(id.as_str())
            .ok_or_else(|| GraphError::LinkNotFound(id.clone()))?;

        let from = StationId::parse(&record.from_station_id.key())?;
        let to = StationId::parse(&record.to_station_id.key())?;
        if &from != station && &to != station {
            return Err(GraphError::LinkNotIncident {
                link: id,
                station: station.clone(),
            });
        }

        Ok(Link {
            id,
            kind: LinkKind::from_raw(&record.kind),
            from,
            to,
            weight_time: record.weight_time,
            weight_transfer: record.weight_transfer,
        })
    }
}

impl StationLookup for Metro {
    fn station(&self, id: &StationId) -> Result<Arc<Station>, GraphError> {
        if let Some(station) = self.cache.get(id) {
            return Ok(station);
        }

        let station = Arc::new(self.hydrate(id)?);
        trace!(station = %id, links = station.links.len(), "Hydrated station");
        self.cache.insert(station.clone());
        Ok(station)
    }
}
