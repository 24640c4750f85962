//! Memoization of hydrated stations.
//!
//! Resolving a station walks its line, color and every incident link. The
//! search asks for the same stations many times, so resolved stations are
//! kept in a bounded cache. Only successful resolutions are stored.

use std::sync::Arc;

use moka::sync::Cache as MokaCache;

use crate::domain::{Station, StationId};

/// Configuration for the station cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached stations.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
        }
    }
}

/// Cache of hydrated stations keyed by id.
pub(crate) struct StationCache {
    stations: MokaCache<StationId, Arc<Station>>,
}

impl StationCache {
    pub(crate) fn new(config: &CacheConfig) -> Self {
        Self {
            stations: MokaCache::builder()
                .max_capacity(config.max_capacity)
                .build(),
        }
    }

    pub(crate) fn get(&self, id: &StationId) -> Option<Arc<Station>> {
        self.stations.get(id)
    }

    pub(crate) fn insert(&self, station: Arc<Station>) {
        self.stations.insert(station.id.clone(), station);
    }
}
