//! Depth-first reachability search.
//!
//! Starting from the query's station, every incident link is followed as
//! long as the accumulated travel time and transfer count stay within the
//! budget. The only cycle guard is that a path never steps straight back to
//! the station it just came from; a station may still be re-entered through
//! a different path, and the result set absorbs the duplicates.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, trace, warn};

use crate::domain::{Station, StationId};
use crate::metro::{GraphError, Metro, StationLookup};

use super::availability::Availability;
use super::config::ReachConfig;

/// Error from reachability search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReachError {
    /// A station or link on an explored path could not be resolved
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// The caller cancelled the search
    #[error("search cancelled")]
    Cancelled,
}

/// Shared flag for cancelling a running search from another thread.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create a flag that is not yet cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Searches holding a clone stop at their next step.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether [`cancel`](Self::cancel) has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Result of a reachability search.
#[derive(Debug, Clone)]
pub struct ReachResult {
    /// Every station reachable within budget, including the start.
    pub stations: HashSet<Arc<Station>>,

    /// Number of stations visited, counting repeat visits.
    pub steps: usize,

    /// Whether a depth or step bound cut exploration short.
    pub truncated: bool,
}

impl ReachResult {
    /// Whether a station with this id was reached.
    pub fn contains(&self, id: &StationId) -> bool {
        self.stations.iter().any(|s| &s.id == id)
    }

    /// Ids of the reached stations, sorted.
    pub fn station_ids(&self) -> Vec<StationId> {
        let mut ids: Vec<StationId> = self.stations.iter().map(|s| s.id.clone()).collect();
        ids.sort();
        ids
    }
}

/// A pending visit: a station reached along some path.
struct Frame {
    station: Arc<Station>,

    /// Station the path arrived from.
    previous: Option<StationId>,

    /// Accumulated travel time (seconds).
    time: u64,

    /// Accumulated transfer cost.
    transfers: u64,

    /// Links on the path so far.
    depth: usize,
}

/// Reachability search over a station lookup.
pub struct Explorer<'a, L: StationLookup> {
    lookup: &'a L,
    config: &'a ReachConfig,
    cancel: Option<CancelFlag>,
}

impl<'a, L: StationLookup> Explorer<'a, L> {
    /// Create an explorer over `lookup`, bounded by `config`.
    pub fn new(lookup: &'a L, config: &'a ReachConfig) -> Self {
        Self {
            lookup,
            config,
            cancel: None,
        }
    }

    /// Check `flag` between steps and abort with [`ReachError::Cancelled`]
    /// once it is set.
    pub fn with_cancel(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Find every station reachable from the query's station within budget.
    pub fn explore(&self, availability: &Availability) -> Result<ReachResult, ReachError> {
        let budget = availability.budget();
        let start = self.lookup.station(&availability.target_station_id)?;

        let mut stations: HashSet<Arc<Station>> = HashSet::new();
        let mut stack = vec![Frame {
            station: start,
            previous: None,
            time: 0,
            transfers: 0,
            depth: 0,
        }];
        let mut steps = 0;
        let mut depth_cutoffs = 0;
        let mut truncated = false;

        while let Some(frame) = stack.pop() {
            if self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled) {
                debug!(steps, "Reachability search cancelled");
                return Err(ReachError::Cancelled);
            }

            steps += 1;
            let current = &frame.station;

            for link in &current.links {
                let Some(next) = link.other_end(&current.id) else {
                    trace!(link = %link.id, station = %current.id, "Skipping self-loop");
                    continue;
                };

                // Don't go straight back
                if frame.previous.as_ref() == Some(next) {
                    continue;
                }

                let time = frame.time + u64::from(link.weight_time);
                let transfers = frame.transfers + u64::from(link.weight_transfer);
                if !budget.admits(time, transfers) {
                    trace!(
                        link = %link.id,
                        from = %current.id,
                        to = %next,
                        time,
                        transfers,
                        "Link exceeds budget"
                    );
                    continue;
                }

                if frame.depth >= self.config.max_depth {
                    depth_cutoffs += 1;
                    truncated = true;
                    continue;
                }

                stack.push(Frame {
                    station: self.lookup.station(next)?,
                    previous: Some(current.id.clone()),
                    time,
                    transfers,
                    depth: frame.depth + 1,
                });
            }

            stations.insert(frame.station);

            if steps >= self.config.max_steps && !stack.is_empty() {
                warn!(
                    steps,
                    pending = stack.len(),
                    "Reachability search hit step limit, results may be incomplete"
                );
                truncated = true;
                break;
            }
        }

        if depth_cutoffs > 0 {
            warn!(
                depth_cutoffs,
                max_depth = self.config.max_depth,
                "Reachability search hit depth limit, results may be incomplete"
            );
        }

        debug!(
            start = %availability.target_station_id,
            stations = stations.len(),
            steps,
            truncated,
            "Reachability search complete"
        );

        Ok(ReachResult {
            stations,
            steps,
            truncated,
        })
    }

    /// Like [`explore`](Self::explore), returning only the station set.
    pub fn all_stations_within(
        &self,
        availability: &Availability,
    ) -> Result<HashSet<Arc<Station>>, ReachError> {
        Ok(self.explore(availability)?.stations)
    }
}

impl Metro {
    /// Gather all stations within the given availability, using the default
    /// search bounds.
    pub fn all_stations_within(
        &self,
        availability: &Availability,
    ) -> Result<HashSet<Arc<Station>>, ReachError> {
        let config = ReachConfig::default();
        Explorer::new(self, &config).all_stations_within(availability)
    }
}
