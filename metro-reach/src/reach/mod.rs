//! Reachability search.
//!
//! This module answers: "which stations can be reached from this station
//! within a travel budget?" The budget is a maximum travel time and,
//! optionally, a maximum number of transfers.
//!
//! The search explores every path that fits the budget, so it finds all
//! stations within reach rather than an optimal route to any one of them.

mod availability;
mod config;
mod search;


pub use availability::{Availability, Budget, TransferCap};
pub use config::ReachConfig;
pub use search::{CancelFlag, Explorer, ReachError, ReachResult};
