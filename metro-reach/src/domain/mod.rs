//! Domain types for the metro reachability search.
//!
//! This module contains the validated value types the graph model hands to
//! the search: identifiers, line colors, links, stations and time units.
//! Identifiers and colors are checked at construction time, so code that
//! receives these types can trust their validity.

mod color;
mod ids;
mod link;
mod station;
mod time;

pub use color::{Color, UnknownColor};
pub use ids::{InvalidId, LineId, LinkId, StationId};
pub use link::{Link, LinkKind};
pub use station::Station;
pub use time::{TimeUnit, TimeUnitError};
