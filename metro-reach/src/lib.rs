//! Metro reachability.
//!
//! A library that answers: "which stations can I reach from here within
//! this much travel time, and optionally this many transfers?"

pub mod config;
pub mod domain;
pub mod metro;
pub mod reach;
pub mod schema;
