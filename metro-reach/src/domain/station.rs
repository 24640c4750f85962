//! Station values.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::{Color, Link, StationId};

/// A fully hydrated metro station.
///
/// Equality and hashing consider only `id`, `name` and `color`. The link
/// list is excluded so that two lookups of the same station compare equal
/// regardless of how their links were resolved.
#[derive(Debug, Clone)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub color: Color,
    pub links: Vec<Link>,
}

impl Station {
    pub fn new(id: StationId, name: impl Into<String>, color: Color, links: Vec<Link>) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            links,
        }
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.color == other.color
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
        self.color.hash(state);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.name, self.color)
    }
}
