//! Links (graph edges) between stations.

use super::{LinkId, StationId};

/// Kind of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Ordinary connection between adjacent stations on a line.
    Link,
    /// Change between lines.
    Transfer,
}

impl LinkKind {
    /// Interpret a raw kind string. Only `"transfer"` denotes a transfer.
    pub fn from_raw(kind: &str) -> Self {
        if kind == "transfer" {
            LinkKind::Transfer
        } else {
            LinkKind::Link
        }
    }
}

/// An undirected edge between two stations.
///
/// `from` and `to` are positional only; traversal may start at either end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: LinkId,
    pub kind: LinkKind,
    pub from: StationId,
    pub to: StationId,
    /// Travel time in seconds.
    pub weight_time: u32,
    /// Transfer cost; 0 for ordinary links, typically 1 for transfers.
    pub weight_transfer: u32,
}

impl Link {
    /// The endpoint opposite `current`.
    ///
    /// Returns `None` for a self-loop, or if `current` is not an endpoint.
    pub fn other_end(&self, current: &StationId) -> Option<&StationId> {
        if self.from == self.to {
            None
        } else if &self.from == current {
            Some(&self.to)
        } else if &self.to == current {
            Some(&self.from)
        } else {
            None
        }
    }

    pub fn is_transfer(&self) -> bool {
        self.kind == LinkKind::Transfer
    }
}
