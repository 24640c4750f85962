//! Safety bounds for the reachability search.

/// Limits on how much work a single query may do.
///
/// The search only backs off the immediately preceding station, so a cycle
/// of zero-weight links could be walked forever. These bounds stop that.
/// On realistic networks the budget runs out long before either is hit.
#[derive(Debug, Clone)]
pub struct ReachConfig {
    /// Maximum number of links on a single explored path.
    /// Paths reaching this depth are not extended.
    pub max_depth: usize,

    /// Maximum number of stations visited (counting repeats) per query.
    /// Exploration stops once this many have been visited.
    pub max_steps: usize,
}

impl ReachConfig {
    pub fn new(max_depth: usize, max_steps: usize) -> Self {
        Self {
            max_depth,
            max_steps,
        }
    }
}

impl Default for ReachConfig {
    fn default() -> Self {
        Self {
            max_depth: 4096,
            max_steps: 1_000_000,
        }
    }
}
