//! Travel budget queries.

use crate::domain::{StationId, TimeUnit};

/// Query parameters: the station the budget is measured from and the budget.
///
/// Transfers are unlimited unless `max_transfers` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    /// Station against which availability is estimated.
    pub target_station_id: StationId,

    /// Maximum time en route, in `time_unit`.
    pub max_travel_time: u64,

    pub time_unit: TimeUnit,

    /// Maximum transfers en route. `None` means no cap.
    pub max_transfers: Option<u32>,
}

impl Availability {
    /// Create a query with no transfer cap.
    pub fn new(target_station_id: StationId, max_travel_time: u64, time_unit: TimeUnit) -> Self {
        Self {
            target_station_id,
            max_travel_time,
            time_unit,
            max_transfers: None,
        }
    }

    /// Cap the number of transfers.
    pub fn with_max_transfers(mut self, max_transfers: u32) -> Self {
        self.max_transfers = Some(max_transfers);
        self
    }

    /// The budget normalized to seconds.
    pub fn budget(&self) -> Budget {
        Budget {
            max_time_secs: self.time_unit.to_seconds(self.max_travel_time),
            max_transfers: match self.max_transfers {
                Some(n) => TransferCap::AtMost(n),
                None => TransferCap::Unlimited,
            },
        }
    }
}

/// Upper bound on transfers along a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferCap {
    Unlimited,
    AtMost(u32),
}

impl TransferCap {
    pub fn admits(&self, transfers: u64) -> bool {
        match self {
            TransferCap::Unlimited => true,
            TransferCap::AtMost(max) => transfers <= u64::from(*max),
        }
    }
}

/// A normalized travel budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    pub max_time_secs: u64,
    pub max_transfers: TransferCap,
}

impl Budget {
    /// Whether accumulated costs stay within this budget.
    pub fn admits(&self, time_secs: u64, transfers: u64) -> bool {
        time_secs <= self.max_time_secs && self.max_transfers.admits(transfers)
    }
}
