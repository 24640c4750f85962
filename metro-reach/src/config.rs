//! Run configuration for the command-line binary.
//!
//! Settings are read from environment variables:
//!
//! | Variable              | Meaning                              | Default   |
//! |-----------------------|--------------------------------------|-----------|
//! | `METRO_SCHEME`        | path to the scheme JSON              | required  |
//! | `METRO_STATION`       | station to measure from              | `93`      |
//! | `METRO_MAX_TIME`      | maximum travel time                  | `300`     |
//! | `METRO_TIME_UNIT`     | unit of `METRO_MAX_TIME`             | `seconds` |
//! | `METRO_MAX_TRANSFERS` | maximum transfers                    | unlimited |
//! | `METRO_MAX_DEPTH`     | longest path explored, in links      | `4096`    |

use std::path::PathBuf;

use crate::domain::{InvalidId, StationId, TimeUnit, TimeUnitError};
use crate::reach::{Availability, ReachConfig};

/// Station used when `METRO_STATION` is unset (Kitay-Gorod, orange line).
const DEFAULT_STATION: &str = "93";

const DEFAULT_MAX_TIME: u64 = 300;

/// Errors from reading the run configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("{0} is not set")]
    Missing(&'static str),

    /// A variable is not a valid number
    #[error("{name} must be a non-negative integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error(transparent)]
    InvalidStation(#[from] InvalidId),

    #[error(transparent)]
    InvalidTimeUnit(#[from] TimeUnitError),
}

/// Everything the binary needs for one query.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub scheme_path: PathBuf,
    pub availability: Availability,
    pub reach: ReachConfig,
}

impl RunConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let scheme_path = lookup("METRO_SCHEME")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing("METRO_SCHEME"))?;

        let station = match lookup("METRO_STATION") {
            Some(s) => StationId::parse(s.trim())?,
            None => StationId::parse(DEFAULT_STATION)?,
        };

        let max_time = number(&lookup, "METRO_MAX_TIME")?.unwrap_or(DEFAULT_MAX_TIME);

        let time_unit = match lookup("METRO_TIME_UNIT") {
            Some(s) => s.parse()?,
            None => TimeUnit::Seconds,
        };

        let mut availability = Availability::new(station, max_time, time_unit);
        if let Some(max_transfers) = number(&lookup, "METRO_MAX_TRANSFERS")? {
            let max_transfers =
                u32::try_from(max_transfers).map_err(|_| ConfigError::InvalidNumber {
                    name: "METRO_MAX_TRANSFERS",
                    value: max_transfers.to_string(),
                })?;
            availability = availability.with_max_transfers(max_transfers);
        }

        let mut reach = ReachConfig::default();
        if let Some(max_depth) = number(&lookup, "METRO_MAX_DEPTH")? {
            reach.max_depth = usize::try_from(max_depth).unwrap_or(usize::MAX);
        }

        Ok(Self {
            scheme_path,
            availability,
            reach,
        })
    }
}

/// Parse an optional numeric variable.
fn number<F>(lookup: &F, name: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| {
            value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber { name, value })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reach::TransferCap;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<RunConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RunConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[("METRO_SCHEME", "scheme.json")]).unwrap();

        assert_eq!(config.scheme_path, PathBuf::from("scheme.json"));
        assert_eq!(config.availability.target_station_id.as_str(), "93");
        assert_eq!(config.availability.max_travel_time, 300);
        assert_eq!(config.availability.time_unit, TimeUnit::Seconds);
        assert_eq!(config.availability.max_transfers, None);
        assert_eq!(config.reach.max_depth, ReachConfig::default().max_depth);
    }

    #[test]
    fn all_variables() {
        let config = config(&[
            ("METRO_SCHEME", "/data/moscow.json"),
            ("METRO_STATION", "120"),
            ("METRO_MAX_TIME", "15"),
            ("METRO_TIME_UNIT", "minutes"),
            ("METRO_MAX_TRANSFERS", "1"),
            ("METRO_MAX_DEPTH", "64"),
        ])
        .unwrap();

        assert_eq!(config.availability.target_station_id.as_str(), "120");
        assert_eq!(config.availability.budget().max_time_secs, 900);
        assert_eq!(
            config.availability.budget().max_transfers,
            TransferCap::AtMost(1)
        );
        assert_eq!(config.reach.max_depth, 64);
    }

    #[test]
    fn millisecond_unit() {
        let config = config(&[
            ("METRO_SCHEME", "scheme.json"),
            ("METRO_MAX_TIME", "150999"),
            ("METRO_TIME_UNIT", "ms"),
        ])
        .unwrap();

        assert_eq!(config.availability.time_unit, TimeUnit::Milliseconds);
        assert_eq!(config.availability.budget().max_time_secs, 150);
    }

    #[test]
    fn missing_scheme() {
        assert_eq!(
            config(&[]).unwrap_err(),
            ConfigError::Missing("METRO_SCHEME")
        );
        assert_eq!(
            config(&[("METRO_SCHEME", "")]).unwrap_err(),
            ConfigError::Missing("METRO_SCHEME")
        );
    }

    #[test]
    fn invalid_number() {
        let err = config(&[("METRO_SCHEME", "s.json"), ("METRO_MAX_TIME", "-5")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                name: "METRO_MAX_TIME",
                value: "-5".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "METRO_MAX_TIME must be a non-negative integer, got \"-5\""
        );
    }

    #[test]
    fn transfers_out_of_range() {
        let err = config(&[
            ("METRO_SCHEME", "s.json"),
            ("METRO_MAX_TRANSFERS", "99999999999"),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidNumber {
                name: "METRO_MAX_TRANSFERS",
                ..
            }
        ));
    }

    #[test]
    fn invalid_unit_and_station() {
        let err = config(&[("METRO_SCHEME", "s.json"), ("METRO_TIME_UNIT", "weeks")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeUnit(_)));

        let err = config(&[("METRO_SCHEME", "s.json"), ("METRO_STATION", "")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStation(_)));
    }
}
