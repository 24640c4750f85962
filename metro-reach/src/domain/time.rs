//! Time units for travel budgets.
//!
//! Link weights are expressed in seconds. Callers may state a budget in any
//! supported unit; it is normalized to seconds before the search uses it.

use chrono::Duration;
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unknown time unit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time unit: {0:?}")]
pub struct TimeUnitError(String);

const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Unit of a maximum travel time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    #[default]
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Number of nanoseconds in one of this unit.
    pub fn nanos_per_unit(&self) -> u128 {
        match self {
            TimeUnit::Nanoseconds => 1,
            TimeUnit::Microseconds => 1_000,
            TimeUnit::Milliseconds => 1_000_000,
            TimeUnit::Seconds => NANOS_PER_SECOND,
            TimeUnit::Minutes => 60 * NANOS_PER_SECOND,
            TimeUnit::Hours => 60 * 60 * NANOS_PER_SECOND,
            TimeUnit::Days => 24 * 60 * 60 * NANOS_PER_SECOND,
        }
    }

    /// Convert `value` of this unit to whole seconds, saturating at
    /// `u64::MAX`. Sub-second units round down.
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_reach::domain::TimeUnit;
    ///
    /// assert_eq!(TimeUnit::Minutes.to_seconds(5), 300);
    /// assert_eq!(TimeUnit::Milliseconds.to_seconds(1999), 1);
    /// assert_eq!(TimeUnit::Days.to_seconds(u64::MAX), u64::MAX);
    /// ```
    pub fn to_seconds(&self, value: u64) -> u64 {
        let secs = u128::from(value) * self.nanos_per_unit() / NANOS_PER_SECOND;
        u64::try_from(secs).unwrap_or(u64::MAX)
    }

    /// Convert `value` of this unit to a `Duration`.
    ///
    /// Returns `None` if the value does not fit in a `Duration`.
    pub fn duration(&self, value: u64) -> Option<Duration> {
        let nanos = u128::from(value) * self.nanos_per_unit();
        let secs = i64::try_from(nanos / NANOS_PER_SECOND).ok()?;
        let subsec = (nanos % NANOS_PER_SECOND) as i64;
        Duration::try_seconds(secs)?.checked_add(&Duration::nanoseconds(subsec))
    }
}

impl FromStr for TimeUnit {
    type Err = TimeUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ns" | "nanos" | "nanosecond" | "nanoseconds" => Ok(TimeUnit::Nanoseconds),
            "us" | "micros" | "microsecond" | "microseconds" => Ok(TimeUnit::Microseconds),
            "ms" | "millis" | "millisecond" | "milliseconds" => Ok(TimeUnit::Milliseconds),
            "s" | "sec" | "secs" | "second" | "seconds" => Ok(TimeUnit::Seconds),
            "m" | "min" | "mins" | "minute" | "minutes" => Ok(TimeUnit::Minutes),
            "h" | "hr" | "hrs" | "hour" | "hours" => Ok(TimeUnit::Hours),
            "d" | "day" | "days" => Ok(TimeUnit::Days),
            _ => Err(TimeUnitError(s.to_string())),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeUnit::Nanoseconds => "nanoseconds",
            TimeUnit::Microseconds => "microseconds",
            TimeUnit::Milliseconds => "milliseconds",
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_seconds() {
        assert_eq!(TimeUnit::Seconds.to_seconds(150), 150);
        assert_eq!(TimeUnit::Minutes.to_seconds(5), 300);
        assert_eq!(TimeUnit::Hours.to_seconds(2), 7200);
        assert_eq!(TimeUnit::Days.to_seconds(1), 86_400);
    }

    #[test]
    fn sub_second_units_round_down() {
        assert_eq!(TimeUnit::Milliseconds.to_seconds(1999), 1);
        assert_eq!(TimeUnit::Milliseconds.to_seconds(300_000), 300);
        assert_eq!(TimeUnit::Microseconds.to_seconds(999_999), 0);
        assert_eq!(TimeUnit::Nanoseconds.to_seconds(2_500_000_000), 2);
        assert_eq!(TimeUnit::Nanoseconds.to_seconds(u64::MAX), u64::MAX / 1_000_000_000);
    }

    #[test]
    fn to_seconds_saturates() {
        assert_eq!(TimeUnit::Hours.to_seconds(u64::MAX), u64::MAX);
        assert_eq!(TimeUnit::Seconds.to_seconds(u64::MAX), u64::MAX);
    }

    #[test]
    fn duration() {
        assert_eq!(TimeUnit::Minutes.duration(5), Some(Duration::minutes(5)));
        assert_eq!(TimeUnit::Seconds.duration(0), Some(Duration::zero()));
        assert_eq!(TimeUnit::Days.duration(u64::MAX), None);
        assert_eq!(
            TimeUnit::Milliseconds.duration(1999),
            Some(Duration::milliseconds(1999))
        );
        assert!(TimeUnit::Nanoseconds.duration(u64::MAX).is_some());
    }

    #[test]
    fn parse_units() {
        assert_eq!("seconds".parse(), Ok(TimeUnit::Seconds));
        assert_eq!("s".parse(), Ok(TimeUnit::Seconds));
        assert_eq!("MIN".parse(), Ok(TimeUnit::Minutes));
        assert_eq!(" hours ".parse(), Ok(TimeUnit::Hours));
        assert_eq!("d".parse(), Ok(TimeUnit::Days));
        assert_eq!("ms".parse(), Ok(TimeUnit::Milliseconds));
        assert_eq!("milliseconds".parse(), Ok(TimeUnit::Milliseconds));
        assert_eq!("us".parse(), Ok(TimeUnit::Microseconds));
        assert_eq!("NANOSECONDS".parse(), Ok(TimeUnit::Nanoseconds));
    }

    #[test]
    fn reject_unknown_unit() {
        let err = "fortnights".parse::<TimeUnit>().unwrap_err();
        assert_eq!(err.to_string(), "invalid time unit: \"fortnights\"");
        assert!("".parse::<TimeUnit>().is_err());
    }

    #[test]
    fn display_roundtrip() {
        for unit in [
            TimeUnit::Nanoseconds,
            TimeUnit::Microseconds,
            TimeUnit::Milliseconds,
            TimeUnit::Seconds,
            TimeUnit::Minutes,
            TimeUnit::Hours,
            TimeUnit::Days,
        ] {
            assert_eq!(unit.to_string().parse(), Ok(unit));
        }
    }

    #[test]
    fn default_is_seconds() {
        assert_eq!(TimeUnit::default(), TimeUnit::Seconds);
    }
}
