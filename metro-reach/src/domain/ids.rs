//! Identifier types for stations, links and lines.

use std::fmt;

/// Error returned when parsing an invalid identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid identifier {value:?}: {reason}")]
pub struct InvalidId {
    value: String,
    reason: &'static str,
}

fn validate(s: &str) -> Result<(), InvalidId> {
    if s.is_empty() {
        return Err(InvalidId {
            value: s.to_string(),
            reason: "must not be empty",
        });
    }
    if s.chars().any(char::is_whitespace) {
        return Err(InvalidId {
            value: s.to_string(),
            reason: "must not contain whitespace",
        });
    }
    Ok(())
}

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Parse an identifier, rejecting empty or whitespace-bearing input.
            pub fn parse(s: &str) -> Result<Self, InvalidId> {
                validate(s)?;
                Ok(Self(s.to_string()))
            }

            /// Build an identifier from a numeric id as found in raw data.
            pub fn from_number(n: u64) -> Self {
                Self(n.to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

id_type!(
    /// Identifier of a station, unique across the network.
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_reach::domain::StationId;
    ///
    /// let kitay_gorod = StationId::parse("93").unwrap();
    /// assert_eq!(kitay_gorod.as_str(), "93");
    /// assert_eq!(StationId::from_number(93), kitay_gorod);
    ///
    /// assert!(StationId::parse("").is_err());
    /// assert!(StationId::parse("9 3").is_err());
    /// ```
    StationId
);

id_type!(
    /// Identifier of a link (graph edge).
    LinkId
);

id_type!(
    /// Identifier of a metro line.
    LineId
);


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-empty token without whitespace parses and roundtrips
        #[test]
        fn roundtrip(s in "[A-Za-z0-9_-]{1,12}") {
            let id = StationId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Numbers always render to their decimal form
        #[test]
        fn from_number_is_decimal(n in any::<u64>()) {
            let id = LinkId::from_number(n);
            prop_assert_eq!(id.as_str(), n.to_string());
        }
    }
}
