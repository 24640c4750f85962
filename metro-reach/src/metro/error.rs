//! Graph model error types.

use crate::domain::{InvalidId, LineId, LinkId, StationId, UnknownColor};

/// Errors raised while resolving stations from scheme records.
///
/// These indicate malformed input. They are never turned into an
/// "unreachable" outcome by the search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// No station record with this id
    #[error("station {0} not found")]
    StationNotFound(StationId),

    /// A station references a link with no record
    #[error("link {0} not found")]
    LinkNotFound(LinkId),

    /// A station references a line with no record
    #[error("line {0} not found")]
    LineNotFound(LineId),

    /// A line's color is not in the palette
    #[error(transparent)]
    UnknownColor(#[from] UnknownColor),

    /// A raw identifier could not be parsed
    #[error(transparent)]
    InvalidId(#[from] InvalidId),

    /// A station lists a link that does not touch it
    #[error("link {link} is listed by station {station} but does not touch it")]
    LinkNotIncident { link: LinkId, station: StationId },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Color;

    #[test]
    fn error_display() {
        let err = GraphError::StationNotFound(StationId::parse("93").unwrap());
        assert_eq!(err.to_string(), "station 93 not found");

        let err = GraphError::LinkNotFound(LinkId::parse("10").unwrap());
        assert_eq!(err.to_string(), "link 10 not found");

        let err = GraphError::LineNotFound(LineId::parse("6").unwrap());
        assert_eq!(err.to_string(), "line 6 not found");

        let err: GraphError = Color::from_code("#000000").unwrap_err().into();
        assert_eq!(err.to_string(), "unknown color code: #000000");

        let err = GraphError::LinkNotIncident {
            link: LinkId::parse("10").unwrap(),
            station: StationId::parse("93").unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "link 10 is listed by station 93 but does not touch it"
        );
    }
}
