//! Line-topology error type.

use thiserror::Error;

use subway_core::{CoreError, LineId, StationId};

/// Errors produced by `subway-line`.
///
/// Every operation that returns one of these leaves the line exactly as it
/// was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("section {up} → {down} is already registered on the line")]
    SectionAlreadyRegistered { up: StationId, down: StationId },

    #[error("neither {up} nor {down} is registered on the line")]
    NotRegisteredUpStationAndDownStation { up: StationId, down: StationId },

    #[error("distance {requested} must be shorter than the section being split ({existing})")]
    InvalidDistance { requested: u32, existing: u32 },

    #[error("section starts and ends at {0}")]
    SameUpAndDownStation(StationId),

    #[error("section belongs to {section_line}, not {line}")]
    ForeignSection { section_line: LineId, line: LineId },

    #[error("{0} has no sections")]
    EmptySections(LineId),

    #[error("{station} is not the last station of the line (last is {last})")]
    NotLastDownStation { station: StationId, last: StationId },

    #[error("{0} is not registered on the line")]
    StationNotRegistered(StationId),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type LineResult<T> = Result<T, LineError>;
