use thiserror::Error;

use subway_core::{LineId, StationId};
use subway_line::LineError;
use subway_path::PathError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("station {0} not found")]
    StationNotFound(StationId),

    #[error("line {0} not found")]
    LineNotFound(LineId),

    #[error("station {0} already exists")]
    DuplicateStation(StationId),

    #[error("line {0} already exists")]
    DuplicateLine(LineId),

    #[error(transparent)]
    Line(#[from] LineError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error("network row {row}: {source}")]
    Row { row: usize, source: LineError },

    #[error("network parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
