//! Path-search error type.

use thiserror::Error;

use subway_core::StationId;

/// Errors produced by `subway-path`.
///
/// Both are permanent for a given set of lines: retrying the same query
/// gives the same answer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("origin and target are the same station ({0})")]
    OriginSameAsTarget(StationId),

    #[error("{from} and {to} are not linked by any line")]
    TargetNotLinked { from: StationId, to: StationId },
}

pub type PathResult<T> = Result<T, PathError>;
