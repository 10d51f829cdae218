//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("distance must be a positive integer")]
    ZeroDistance,

    #[error("distance overflow: {0} + {1} does not fit in u32")]
    DistanceOverflow(u32, u32),
}

pub type CoreResult<T> = Result<T, CoreError>;
