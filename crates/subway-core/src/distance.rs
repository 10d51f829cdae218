//! Section length.

use std::fmt;
use std::num::NonZeroU32;

use crate::{CoreError, CoreResult};

/// Length of a section.  Always strictly positive.
///
/// Sums along a path can exceed `u32`, so accumulate with [`get_u64`](Self::get_u64).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct Distance(NonZeroU32);

impl Distance {
    pub fn new(value: u32) -> CoreResult<Self> {
        NonZeroU32::new(value).map(Distance).ok_or(CoreError::ZeroDistance)
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    #[inline]
    pub fn get_u64(self) -> u64 {
        u64::from(self.0.get())
    }

    /// `self - other`, or `None` when the result would not be positive.
    ///
    /// This is the remainder left on a section after a shorter one is split
    /// off it.
    pub fn checked_sub(self, other: Distance) -> Option<Distance> {
        self.get()
            .checked_sub(other.get())
            .and_then(NonZeroU32::new)
            .map(Distance)
    }

    /// `self + other`, or `None` on `u32` overflow.
    pub fn checked_add(self, other: Distance) -> Option<Distance> {
        self.0.checked_add(other.get()).map(Distance)
    }
}

impl TryFrom<u32> for Distance {
    type Error = CoreError;
    fn try_from(value: u32) -> CoreResult<Self> {
        Distance::new(value)
    }
}

impl From<Distance> for u32 {
    fn from(d: Distance) -> u32 {
        d.get()
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
