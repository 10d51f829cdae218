//! Strongly typed identifier wrappers.
//!
//! `StationId` and `LineId` carry the identities handed to us by whatever
//! owns the stations and lines.  `VertexId` and `EdgeId` are dense indexes
//! into a path graph and are only meaningful for the graph that issued them.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> Self {
                $name(raw)
            }
        }
    };
}

/// Generate a dense graph index.  Adds `INVALID` and `.index()` on top of
/// [`typed_id!`].
macro_rules! dense_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        typed_id! {
            $(#[$attr])*
            $vis struct $name($inner);
        }

        impl $name {
            /// Sentinel meaning "no valid index".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Identity of a station.  Two stations are the same station iff their
    /// ids match.
    pub struct StationId(u64);
}

typed_id! {
    /// Identity of a line.
    pub struct LineId(u64);
}

dense_id! {
    /// Index of a station vertex inside a path graph.
    pub struct VertexId(u32);
}

dense_id! {
    /// Index of a directed section edge inside a path graph.
    pub struct EdgeId(u32);
}
