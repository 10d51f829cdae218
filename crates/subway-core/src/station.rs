//! Station, the vertex of every line and of the path graph.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::StationId;

/// A named stop.
///
/// Equality and hashing look at [`id`](Self::id) only, so the same station
/// reused by several lines collapses to one graph vertex even if the copies
/// carry different names.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    pub id:   StationId,
    pub name: String,
}

impl Station {
    pub fn new(id: impl Into<StationId>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id.0)
    }
}
