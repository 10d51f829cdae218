//! One directed, weighted hop of a line.

use std::fmt;

use subway_core::{Distance, LineId, Station};

use crate::{LineError, LineResult};

/// A directed connection `up_station → down_station` on one line.
///
/// Fields are private: once a section is inside a [`Line`](crate::Line)
/// only the line may rewrite its endpoints or distance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Section {
    line_id:      LineId,
    up_station:   Station,
    down_station: Station,
    distance:     Distance,
}

impl Section {
    /// Build a section, rejecting a loop back to the same station.
    pub fn new(
        line_id:      LineId,
        up_station:   Station,
        down_station: Station,
        distance:     Distance,
    ) -> LineResult<Self> {
        if up_station == down_station {
            return Err(LineError::SameUpAndDownStation(up_station.id));
        }
        Ok(Self { line_id, up_station, down_station, distance })
    }

    /// Like [`new`](Self::new) but takes a raw distance.
    pub fn with_raw_distance(
        line_id:      LineId,
        up_station:   Station,
        down_station: Station,
        distance:     u32,
    ) -> LineResult<Self> {
        Self::new(line_id, up_station, down_station, Distance::new(distance)?)
    }

    pub fn line_id(&self) -> LineId {
        self.line_id
    }

    pub fn up_station(&self) -> &Station {
        &self.up_station
    }

    pub fn down_station(&self) -> &Station {
        &self.down_station
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    // ── Chain rewrites (line-internal) ────────────────────────────────────

    pub(crate) fn set_up_station(&mut self, station: Station) {
        self.up_station = station;
    }

    pub(crate) fn set_down_station(&mut self, station: Station) {
        self.down_station = station;
    }

    pub(crate) fn set_distance(&mut self, distance: Distance) {
        self.distance = distance;
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {} ({})",
            self.up_station.name, self.down_station.name, self.distance
        )
    }
}
