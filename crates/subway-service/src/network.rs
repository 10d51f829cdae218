//! In-memory store of stations and lines.
//!
//! Stands in for whatever persistence layer owns the aggregates.  Lines are
//! kept in a `Vec` in insertion order so a path query can borrow them as one
//! slice.

use std::collections::BTreeMap;

use subway_core::{LineId, Station, StationId};
use subway_line::{Line, Section};

use crate::{ServiceError, ServiceResult};

#[derive(Clone, Debug, Default)]
pub struct SubwayNetwork {
    stations: BTreeMap<StationId, Station>,
    lines:    Vec<Line>,
}

impl SubwayNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Stations ──────────────────────────────────────────────────────────

    pub fn add_station(&mut self, station: Station) -> ServiceResult<()> {
        if self.stations.contains_key(&station.id) {
            return Err(ServiceError::DuplicateStation(station.id));
        }
        self.stations.insert(station.id, station);
        Ok(())
    }

    pub fn station(&self, id: StationId) -> ServiceResult<&Station> {
        self.stations.get(&id).ok_or(ServiceError::StationNotFound(id))
    }

    pub fn has_station(&self, id: StationId) -> bool {
        self.stations.contains_key(&id)
    }

    /// Stations in id order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> + '_ {
        self.stations.values()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    // ── Lines ─────────────────────────────────────────────────────────────

    pub fn add_line(&mut self, line: Line) -> ServiceResult<()> {
        if self.has_line(line.id()) {
            return Err(ServiceError::DuplicateLine(line.id()));
        }
        self.lines.push(line);
        Ok(())
    }

    pub fn has_line(&self, id: LineId) -> bool {
        self.lines.iter().any(|l| l.id() == id)
    }

    pub fn line(&self, id: LineId) -> ServiceResult<&Line> {
        self.lines
            .iter()
            .find(|l| l.id() == id)
            .ok_or(ServiceError::LineNotFound(id))
    }

    pub fn line_mut(&mut self, id: LineId) -> ServiceResult<&mut Line> {
        self.lines
            .iter_mut()
            .find(|l| l.id() == id)
            .ok_or(ServiceError::LineNotFound(id))
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    // ── Sections ──────────────────────────────────────────────────────────

    /// Register `up → down` on a line, resolving both station ids.
    pub fn add_section(
        &mut self,
        line_id:  LineId,
        up:       StationId,
        down:     StationId,
        distance: u32,
    ) -> ServiceResult<()> {
        let up = self.station(up)?.clone();
        let down = self.station(down)?.clone();
        let section = Section::with_raw_distance(line_id, up, down, distance)?;
        self.line_mut(line_id)?.add_section(section)?;
        Ok(())
    }

    /// Remove a line's last section, given its last station.
    pub fn remove_section(&mut self, line_id: LineId, station: StationId) -> ServiceResult<Section> {
        self.station(station)?;
        Ok(self.line_mut(line_id)?.remove_last_section(station)?)
    }

    /// Take `station` off a line, merging the sections around it.
    pub fn remove_station_from_line(
        &mut self,
        line_id: LineId,
        station: StationId,
    ) -> ServiceResult<()> {
        self.station(station)?;
        self.line_mut(line_id)?.remove_station(station)?;
        Ok(())
    }

    pub fn section_count(&self) -> usize {
        self.lines.iter().map(Line::section_count).sum()
    }
}
