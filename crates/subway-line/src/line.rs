//! Line aggregate: an ordered section chain plus O(1) station lookups.
//!
//! # Insertion rules
//!
//! For a new section `U → D` on a non-empty line:
//!
//! | `U` on line | `D` on line | Outcome                                          |
//! |-------------|-------------|--------------------------------------------------|
//! | yes         | yes         | `SectionAlreadyRegistered`                       |
//! | no          | no          | `NotRegisteredUpStationAndDownStation`           |
//! | last stop   | no          | appended                                         |
//! | interior    | no          | splits `U → Y` into `U → D → Y`                  |
//! | no          | first stop  | prepended                                        |
//! | no          | interior    | splits `X → D` into `X → U → D`                  |
//!
//! A split requires the new section to be strictly shorter than the one it
//! splits; the remainder goes to the rewritten section, so the pair always
//! sums to the original distance.

use log::debug;
use rustc_hash::FxHashMap;

use subway_core::{CoreError, Distance, LineId, Station, StationId};

use crate::{LineError, LineResult, Section};

/// A transit line.
///
/// `sections` is kept in travel order, so `sections[k].down_station ==
/// sections[k + 1].up_station` for every `k`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Line {
    id:       LineId,
    name:     String,
    color:    String,
    sections: Vec<Section>,

    /// Up station → index of the section leaving it.
    #[cfg_attr(feature = "serde", serde(skip))]
    starts_at: FxHashMap<StationId, usize>,
    /// Down station → index of the section arriving at it.
    #[cfg_attr(feature = "serde", serde(skip))]
    ends_at:   FxHashMap<StationId, usize>,
}

impl Line {
    /// Create a line with no sections.
    pub fn new(id: impl Into<LineId>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id:        id.into(),
            name:      name.into(),
            color:     color.into(),
            sections:  Vec::new(),
            starts_at: FxHashMap::default(),
            ends_at:   FxHashMap::default(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Replace the display attributes.  The section chain is untouched.
    pub fn update(&mut self, name: impl Into<String>, color: impl Into<String>) {
        self.name = name.into();
        self.color = color.into();
    }

    /// Sections in travel order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty_sections(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn contains_station(&self, station: StationId) -> bool {
        self.starts_at.contains_key(&station) || self.ends_at.contains_key(&station)
    }

    pub fn first_station(&self) -> Option<&Station> {
        self.sections.first().map(Section::up_station)
    }

    pub fn last_station(&self) -> Option<&Station> {
        self.sections.last().map(Section::down_station)
    }

    /// Stations from the first stop to the last, borrowed.
    pub fn stations(&self) -> impl Iterator<Item = &Station> + '_ {
        self.first_station()
            .into_iter()
            .chain(self.sections.iter().map(Section::down_station))
    }

    /// Stations from the first stop to the last.  Empty when the line has
    /// no sections.
    pub fn all_stations(&self) -> Vec<Station> {
        self.stations().cloned().collect()
    }

    /// Sum of all section distances.
    pub fn total_distance(&self) -> u64 {
        self.sections.iter().map(|s| s.distance().get_u64()).sum()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Register `section` on this line.  See the module docs for the rules.
    pub fn add_section(&mut self, section: Section) -> LineResult<()> {
        if section.line_id() != self.id {
            return Err(LineError::ForeignSection {
                section_line: section.line_id(),
                line:         self.id,
            });
        }

        let up = section.up_station().id;
        let down = section.down_station().id;

        if self.sections.is_empty() {
            debug!("{}: first section {}", self.id, section);
            self.sections.push(section);
            self.reindex();
            return Ok(());
        }

        match (self.contains_station(up), self.contains_station(down)) {
            (true, true) => return Err(LineError::SectionAlreadyRegistered { up, down }),
            (false, false) => {
                return Err(LineError::NotRegisteredUpStationAndDownStation { up, down });
            }
            (true, false) => self.attach_from_up(section)?,
            (false, true) => self.attach_to_down(section)?,
        }

        self.reindex();
        Ok(())
    }

    /// Remove the last section, given the line's last station.
    pub fn remove_last_section(&mut self, station: StationId) -> LineResult<Section> {
        let last = self
            .last_station()
            .map(|s| s.id)
            .ok_or(LineError::EmptySections(self.id))?;
        if last != station {
            return Err(LineError::NotLastDownStation { station, last });
        }

        let removed = self.sections.pop().ok_or(LineError::EmptySections(self.id))?;
        self.reindex();
        debug!("{}: removed last section {}", self.id, removed);
        Ok(removed)
    }

    /// Remove `station` from anywhere on the line.
    ///
    /// A terminal station takes its one section with it.  An interior
    /// station's two sections `X → S` and `S → Y` are merged into `X → Y`
    /// with the summed distance.
    pub fn remove_station(&mut self, station: StationId) -> LineResult<()> {
        if self.sections.is_empty() {
            return Err(LineError::EmptySections(self.id));
        }

        let incoming = self.ends_at.get(&station).copied();
        let outgoing = self.starts_at.get(&station).copied();

        match (incoming, outgoing) {
            (None, None) => return Err(LineError::StationNotRegistered(station)),
            (Some(i), None) | (None, Some(i)) => {
                let removed = self.sections.remove(i);
                debug!("{}: removed terminal section {}", self.id, removed);
            }
            (Some(i), Some(j)) => {
                let (a, b) = (self.sections[i].distance(), self.sections[j].distance());
                let merged = a
                    .checked_add(b)
                    .ok_or(CoreError::DistanceOverflow(a.get(), b.get()))?;

                let next = self.sections.remove(j);
                let prev = &mut self.sections[i];
                prev.set_down_station(next.down_station().clone());
                prev.set_distance(merged);
                debug!("{}: merged across removed station into {}", self.id, prev);
            }
        }

        self.reindex();
        Ok(())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// `section.up` is on the line, `section.down` is new.
    fn attach_from_up(&mut self, section: Section) -> LineResult<()> {
        let up = section.up_station().id;
        match self.starts_at.get(&up).copied() {
            // Nothing leaves `up`: it is the last stop.
            None => {
                debug!("{}: appended {}", self.id, section);
                self.sections.push(section);
            }
            Some(i) => {
                let remainder = self.split_remainder(i, section.distance())?;
                let old = &mut self.sections[i];
                old.set_up_station(section.down_station().clone());
                old.set_distance(remainder);
                debug!("{}: inserted {} ahead of {}", self.id, section, old);
                self.sections.insert(i, section);
            }
        }
        Ok(())
    }

    /// `section.down` is on the line, `section.up` is new.
    fn attach_to_down(&mut self, section: Section) -> LineResult<()> {
        let down = section.down_station().id;
        match self.ends_at.get(&down).copied() {
            // Nothing arrives at `down`: it is the first stop.
            None => {
                debug!("{}: prepended {}", self.id, section);
                self.sections.insert(0, section);
            }
            Some(i) => {
                let remainder = self.split_remainder(i, section.distance())?;
                let old = &mut self.sections[i];
                old.set_down_station(section.up_station().clone());
                old.set_distance(remainder);
                debug!("{}: inserted {} after {}", self.id, section, old);
                self.sections.insert(i + 1, section);
            }
        }
        Ok(())
    }

    /// Distance left on `sections[i]` once `cut` is split off it.
    fn split_remainder(&self, i: usize, cut: Distance) -> LineResult<Distance> {
        let existing = self.sections[i].distance();
        existing.checked_sub(cut).ok_or(LineError::InvalidDistance {
            requested: cut.get(),
            existing:  existing.get(),
        })
    }

    fn reindex(&mut self) {
        self.starts_at.clear();
        self.ends_at.clear();
        for (i, s) in self.sections.iter().enumerate() {
            self.starts_at.insert(s.up_station().id, i);
            self.ends_at.insert(s.down_station().id, i);
        }
    }
}
