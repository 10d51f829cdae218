//! CSV network loader.
//!
//! # CSV format
//!
//! One row per section.  Line and station attributes are repeated on every
//! row; the first row that mentions an id defines its name (and colour, for
//! lines).
//!
//! ```csv
//! line_id,line_name,line_color,up_station_id,up_station_name,down_station_id,down_station_name,distance
//! 2,Line 2,green,1,Gangnam,2,Yeoksam,10
//! 2,Line 2,green,2,Yeoksam,3,Seolleung,8
//! 3,Line 3,orange,4,Yangjae,1,Gangnam,6
//! ```
//!
//! Rows are applied in file order through [`Line::add_section`], so a file
//! that would branch a line, split a section with a too-long one, or add a
//! disconnected section is rejected.  Row numbers in errors count data rows
//! from 1, header excluded.

use std::io::Read;
use std::path::Path;

use log::info;
use serde::Deserialize;

use subway_core::{LineId, Station, StationId};
use subway_line::{Line, Section};

use crate::{ServiceError, ServiceResult, SubwayNetwork};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SectionRecord {
    line_id:           u64,
    line_name:         String,
    line_color:        String,
    up_station_id:     u64,
    up_station_name:   String,
    down_station_id:   u64,
    down_station_name: String,
    distance:          u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`SubwayNetwork`] from a section CSV file.
pub fn load_network_csv(path: &Path) -> ServiceResult<SubwayNetwork> {
    let file = std::fs::File::open(path).map_err(ServiceError::Io)?;
    load_network_reader(file)
}

/// Like [`load_network_csv`] but accepts any `Read` source.
pub fn load_network_reader<R: Read>(reader: R) -> ServiceResult<SubwayNetwork> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut network = SubwayNetwork::new();

    for (i, result) in csv_reader.deserialize::<SectionRecord>().enumerate() {
        let row = i + 1;
        let rec = result.map_err(|e| ServiceError::Parse(format!("row {row}: {e}")))?;

        let line_id = LineId(rec.line_id);
        if !network.has_line(line_id) {
            network.add_line(Line::new(line_id, rec.line_name, rec.line_color))?;
        }
        let up = ensure_station(&mut network, rec.up_station_id, rec.up_station_name)?;
        let down = ensure_station(&mut network, rec.down_station_id, rec.down_station_name)?;

        let section = Section::with_raw_distance(line_id, up, down, rec.distance)
            .map_err(|source| ServiceError::Row { row, source })?;
        network
            .line_mut(line_id)?
            .add_section(section)
            .map_err(|source| ServiceError::Row { row, source })?;
    }

    info!(
        "loaded network: {} stations, {} lines, {} sections",
        network.station_count(),
        network.lines().len(),
        network.section_count()
    );
    Ok(network)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn ensure_station(network: &mut SubwayNetwork, id: u64, name: String) -> ServiceResult<Station> {
    let id = StationId(id);
    if !network.has_station(id) {
        network.add_station(Station::new(id, name))?;
    }
    Ok(network.station(id)?.clone())
}
