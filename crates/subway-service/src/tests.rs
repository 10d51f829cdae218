//! Unit tests for subway-service.

use std::io::Cursor;

use subway_core::{LineId, Station, StationId};
use subway_line::{Line, LineError};
use subway_path::{DijkstraPathFinder, PathError};

use crate::{PathService, ServiceError, SubwayNetwork, load_network_reader};

// ── Helpers ───────────────────────────────────────────────────────────────────

const NETWORK_CSV: &str = "\
line_id,line_name,line_color,up_station_id,up_station_name,down_station_id,down_station_name,distance
2,Line 2,green,1,Gangnam,2,Yeoksam,10
2,Line 2,green,2,Yeoksam,3,Seolleung,10
3,Line 3,orange,4,Yangjae,1,Gangnam,6
9,Line 9,gold,1,Gangnam,3,Seolleung,5
";

fn network() -> SubwayNetwork {
    load_network_reader(Cursor::new(NETWORK_CSV)).unwrap()
}

fn service() -> PathService<DijkstraPathFinder> {
    PathService::default()
}

// ── SubwayNetwork ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use super::*;

    #[test]
    fn duplicate_station_is_rejected() {
        let mut net = SubwayNetwork::new();
        net.add_station(Station::new(1u64, "Gangnam")).unwrap();
        let err = net.add_station(Station::new(1u64, "Gangnam")).unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateStation(StationId(1))));
    }

    #[test]
    fn duplicate_line_is_rejected() {
        let mut net = SubwayNetwork::new();
        net.add_line(Line::new(2u64, "Line 2", "green")).unwrap();
        let err = net.add_line(Line::new(2u64, "Line 2 again", "green")).unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateLine(LineId(2))));
    }

    #[test]
    fn add_section_resolves_ids() {
        let mut net = SubwayNetwork::new();
        net.add_station(Station::new(1u64, "Gangnam")).unwrap();
        net.add_station(Station::new(2u64, "Yeoksam")).unwrap();
        net.add_line(Line::new(2u64, "Line 2", "green")).unwrap();

        net.add_section(LineId(2), StationId(1), StationId(2), 10).unwrap();
        let names: Vec<String> = net
            .line(LineId(2))
            .unwrap()
            .all_stations()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["Gangnam", "Yeoksam"]);
    }

    #[test]
    fn add_section_unknown_station() {
        let mut net = SubwayNetwork::new();
        net.add_station(Station::new(1u64, "Gangnam")).unwrap();
        net.add_line(Line::new(2u64, "Line 2", "green")).unwrap();
        let err = net.add_section(LineId(2), StationId(1), StationId(9), 10).unwrap_err();
        assert!(matches!(err, ServiceError::StationNotFound(StationId(9))));
    }

    #[test]
    fn add_section_unknown_line() {
        let mut net = network();
        let err = net.add_section(LineId(7), StationId(1), StationId(2), 3).unwrap_err();
        assert!(matches!(err, ServiceError::LineNotFound(LineId(7))));
    }

    #[test]
    fn add_section_topology_error_passes_through() {
        let mut net = network();
        let err = net.add_section(LineId(2), StationId(1), StationId(2), 10).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Line(LineError::SectionAlreadyRegistered { .. })
        ));
    }

    #[test]
    fn remove_section_and_station() {
        let mut net = network();
        let removed = net.remove_section(LineId(2), StationId(3)).unwrap();
        assert_eq!(removed.down_station().id, StationId(3));
        assert_eq!(net.line(LineId(2)).unwrap().section_count(), 1);

        net.remove_station_from_line(LineId(2), StationId(2)).unwrap();
        assert!(net.line(LineId(2)).unwrap().is_empty_sections());
    }

    #[test]
    fn remove_section_of_interior_station_is_rejected() {
        let mut net = network();
        let err = net.remove_section(LineId(2), StationId(2)).unwrap_err();
        assert!(matches!(err, ServiceError::Line(LineError::NotLastDownStation { .. })));
    }
}

// ── PathService ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod path_service {
    use super::*;

    #[test]
    fn finds_cheapest_across_lines() {
        let net = network();
        let resp = service()
            .find_shortest_path(&net, StationId(4), StationId(3))
            .unwrap();
        // Yangjae → Gangnam (6, line 3) → Seolleung (5, line 9).
        let got: Vec<u64> = resp.stations.iter().map(|s| s.id).collect();
        assert_eq!(got, [4, 1, 3]);
        assert_eq!(resp.distance, 11);
        assert_eq!(resp.stations[0].name, "Yangjae");
    }

    #[test]
    fn equal_ids_rejected_before_lookup() {
        // Station 42 does not exist; the origin check still comes first.
        let net = network();
        let err = service()
            .find_shortest_path(&net, StationId(42), StationId(42))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Path(PathError::OriginSameAsTarget(StationId(42)))));
    }

    #[test]
    fn unknown_station_is_not_found() {
        let net = network();
        let err = service()
            .find_shortest_path(&net, StationId(1), StationId(42))
            .unwrap_err();
        assert!(matches!(err, ServiceError::StationNotFound(StationId(42))));
    }

    #[test]
    fn unlinked_station_is_not_linked() {
        let mut net = network();
        net.add_station(Station::new(50u64, "Isolated")).unwrap();
        let err = service()
            .find_shortest_path(&net, StationId(1), StationId(50))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Path(PathError::TargetNotLinked { .. })));
    }

    #[test]
    fn shortest_path_keeps_lines() {
        let net = network();
        let path = service()
            .shortest_path(&net, StationId(4), StationId(3))
            .unwrap();
        assert_eq!(path.lines, vec![LineId(3), LineId(9)]);
    }

    #[test]
    fn response_serializes() {
        let net = network();
        let resp = service()
            .find_shortest_path(&net, StationId(1), StationId(2))
            .unwrap();
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "stations": [
                    { "id": 1, "name": "Gangnam" },
                    { "id": 2, "name": "Yeoksam" }
                ],
                "distance": 10
            })
        );
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Write;

    use super::*;
    use crate::load_network_csv;

    #[test]
    fn loads_lines_and_stations() {
        let net = network();
        assert_eq!(net.station_count(), 4);
        assert_eq!(net.lines().len(), 3);
        assert_eq!(net.section_count(), 4);

        let line_2 = net.line(LineId(2)).unwrap();
        assert_eq!(line_2.name(), "Line 2");
        assert_eq!(line_2.color(), "green");
        assert_eq!(line_2.total_distance(), 20);
    }

    #[test]
    fn rows_are_applied_through_topology_rules() {
        // Row 2 splits Gangnam→Seolleung (10) with Gangnam→Yeoksam (4).
        let csv = "\
line_id,line_name,line_color,up_station_id,up_station_name,down_station_id,down_station_name,distance
2,Line 2,green,1,Gangnam,3,Seolleung,10
2,Line 2,green,1,Gangnam,2,Yeoksam,4
";
        let net = load_network_reader(Cursor::new(csv)).unwrap();
        let distances: Vec<u32> = net
            .line(LineId(2))
            .unwrap()
            .sections()
            .iter()
            .map(|s| s.distance().get())
            .collect();
        assert_eq!(distances, [4, 6]);
    }

    #[test]
    fn invalid_row_reports_row_number() {
        let csv = "\
line_id,line_name,line_color,up_station_id,up_station_name,down_station_id,down_station_name,distance
2,Line 2,green,1,Gangnam,3,Seolleung,10
2,Line 2,green,5,Yangjae,6,Jeongja,4
";
        let err = load_network_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Row {
                row: 2,
                source: LineError::NotRegisteredUpStationAndDownStation { .. }
            }
        ));
    }

    #[test]
    fn zero_distance_row_is_rejected() {
        let csv = "\
line_id,line_name,line_color,up_station_id,up_station_name,down_station_id,down_station_name,distance
2,Line 2,green,1,Gangnam,3,Seolleung,0
";
        let err = load_network_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ServiceError::Row { row: 1, source: LineError::Core(_) }));
    }

    #[test]
    fn malformed_row_is_parse_error() {
        let csv = "\
line_id,line_name,line_color,up_station_id,up_station_name,down_station_id,down_station_name,distance
2,Line 2,green,1,Gangnam,3,Seolleung,ten
";
        let err = load_network_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ServiceError::Parse(_)));
    }

    #[test]
    fn first_name_wins_for_repeated_station() {
        let csv = "\
line_id,line_name,line_color,up_station_id,up_station_name,down_station_id,down_station_name,distance
2,Line 2,green,1,Gangnam,2,Yeoksam,10
3,Line 3,orange,1,Gangnam (Line 3),4,Sinsa,7
";
        let net = load_network_reader(Cursor::new(csv)).unwrap();
        assert_eq!(net.station(StationId(1)).unwrap().name, "Gangnam");
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(NETWORK_CSV.as_bytes()).unwrap();
        let net = load_network_csv(file.path()).unwrap();
        assert_eq!(net.section_count(), 4);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_network_csv(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, ServiceError::Io(_)));
    }
}
