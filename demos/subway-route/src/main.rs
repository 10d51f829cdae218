//! subway-route: shortest path between two stations of a subway network.
//!
//! ```text
//! subway-route [SOURCE_ID] [TARGET_ID] [NETWORK_CSV]
//! ```
//!
//! With no CSV the embedded southern-Seoul network is used.  Set
//! `RUST_LOG=debug` to see graph assembly and line edits.

mod network;

use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use subway_core::StationId;
use subway_path::DijkstraPathFinder;
use subway_service::{PathService, load_network_csv};

use network::build_network;

// ── Defaults ──────────────────────────────────────────────────────────────────

const DEFAULT_SOURCE: u64 = 7;  // Sinsa
const DEFAULT_TARGET: u64 = 11; // Yangjae Citizen's Forest

fn parse_id(arg: Option<String>, default: u64, what: &str) -> Result<StationId> {
    match arg {
        None => Ok(StationId(default)),
        Some(s) => s
            .parse::<u64>()
            .map(StationId)
            .with_context(|| format!("{what} must be a station id, got {s:?}")),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let source = parse_id(args.next(), DEFAULT_SOURCE, "source")?;
    let target = parse_id(args.next(), DEFAULT_TARGET, "target")?;

    // 1. Load the network.
    let network = match args.next() {
        Some(path) => load_network_csv(Path::new(&path))
            .with_context(|| format!("loading network from {path}"))?,
        None => build_network().context("loading embedded network")?,
    };
    info!("network ready");

    println!("=== subway-route ===");
    println!(
        "Network: {} stations, {} lines, {} sections",
        network.station_count(),
        network.lines().len(),
        network.section_count()
    );
    for line in network.lines() {
        let stops: Vec<&str> = line.stations().map(|s| s.name.as_str()).collect();
        println!("  {:<12} {}", line.name(), stops.join(" → "));
    }
    println!();

    // 2. Query.
    let service = PathService::new(DijkstraPathFinder);
    let path = service.shortest_path(&network, source, target)?;

    // 3. Path table.
    println!("{:<4} {:<28} {:<12}", "#", "Station", "Via");
    println!("{}", "-".repeat(46));
    for (k, station) in path.stations.iter().enumerate() {
        let via = match k.checked_sub(1).and_then(|h| path.lines.get(h)) {
            Some(line_id) => network.line(*line_id)?.name().to_owned(),
            None => "-".to_owned(),
        };
        println!("{:<4} {:<28} {:<12}", k, station.name, via);
    }
    println!();
    println!(
        "Total distance: {}  |  Transfers: {}",
        path.total_distance,
        path.transfer_count()
    );
    println!();

    // 4. Response body.
    let body = service.find_shortest_path(&network, source, target)?;
    println!("{}", serde_json::to_string_pretty(&body)?);

    Ok(())
}
