//! Path queries by station id.

use serde::{Deserialize, Serialize};

use subway_core::{Station, StationId};
use subway_path::{DijkstraPathFinder, PathError, PathFinder, ShortestPath};

use crate::{ServiceResult, SubwayNetwork};

// ── Response shape ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationResponse {
    pub id:   u64,
    pub name: String,
}

impl From<&Station> for StationResponse {
    fn from(s: &Station) -> Self {
        Self { id: s.id.0, name: s.name.clone() }
    }
}

/// Transport-neutral view of a [`ShortestPath`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResponse {
    pub stations: Vec<StationResponse>,
    pub distance: u64,
}

impl From<&ShortestPath> for PathResponse {
    fn from(path: &ShortestPath) -> Self {
        Self {
            stations: path.stations.iter().map(StationResponse::from).collect(),
            distance: path.total_distance,
        }
    }
}

// ── PathService ───────────────────────────────────────────────────────────────

/// Resolves station ids against a [`SubwayNetwork`] and hands every line to
/// a [`PathFinder`].
pub struct PathService<F: PathFinder> {
    finder: F,
}

impl<F: PathFinder> PathService<F> {
    pub fn new(finder: F) -> Self {
        Self { finder }
    }

    /// Shortest path between two station ids.
    ///
    /// Equal ids are rejected before either id is looked up.
    pub fn shortest_path(
        &self,
        network: &SubwayNetwork,
        source:  StationId,
        target:  StationId,
    ) -> ServiceResult<ShortestPath> {
        if source == target {
            return Err(PathError::OriginSameAsTarget(source).into());
        }
        let source = network.station(source)?;
        let target = network.station(target)?;
        Ok(self.finder.find_shortest_path(network.lines(), source, target)?)
    }

    /// [`shortest_path`](Self::shortest_path) shaped for a response body.
    pub fn find_shortest_path(
        &self,
        network: &SubwayNetwork,
        source:  StationId,
        target:  StationId,
    ) -> ServiceResult<PathResponse> {
        self.shortest_path(network, source, target)
            .map(|path| PathResponse::from(&path))
    }
}

impl Default for PathService<DijkstraPathFinder> {
    fn default() -> Self {
        Self::new(DijkstraPathFinder)
    }
}
