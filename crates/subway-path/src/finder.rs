//! Path-finder trait and the default Dijkstra implementation.
//!
//! # Pluggability
//!
//! Callers go through the [`PathFinder`] trait so a different search (A*,
//! a cached graph, …) can be dropped in without touching them.  The default
//! [`DijkstraPathFinder`] rebuilds the graph from the supplied lines on every
//! call and keeps no state between queries.
//!
//! # Cost units
//!
//! Edge cost is the section distance.  Totals are accumulated as `u64`.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::debug;

use subway_core::{EdgeId, LineId, Station, StationId, VertexId};
use subway_line::Line;

use crate::graph::PathGraph;
use crate::{PathError, PathResult};

// ── ShortestPath ──────────────────────────────────────────────────────────────

/// The result of a path query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPath {
    /// Stations in travel order, origin and target included.
    pub stations: Vec<Station>,
    /// Sum of the distances of every section travelled.
    pub total_distance: u64,
    /// Line travelled on for each hop; `lines[k]` connects `stations[k]` to
    /// `stations[k + 1]`.
    pub lines: Vec<LineId>,
}

impl ShortestPath {
    pub fn station_ids(&self) -> Vec<StationId> {
        self.stations.iter().map(|s| s.id).collect()
    }

    pub fn hop_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of times the path changes line.
    pub fn transfer_count(&self) -> usize {
        self.lines.windows(2).filter(|w| w[0] != w[1]).count()
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// Implementations must be `Send + Sync` so one finder can serve queries
/// from several threads.
pub trait PathFinder: Send + Sync {
    /// Minimum-distance path from `source` to `target` across all `lines`.
    ///
    /// Fails with [`PathError::OriginSameAsTarget`] when the two stations
    /// share an id, and with [`PathError::TargetNotLinked`] when either is
    /// missing from every line or no path connects them.
    fn find_shortest_path(
        &self,
        lines:  &[Line],
        source: &Station,
        target: &Station,
    ) -> PathResult<ShortestPath>;
}

// ── DijkstraPathFinder ────────────────────────────────────────────────────────

/// Dijkstra's algorithm over a [`PathGraph`] assembled per query.
///
/// When several paths share the minimum distance, the one found first wins;
/// ties in the heap are broken by vertex index so identical inputs give
/// identical answers.
pub struct DijkstraPathFinder;

impl PathFinder for DijkstraPathFinder {
    fn find_shortest_path(
        &self,
        lines:  &[Line],
        source: &Station,
        target: &Station,
    ) -> PathResult<ShortestPath> {
        if source == target {
            return Err(PathError::OriginSameAsTarget(source.id));
        }
        let graph = PathGraph::from_lines(lines);
        graph.shortest_path(source.id, target.id)
    }
}

impl PathGraph {
    /// Shortest path between two stations of this graph.
    pub fn shortest_path(&self, from: StationId, to: StationId) -> PathResult<ShortestPath> {
        if from == to {
            return Err(PathError::OriginSameAsTarget(from));
        }
        let not_linked = PathError::TargetNotLinked { from, to };
        let (Some(source), Some(target)) = (self.vertex(from), self.vertex(to)) else {
            return Err(not_linked);
        };

        let path = dijkstra(self, source, target).ok_or(not_linked)?;
        debug!(
            "shortest path {} → {}: {} hops, distance {}",
            from,
            to,
            path.hop_count(),
            path.total_distance
        );
        Ok(path)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

fn dijkstra(graph: &PathGraph, source: VertexId, target: VertexId) -> Option<ShortestPath> {
    let n = graph.vertex_count();
    // dist[v] = best known distance to v.
    let mut dist      = vec![u64::MAX; n];
    // prev_edge[v] = edge that reached v; INVALID for unreached vertices.
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[source.index()] = 0;

    // Reverse turns the max-heap into a min-heap; VertexId breaks ties.
    let mut heap: BinaryHeap<Reverse<(u64, VertexId)>> = BinaryHeap::new();
    heap.push(Reverse((0, source)));

    while let Some(Reverse((cost, vertex))) = heap.pop() {
        if vertex == target {
            return Some(reconstruct(graph, &prev_edge, source, target, cost));
        }

        // Stale heap entry.
        if cost > dist[vertex.index()] {
            continue;
        }

        for edge in graph.out_edges(vertex) {
            let next = graph.edge_to[edge.index()];
            let new_cost = cost.saturating_add(graph.edge_distance[edge.index()].get_u64());

            if new_cost < dist[next.index()] {
                dist[next.index()] = new_cost;
                prev_edge[next.index()] = edge;
                heap.push(Reverse((new_cost, next)));
            }
        }
    }

    None
}

fn reconstruct(
    graph:     &PathGraph,
    prev_edge: &[EdgeId],
    source:    VertexId,
    target:    VertexId,
    total:     u64,
) -> ShortestPath {
    let mut edges = Vec::new();
    let mut cur = target;
    while cur != source {
        let e = prev_edge[cur.index()];
        edges.push(e);
        cur = graph.edge_from[e.index()];
    }
    edges.reverse();

    let mut stations = Vec::with_capacity(edges.len() + 1);
    stations.push(graph.station(source).clone());
    stations.extend(edges.iter().map(|e| graph.station(graph.edge_to[e.index()]).clone()));

    ShortestPath {
        stations,
        total_distance: total,
        lines: edges.iter().map(|e| graph.edge_line[e.index()]).collect(),
    }
}
