//! Weighted directed multigraph over the sections of every line.
//!
//! # Data layout
//!
//! Outgoing edges are stored in **Compressed Sparse Row (CSR)** format.
//! Given a `VertexId v`, its outgoing edges are the `EdgeId`s
//!
//! ```text
//! vertex_out_start[v] .. vertex_out_start[v + 1]
//! ```
//!
//! and the edge arrays (`edge_from`, `edge_to`, `edge_distance`, `edge_line`)
//! are sorted by source vertex.  Parallel edges between the same pair of
//! stations (two lines covering the same hop) are kept as separate entries.
//!
//! Vertices are deduplicated by `StationId`, so a transfer station shared by
//! several lines is a single vertex.

use log::debug;
use rustc_hash::FxHashMap;

use subway_core::{Distance, EdgeId, LineId, Station, StationId, VertexId};
use subway_line::{Line, Section};

// ── PathGraph ─────────────────────────────────────────────────────────────────

/// Station multigraph in CSR format.
///
/// Edge arrays are `pub` for direct indexed access in the search loop.
/// Build with [`PathGraph::from_lines`] or [`PathGraphBuilder`].
pub struct PathGraph {
    /// Station of each vertex.  Indexed by `VertexId`.
    pub stations: Vec<Station>,

    /// CSR row pointer.  Length = `vertex_count + 1`.
    pub vertex_out_start: Vec<u32>,

    /// Source vertex of each edge.  Needed to walk a path back to its origin.
    pub edge_from: Vec<VertexId>,

    pub edge_to: Vec<VertexId>,

    /// Section distance; the search cost.
    pub edge_distance: Vec<Distance>,

    /// Line that contributed each edge.
    pub edge_line: Vec<LineId>,

    vertex_of: FxHashMap<StationId, VertexId>,
}

impl PathGraph {
    /// A graph with no vertices.  Every search against it fails with
    /// [`PathError::TargetNotLinked`](crate::PathError::TargetNotLinked).
    pub fn empty() -> Self {
        PathGraphBuilder::new().build()
    }

    /// Assemble the graph for a set of lines.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a Line>,
    {
        let mut b = PathGraphBuilder::new();
        for line in lines {
            b.add_line(line);
        }
        b.build()
    }

    pub fn vertex_count(&self) -> usize {
        self.stations.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Vertex of `station`, if any line stops there.
    pub fn vertex(&self, station: StationId) -> Option<VertexId> {
        self.vertex_of.get(&station).copied()
    }

    pub fn contains_station(&self, station: StationId) -> bool {
        self.vertex_of.contains_key(&station)
    }

    #[inline]
    pub fn station(&self, vertex: VertexId) -> &Station {
        &self.stations[vertex.index()]
    }

    /// Iterator over the `EdgeId`s leaving `vertex`.  Contiguous range, no
    /// allocation.
    #[inline]
    pub fn out_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.vertex_out_start[vertex.index()];
        let end   = self.vertex_out_start[vertex.index() + 1];
        (start..end).map(EdgeId)
    }

    #[inline]
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        let start = self.vertex_out_start[vertex.index()] as usize;
        let end   = self.vertex_out_start[vertex.index() + 1] as usize;
        end - start
    }
}

// ── PathGraphBuilder ──────────────────────────────────────────────────────────

/// Collects stations and sections in any order, then lays them out as CSR in
/// [`build`](Self::build).
pub struct PathGraphBuilder {
    stations:  Vec<Station>,
    vertex_of: FxHashMap<StationId, VertexId>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from:     VertexId,
    to:       VertexId,
    distance: Distance,
    line:     LineId,
}

impl PathGraphBuilder {
    pub fn new() -> Self {
        Self {
            stations:  Vec::new(),
            vertex_of: FxHashMap::default(),
            raw_edges: Vec::new(),
        }
    }

    pub fn with_capacity(stations: usize, sections: usize) -> Self {
        let mut vertex_of = FxHashMap::default();
        vertex_of.reserve(stations);
        Self {
            stations: Vec::with_capacity(stations),
            vertex_of,
            raw_edges: Vec::with_capacity(sections),
        }
    }

    /// Add `station` as a vertex, or return the existing vertex for its id.
    pub fn add_station(&mut self, station: &Station) -> VertexId {
        if let Some(&v) = self.vertex_of.get(&station.id) {
            return v;
        }
        let v = VertexId(self.stations.len() as u32);
        self.stations.push(station.clone());
        self.vertex_of.insert(station.id, v);
        v
    }

    /// Add one directed edge `up → down` weighted by the section distance.
    pub fn add_section(&mut self, section: &Section) {
        let from = self.add_station(section.up_station());
        let to = self.add_station(section.down_station());
        self.raw_edges.push(RawEdge {
            from,
            to,
            distance: section.distance(),
            line:     section.line_id(),
        });
    }

    /// Add every station and section of `line`.
    pub fn add_line(&mut self, line: &Line) {
        for station in line.stations() {
            self.add_station(station);
        }
        for section in line.sections() {
            self.add_section(section);
        }
    }

    pub fn vertex_count(&self) -> usize { self.stations.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`PathGraph`].
    ///
    /// O(E log E) for the edge sort.
    pub fn build(self) -> PathGraph {
        let vertex_count = self.stations.len();

        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from);

        let edge_from:     Vec<VertexId> = raw.iter().map(|e| e.from).collect();
        let edge_to:       Vec<VertexId> = raw.iter().map(|e| e.to).collect();
        let edge_distance: Vec<Distance> = raw.iter().map(|e| e.distance).collect();
        let edge_line:     Vec<LineId>   = raw.iter().map(|e| e.line).collect();

        let mut vertex_out_start = vec![0u32; vertex_count + 1];
        for e in &raw {
            vertex_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=vertex_count {
            vertex_out_start[i] += vertex_out_start[i - 1];
        }
        debug_assert_eq!(vertex_out_start[vertex_count] as usize, raw.len());

        debug!("path graph built: {} stations, {} sections", vertex_count, raw.len());

        PathGraph {
            stations: self.stations,
            vertex_out_start,
            edge_from,
            edge_to,
            edge_distance,
            edge_line,
            vertex_of: self.vertex_of,
        }
    }
}

impl Default for PathGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
