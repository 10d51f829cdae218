//! `subway-path`: multigraph over every line, and shortest-path search.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`graph`]   | `PathGraph` (CSR multigraph), `PathGraphBuilder`          |
//! | [`finder`]  | `PathFinder` trait, `ShortestPath`, `DijkstraPathFinder`  |
//! | [`error`]   | `PathError`, `PathResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `ShortestPath`.  |

pub mod error;
pub mod finder;
pub mod graph;


pub use error::{PathError, PathResult};
pub use finder::{DijkstraPathFinder, PathFinder, ShortestPath};
pub use graph::{PathGraph, PathGraphBuilder};
