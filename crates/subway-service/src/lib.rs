//! `subway-service`: the collaborator around the core. Holds stations and
//! lines, resolves station ids for path queries, and loads networks from CSV.
//!
//! # Crate layout
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`network`] | `SubwayNetwork` (stations + lines, in memory)     |
//! | [`service`] | `PathService`, `PathResponse`, `StationResponse`  |
//! | [`loader`]  | `load_network_csv`, `load_network_reader`         |
//! | [`error`]   | `ServiceError`, `ServiceResult<T>`                |

pub mod error;
pub mod loader;
pub mod network;
pub mod service;

#[cfg(test)]
mod tests;

pub use error::{ServiceError, ServiceResult};
pub use loader::{load_network_csv, load_network_reader};
pub use network::SubwayNetwork;
pub use service::{PathResponse, PathService, StationResponse};
