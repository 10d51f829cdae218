//! `subway-core`: foundational types for the subway workspace.
//!
//! Every other `subway-*` crate depends on this one.  It has no `subway-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                   |
//! |----------------|--------------------------------------------|
//! | [`ids`]        | `StationId`, `LineId`, `VertexId`, `EdgeId` |
//! | [`station`]    | `Station` (identity-compared vertex)       |
//! | [`distance`]   | `Distance` (non-zero section length)       |
//! | [`error`]      | `CoreError`, `CoreResult`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod distance;
pub mod error;
pub mod ids;
pub mod station;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use distance::Distance;
pub use error::{CoreError, CoreResult};
pub use ids::{EdgeId, LineId, StationId, VertexId};
pub use station::Station;
