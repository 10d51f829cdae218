//! `subway-line`: a line's section chain and the rules that keep it a
//! simple path.
//!
//! # Crate layout
//!
//! | Module      | Contents                                      |
//! |-------------|-----------------------------------------------|
//! | [`section`] | `Section` (directed, weighted station pair)   |
//! | [`line`]    | `Line` (ordered chain + station indexes)      |
//! | [`error`]   | `LineError`, `LineResult<T>`                  |
//!
//! # Chain model (summary)
//!
//! A line stores its sections in travel order, first station to last:
//!
//! ```text
//! sections:  [A→B, B→C, C→D]
//! starts_at: {A:0, B:1, C:2}     station → section it is the up station of
//! ends_at:   {B:0, C:1, D:2}     station → section it is the down station of
//! ```
//!
//! A station with no `ends_at` entry is the first stop, one with no
//! `starts_at` entry is the last.  Every accepted insertion keeps each map
//! injective, so the chain never branches or loops.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                          |
//! |---------|-------------------------------------------------|
//! | `serde` | Derives `Serialize` on `Section` and `Line`.    |

pub mod error;
pub mod line;
pub mod section;


pub use error::{LineError, LineResult};
pub use line::Line;
pub use section::Section;
