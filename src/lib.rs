//! Tonal pitch class algebra and Tonnetz lattice geometry.
//!
//! The crate turns note names like `"F#"` or `"Bbb"` into line-of-fifths and
//! chromatic coordinates, and lays out hexagonal Tonnetz grids where each of
//! the six directions around a hexagon is a just-intonation interval (fifths
//! and major/minor thirds). Rendering, file I/O and data loading are left to
//! the host application; the walker's coordinate → note output is the whole
//! interface to the drawing layer.
//!
//! ```rust
//! use tonnetz_core::lattice::tpc_grid;
//!
//! let grid = tpc_grid("C", 2, true).unwrap();
//! assert_eq!(grid.len(), 19); // 1 + 3 * 2 * 3
//! assert_eq!(grid[1].note.to_string(), "G");
//! ```

pub mod distribution;
pub mod error;
pub mod geometry;
pub mod harmony;
pub mod lattice;

pub use error::TonnetzError;
pub use harmony::{Letter, PitchClass, TpcNote};
pub use lattice::{pc_grid, tpc_grid, HexAssignment, LatticeCoordinate};
