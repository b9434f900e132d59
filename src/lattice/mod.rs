//! The Tonnetz lattice: cube coordinates, the static neighbor tables, and
//! the ring walker that assigns a note to every hexagon of a grid.

pub mod coords;
pub mod neighbors;
pub mod walker;

pub use coords::{Direction, LatticeCoordinate};
pub use neighbors::LatticeNote;
pub use walker::{pc_grid, tpc_grid, walk, HexAssignment};
