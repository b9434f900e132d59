//! Ring-by-ring enumeration of a Tonnetz grid.
//!
//! The walker starts from a center note at (0, 0, 0) and lays out concentric
//! rings of hexagons, resolving every cell's note from the already-resolved
//! cell one step closer to the center. Ring k contributes 6k cells, so a grid
//! of radius r has `1 + 3r(r+1)` cells in total.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::coords::{Direction, LatticeCoordinate};
use super::neighbors::LatticeNote;
use crate::error::TonnetzError;
use crate::harmony::{PitchClass, TpcNote};

/// One resolved grid cell.
///
/// Cells suppressed by the no-duplicates policy stay in the output with
/// `shown == false`; consumers must filter on the flag instead of assuming a
/// dense list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexAssignment<N> {
  pub coord: LatticeCoordinate,
  pub note: N,
  pub shown: bool,
}

/// Number of hexagons in a grid of the given radius.
pub fn hex_count(radius: u32) -> usize {
  (1 + 3 * radius * (radius + 1)) as usize
}

/// The direction from the already-resolved inner cell to the new cell, for
/// each (axis, sign) pass of the ring enumeration.
const INWARD_DIRECTIONS: [Direction; 6] = [
  Direction::FifthUp,
  Direction::FifthDown,
  Direction::MinorThirdDown,
  Direction::MinorThirdUp,
  Direction::MajorThirdDown,
  Direction::MajorThirdUp,
];

/// Enumerates every hexagon within `radius` rings of the center and assigns
/// each a note identity.
///
/// Output is in generation order, ring by ring outward. With
/// `duplicate == false`, a cell whose note already appeared anywhere earlier
/// in the walk is flagged `shown: false` (the center is always shown). The
/// walk is a pure function of its inputs.
pub fn walk<N: LatticeNote>(radius: u32, center: N, duplicate: bool) -> Vec<HexAssignment<N>> {
  let mut cells: Vec<HexAssignment<N>> = Vec::with_capacity(hex_count(radius));
  let mut index: HashMap<LatticeCoordinate, usize> = HashMap::with_capacity(hex_count(radius));

  let origin = LatticeCoordinate::origin();
  index.insert(origin, 0);
  cells.push(HexAssignment {
    coord: origin,
    note: center,
    shown: true,
  });

  for layer in 1..=radius as i32 {
    for axis in 0..3usize {
      for (sign, flip) in [1i32, -1].into_iter().enumerate() {
        for k in 0..layer {
          let mut cube = [0i32; 3];
          cube[axis] = layer * flip;
          cube[(axis + 1) % 3] = (k - layer) * flip;
          cube[(axis + 2) % 3] = -k * flip;
          // the three components sum to 0 for every (layer, k, flip)
          let coord = LatticeCoordinate::new(cube[0], cube[1]);

          let dir = INWARD_DIRECTIONS[axis * 2 + sign];
          let inner = *index
            .get(&coord.step(dir.opposite()))
            .expect("inner ring cell is resolved before its outward neighbors");
          let note = cells[inner].note.neighbor(dir);

          // linear rescan over all earlier cells, hidden ones included;
          // grids stay small (radius <= ~10) so O(n^2) is fine here
          let shown = duplicate || !cells.iter().any(|c| c.note == note);

          index.insert(coord, cells.len());
          cells.push(HexAssignment { coord, note, shown });
        }
      }
    }
  }

  log::debug!("resolved {} cells at radius {radius}", cells.len());
  cells
}

/// Builds a TPC-mode grid from a note name, e.g. `"F#"`.
///
/// Fails with [`TonnetzError::InvalidCenter`] if `center` is not valid TPC
/// notation.
pub fn tpc_grid(
  center: &str,
  radius: u32,
  duplicate: bool,
) -> Result<Vec<HexAssignment<TpcNote>>, TonnetzError> {
  let center: TpcNote = center
    .parse()
    .map_err(|_| TonnetzError::InvalidCenter(center.to_string()))?;
  Ok(walk(radius, center, duplicate))
}

/// Builds a pitch-class-mode grid from a chromatic pitch class.
///
/// Fails with [`TonnetzError::InvalidCenter`] if `center` is outside 0..=11.
pub fn pc_grid(
  center: i64,
  radius: u32,
  duplicate: bool,
) -> Result<Vec<HexAssignment<PitchClass>>, TonnetzError> {
  let center = u8::try_from(center)
    .ok()
    .and_then(PitchClass::new)
    .ok_or_else(|| TonnetzError::InvalidCenter(center.to_string()))?;
  Ok(walk(radius, center, duplicate))
}
