//! Cube coordinates for the hexagonal Tonnetz grid.
//!
//! Hexagons are addressed with cube coordinates: integer triples (x, y, z)
//! with x + y + z = 0, relative to an arbitrary center at (0, 0, 0). The six
//! unit steps out of a hexagon each correspond to a just-intonation interval,
//! see [`Direction`].

use core::hash::Hasher;
use hexagon_tiles::hexagon::Hex;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, hash::Hash, ops::Deref};

use crate::harmony::FifthNumber;

/// A hexagon position in cube coordinates.
///
/// Wraps [`hexagon_tiles::hexagon::Hex`], which stores (q, r) and derives the
/// third axis, so the x + y + z = 0 invariant holds by construction. Use
/// [`LatticeCoordinate::from_cube`] when the triple comes from untrusted
/// input.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LatticeCoordinate(Hex);

impl LatticeCoordinate {
  pub fn new(x: i32, y: i32) -> LatticeCoordinate {
    LatticeCoordinate(Hex::new(x, y))
  }

  pub fn origin() -> LatticeCoordinate {
    LatticeCoordinate::new(0, 0)
  }

  /// Builds a coordinate from a full cube triple, rejecting triples that
  /// don't satisfy x + y + z = 0.
  pub fn from_cube(x: i32, y: i32, z: i32) -> Option<LatticeCoordinate> {
    if x + y + z == 0 {
      Some(LatticeCoordinate::new(x, y))
    } else {
      None
    }
  }

  pub fn x(&self) -> i32 {
    self.0.q()
  }

  pub fn y(&self) -> i32 {
    self.0.r()
  }

  pub fn z(&self) -> i32 {
    self.0.s()
  }

  /// Index of the concentric ring the coordinate sits on (0 for the center).
  pub fn ring(&self) -> u32 {
    self
      .x()
      .unsigned_abs()
      .max(self.y().unsigned_abs())
      .max(self.z().unsigned_abs())
  }

  /// The adjacent coordinate one step in the given direction.
  pub fn step(&self, dir: Direction) -> LatticeCoordinate {
    let (dx, dy, _) = dir.vector();
    LatticeCoordinate::new(self.x() + dx, self.y() + dy)
  }
}

impl Deref for LatticeCoordinate {
  type Target = Hex;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl Debug for LatticeCoordinate {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
  }
}

impl Hash for LatticeCoordinate {
  fn hash<H: Hasher>(&self, h: &mut H) {
    h.write_i32(self.x());
    h.write_i32(self.y());
  }
}

impl Serialize for LatticeCoordinate {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut t = serializer.serialize_tuple(3)?;
    t.serialize_element(&self.x())?;
    t.serialize_element(&self.y())?;
    t.serialize_element(&self.z())?;
    t.end()
  }
}

impl<'de> Deserialize<'de> for LatticeCoordinate {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let (x, y, z) = <(i32, i32, i32)>::deserialize(deserializer)?;
    LatticeCoordinate::from_cube(x, y, z)
      .ok_or_else(|| de::Error::custom(format!("cube coordinate ({x}, {y}, {z}) does not sum to 0")))
  }
}

/// One of the six lattice directions, in the fixed order the neighbor tables
/// and the walker index by.
///
/// Each direction is a unit step in cube coordinates and a just-intonation
/// interval on the line of fifths: moving one hexagon transposes the note by
/// the direction's [`fifth_delta`](Direction::fifth_delta).
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, Serialize, Deserialize)]
pub enum Direction {
  MajorThirdUp = 0,
  FifthUp = 1,
  MinorThirdUp = 2,
  MajorThirdDown = 3,
  FifthDown = 4,
  MinorThirdDown = 5,
}

/// All six directions, in table order.
pub const DIRECTIONS: [Direction; 6] = [
  Direction::MajorThirdUp,
  Direction::FifthUp,
  Direction::MinorThirdUp,
  Direction::MajorThirdDown,
  Direction::FifthDown,
  Direction::MinorThirdDown,
];

impl Direction {
  /// The cube-coordinate unit step for this direction.
  pub fn vector(self) -> (i32, i32, i32) {
    use Direction::*;
    match self {
      MajorThirdUp => (1, 0, -1),
      FifthUp => (1, -1, 0),
      MinorThirdUp => (0, -1, 1),
      MajorThirdDown => (-1, 0, 1),
      FifthDown => (-1, 1, 0),
      MinorThirdDown => (0, 1, -1),
    }
  }

  /// The direction pointing back the way we came.
  pub fn opposite(self) -> Direction {
    Direction::from_u8((self as u8 + 3) % 6).expect("direction index mod 6 is a direction")
  }

  /// How far this step moves the note along the line of fifths
  /// (major third = 4 fifths, fifth = 1, minor third = -3).
  pub fn fifth_delta(self) -> FifthNumber {
    use Direction::*;
    match self {
      MajorThirdUp => 4,
      FifthUp => 1,
      MinorThirdUp => -3,
      MajorThirdDown => -4,
      FifthDown => -1,
      MinorThirdDown => 3,
    }
  }

  /// The chromatic movement of this step, in semitones mod 12.
  pub fn semitone_delta(self) -> i32 {
    (self.fifth_delta() * 7).rem_euclid(12)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_direction_vectors_are_the_six_unit_steps() {
    for dir in DIRECTIONS {
      let (x, y, z) = dir.vector();
      assert_eq!(x + y + z, 0, "{dir:?} leaves the lattice plane");
      assert_eq!(
        x.abs().max(y.abs()).max(z.abs()),
        1,
        "{dir:?} is not a unit step"
      );
    }
    // all distinct
    for a in DIRECTIONS {
      for b in DIRECTIONS {
        if a != b {
          assert_ne!(a.vector(), b.vector());
        }
      }
    }
  }

  #[test]
  fn test_opposite_negates_the_vector() {
    for dir in DIRECTIONS {
      let (x, y, z) = dir.vector();
      assert_eq!(dir.opposite().vector(), (-x, -y, -z));
      assert_eq!(dir.opposite().opposite(), dir);
      assert_eq!(dir.opposite().fifth_delta(), -dir.fifth_delta());
    }
  }

  #[test]
  fn test_semitone_deltas_match_the_interval_names() {
    use Direction::*;
    assert_eq!(MajorThirdUp.semitone_delta(), 4);
    assert_eq!(FifthUp.semitone_delta(), 7);
    assert_eq!(MinorThirdUp.semitone_delta(), 3);
    assert_eq!(MajorThirdDown.semitone_delta(), 8);
    assert_eq!(FifthDown.semitone_delta(), 5);
    assert_eq!(MinorThirdDown.semitone_delta(), 9);
  }

  #[test]
  fn test_from_cube_checks_the_invariant() {
    assert_eq!(
      LatticeCoordinate::from_cube(1, -1, 0),
      Some(LatticeCoordinate::new(1, -1))
    );
    assert_eq!(LatticeCoordinate::from_cube(1, 1, 1), None);
  }

  #[test]
  fn test_step_and_ring() {
    let origin = LatticeCoordinate::origin();
    assert_eq!(origin.ring(), 0);

    let c = origin.step(Direction::FifthUp);
    assert_eq!((c.x(), c.y(), c.z()), (1, -1, 0));
    assert_eq!(c.ring(), 1);
    assert_eq!(c.step(Direction::FifthDown), origin);

    let far = LatticeCoordinate::new(2, -1);
    assert_eq!(far.z(), -1);
    assert_eq!(far.ring(), 2);
  }
}
