//! Pure hex geometry for the rendering layer.
//!
//! Converts lattice coordinates into Cartesian positions and SVG point
//! strings. No drawing-library code lives here; consumers feed these values
//! to whatever plotting backend they use.

use crate::lattice::LatticeCoordinate;

pub use hexagon_tiles::point::Point;

/// Just a typedef for the floating point type used for coordinates, etc.
/// This only exists to make it a bit easier to change to f32 if that's ever
/// needed.
pub type Float = f64;

/// Half the height of a unit hexagon, sqrt(3)/2. Adjacent hexagon centers
/// sit sqrt(3) * size apart.
pub const HEX_EDGE: Float = 0.866_025_403_784_438_6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Angle {
  Degrees(Float),
  Radians(Float),
}

impl From<Float> for Angle {
  fn from(f: Float) -> Self {
    Angle::Degrees(f)
  }
}

impl Angle {
  pub fn as_degrees(&self) -> Float {
    match self {
      Angle::Degrees(d) => *d,
      Angle::Radians(r) => r.to_degrees(),
    }
  }

  pub fn as_radians(&self) -> Float {
    match self {
      Angle::Degrees(d) => d.to_radians(),
      Angle::Radians(r) => *r,
    }
  }
}

/// The Cartesian center of the hexagon at `coord`, for hexagons of the given
/// `size` (center-to-corner radius) laid out around `origin`.
///
/// Orientation matches the Tonnetz convention: the fifth axis runs
/// horizontally, thirds run diagonally.
pub fn hex_center(origin: Point, size: Float, coord: LatticeCoordinate) -> Point {
  let x = Float::from(coord.x());
  let y = Float::from(coord.y());
  let z = Float::from(coord.z());
  Point {
    x: origin.x + (x - y) * HEX_EDGE * size,
    y: origin.y + (x + y) * size / 2.0 - z * size,
  }
}

/// Given a center point and the size (indiameter) of a hexagon, return
/// the x,y position of a single corner, identfied by an index from 0-5.
pub fn hex_corner(center: Point, size: Float, corner_index: u8) -> Point {
  assert!(corner_index < 6, "invalid hex corner index {corner_index}");

  let angle = Angle::Degrees((60.0 * (corner_index as Float)) - 30.0);
  let radians = angle.as_radians();
  Point {
    x: center.x + size * radians.cos(),
    y: center.y + size * radians.sin(),
  }
}

/// Given a center point and the size (indiameter) of a hexagon,
/// return a String describing the points needed to render an SVG
/// <polygon> element.
pub fn hexagon_svg_points(center: Point, size: Float) -> String {
  (0..6)
    .map(|i| hex_corner(center, size, i))
    .map(|pt| format!("{},{}", pt.x, pt.y))
    .collect::<Vec<String>>()
    .join(" ")
}
