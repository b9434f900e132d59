//! Static lattice adjacency tables.
//!
//! For every reference note there are six neighbors, one per [`Direction`].
//! The TPC table is defined for the seven natural letters only; notes with
//! accidentals are handled by composition, adding the reference's accidental
//! to the table entry's delta. The pitch-class table covers all twelve
//! chromatic classes and wraps mod 12.

use lazy_static::lazy_static;

use super::coords::{Direction, DIRECTIONS};
use crate::harmony::{Letter, PitchClass, TpcNote, LETTERS};

/// A note identity that can be carried across the lattice one hexagon at a
/// time. Implemented by [`TpcNote`] (spelling preserved, accidentals
/// accumulate) and [`PitchClass`] (enharmonic, wraps at 12).
pub trait LatticeNote: Copy + PartialEq {
  fn neighbor(&self, dir: Direction) -> Self;

  /// All six neighbors, in table order.
  fn neighbors(&self) -> [Self; 6] {
    DIRECTIONS.map(|d| self.neighbor(d))
  }
}

lazy_static! {
  /// Neighbors of each natural letter, indexed [letter offset][direction].
  /// The entry's accidental is the delta relative to the natural reference.
  static ref TPC_NEIGHBORS: [[TpcNote; 6]; 7] = {
    let mut table = [[TpcNote::natural(Letter::F); 6]; 7];
    for letter in LETTERS {
      for dir in DIRECTIONS {
        table[letter.fifth_offset() as usize][dir as usize] =
          TpcNote::from_fifth_number(letter.fifth_offset() + dir.fifth_delta());
      }
    }
    table
  };

  /// Neighbors of each pitch class, indexed [pitch class][direction].
  static ref PC_NEIGHBORS: [[PitchClass; 6]; 12] = {
    let mut table = [[PitchClass::new(0).unwrap(); 6]; 12];
    for (pc, row) in table.iter_mut().enumerate() {
      let pc = PitchClass::new(pc as u8).expect("row index is a pitch class");
      for dir in DIRECTIONS {
        row[dir as usize] = pc.transpose(dir.semitone_delta());
      }
    }
    table
  };
}

impl LatticeNote for TpcNote {
  fn neighbor(&self, dir: Direction) -> TpcNote {
    let entry = TPC_NEIGHBORS[self.letter.fifth_offset() as usize][dir as usize];
    TpcNote::new(entry.letter, entry.accidental + self.accidental)
  }
}

impl LatticeNote for PitchClass {
  fn neighbor(&self, dir: Direction) -> PitchClass {
    PC_NEIGHBORS[usize::from(self.get())][dir as usize]
  }
}
