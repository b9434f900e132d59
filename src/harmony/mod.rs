//! Note algebra for tonal pitch classes.
//!
//! A tonal pitch class (TPC) keeps its spelling: C# and Db are distinct
//! [`TpcNote`]s even though they share a chromatic [`PitchClass`]. TPC notes
//! are bijective with positions on the line of fifths ([`FifthNumber`]),
//! which is the coordinate system the lattice modules build on.

use bounded_integer::bounded_integer;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::error::TonnetzError;

/// A position on the line of fifths. F natural is 0, each sharp adds 7,
/// each flat subtracts 7.
pub type FifthNumber = i32;

bounded_integer! {
  /// A chromatic pitch class, in the range 0 ..= 11.
  ///
  /// Many [`TpcNote`]s map to one `PitchClass` (enharmonic equivalence);
  /// recovering a spelling needs an explicit convention table, see
  /// [`crate::distribution::SpellingTable`].
  pub struct PitchClass { 0..=11 }
}

impl PitchClass {
  /// Moves the pitch class by a (possibly negative) number of semitones,
  /// wrapping mod 12.
  pub fn transpose(self, semitones: i32) -> PitchClass {
    let v = (i32::from(self.get()) + semitones).rem_euclid(12);
    PitchClass::new(v as u8).expect("euclidean remainder mod 12 is in range")
  }
}

/// One of the seven natural note letters.
///
/// Discriminants are the line-of-fifths offsets (F = 0 up to B = 6), so the
/// enum doubles as the letter → offset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, Serialize, Deserialize)]
pub enum Letter {
  F = 0,
  C = 1,
  G = 2,
  D = 3,
  A = 4,
  E = 5,
  B = 6,
}

/// All seven letters, in line-of-fifths order.
pub const LETTERS: [Letter; 7] = [
  Letter::F,
  Letter::C,
  Letter::G,
  Letter::D,
  Letter::A,
  Letter::E,
  Letter::B,
];

impl Letter {
  /// The letter's offset on the line of fifths (F = 0 .. B = 6).
  pub fn fifth_offset(self) -> FifthNumber {
    self as FifthNumber
  }

  /// The chromatic pitch class of the natural letter (C = 0, D = 2, ...).
  pub fn pitch_class_base(self) -> PitchClass {
    use Letter::*;
    let pc = match self {
      C => 0,
      D => 2,
      E => 4,
      F => 5,
      G => 7,
      A => 9,
      B => 11,
    };
    PitchClass::new(pc).expect("natural pitch classes are in range")
  }

  pub fn from_char(c: char) -> Option<Letter> {
    use Letter::*;
    match c {
      'F' => Some(F),
      'C' => Some(C),
      'G' => Some(G),
      'D' => Some(D),
      'A' => Some(A),
      'E' => Some(E),
      'B' => Some(B),
      _ => None,
    }
  }

  pub fn as_char(self) -> char {
    use Letter::*;
    match self {
      F => 'F',
      C => 'C',
      G => 'G',
      D => 'D',
      A => 'A',
      E => 'E',
      B => 'B',
    }
  }
}

impl Display for Letter {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_char())
  }
}

/// A tonal pitch class: a natural letter plus a signed accidental count
/// (positive = sharps, negative = flats).
///
/// `TpcNote { letter: Letter::B, accidental: -1 }` is Bb; two notes are equal
/// iff letter and accidental both match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TpcNote {
  pub letter: Letter,
  pub accidental: i32,
}

impl TpcNote {
  pub fn new(letter: Letter, accidental: i32) -> TpcNote {
    TpcNote { letter, accidental }
  }

  pub fn natural(letter: Letter) -> TpcNote {
    TpcNote {
      letter,
      accidental: 0,
    }
  }

  /// The note's position on the line of fifths.
  pub fn fifth_number(&self) -> FifthNumber {
    self.letter.fifth_offset() + self.accidental * 7
  }

  /// Recovers the unique note at a line-of-fifths position (the inverse of
  /// [`TpcNote::fifth_number`]).
  pub fn from_fifth_number(n: FifthNumber) -> TpcNote {
    let letter = Letter::from_i32(n.rem_euclid(7)).expect("remainder mod 7 is a letter offset");
    TpcNote {
      letter,
      accidental: n.div_euclid(7),
    }
  }

  /// The chromatic pitch class of the note, accidental included.
  pub fn pitch_class(&self) -> PitchClass {
    self.letter.pitch_class_base().transpose(self.accidental)
  }
}

impl FromStr for TpcNote {
  type Err = TonnetzError;

  /// Parses TPC notation: a natural letter followed by a homogeneous run of
  /// `#` or `b`. Mixed accidental strings (`"F#b"`) are rejected rather than
  /// folded; there is no agreed meaning for them.
  fn from_str(s: &str) -> Result<TpcNote, TonnetzError> {
    let malformed = || TonnetzError::InvalidFormat(s.to_string());

    let mut chars = s.chars();
    let letter = chars
      .next()
      .and_then(Letter::from_char)
      .ok_or_else(malformed)?;

    let suffix = chars.as_str();
    let accidental = if suffix.is_empty() {
      0
    } else if suffix.chars().all(|c| c == '#') {
      suffix.len() as i32
    } else if suffix.chars().all(|c| c == 'b') {
      -(suffix.len() as i32)
    } else {
      return Err(malformed());
    };

    Ok(TpcNote { letter, accidental })
  }
}

impl Display for TpcNote {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.letter.as_char())?;
    let glyph = if self.accidental > 0 { '#' } else { 'b' };
    for _ in 0..self.accidental.abs() {
      write!(f, "{glyph}")?;
    }
    Ok(())
  }
}

/// The natural letter of a TPC note string.
pub fn step(note: &str) -> Result<Letter, TonnetzError> {
  note.parse::<TpcNote>().map(|n| n.letter)
}

/// The signed accidental count of a TPC note string.
pub fn accidental(note: &str) -> Result<i32, TonnetzError> {
  note.parse::<TpcNote>().map(|n| n.accidental)
}

/// The chromatic pitch class of a TPC note string.
///
/// A string whose first character is not a natural letter has no pitch class
/// at all and fails with [`TonnetzError::UndefinedInput`]; a bad accidental
/// suffix is an [`TonnetzError::InvalidFormat`] like everywhere else.
pub fn pitch_class(note: &str) -> Result<PitchClass, TonnetzError> {
  let natural_start = note
    .chars()
    .next()
    .and_then(Letter::from_char)
    .is_some();
  if !natural_start {
    return Err(TonnetzError::UndefinedInput(note.to_string()));
  }
  note.parse::<TpcNote>().map(|n| n.pitch_class())
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_parse_and_accessors() {
    assert_eq!(step("Bb"), Ok(Letter::B));
    assert_eq!(accidental("Bb"), Ok(-1));
    assert_eq!(pitch_class("Bb"), Ok(PitchClass::new(10).unwrap()));

    let fsharp: TpcNote = "F#".parse().unwrap();
    assert_eq!(fsharp, TpcNote::new(Letter::F, 1));

    let bdoubleflat: TpcNote = "Bbb".parse().unwrap();
    assert_eq!(bdoubleflat, TpcNote::new(Letter::B, -2));

    let natural: TpcNote = "C".parse().unwrap();
    assert_eq!(natural, TpcNote::natural(Letter::C));
  }

  #[test]
  fn test_parse_rejects_malformed_strings() {
    for bad in ["", "H", "c", "F#b", "bF", "C##b", "Bb2", "F x"] {
      assert_eq!(
        bad.parse::<TpcNote>(),
        Err(TonnetzError::InvalidFormat(bad.to_string())),
        "expected {bad:?} to be rejected"
      );
    }
  }

  #[test]
  fn test_pitch_class_undefined_for_non_natural_letter() {
    assert_eq!(
      pitch_class("H"),
      Err(TonnetzError::UndefinedInput("H".to_string()))
    );
    assert_eq!(
      pitch_class(""),
      Err(TonnetzError::UndefinedInput(String::new()))
    );
    // bad suffix after a good letter is a format error, not undefined input
    assert_eq!(
      pitch_class("C#b"),
      Err(TonnetzError::InvalidFormat("C#b".to_string()))
    );
  }

  #[test]
  fn test_fifth_number_round_trip() {
    for letter in LETTERS {
      for acc in -3..=3 {
        let note = TpcNote::new(letter, acc);
        assert_eq!(TpcNote::from_fifth_number(note.fifth_number()), note);
      }
    }
  }

  #[test]
  fn test_fifth_number_examples() {
    assert_eq!(TpcNote::new(Letter::B, -1).fifth_number(), -1);
    assert_eq!(
      TpcNote::from_fifth_number(-1),
      TpcNote::new(Letter::B, -1)
    );
    assert_eq!(TpcNote::natural(Letter::F).fifth_number(), 0);
    assert_eq!(TpcNote::new(Letter::F, 1).fifth_number(), 7);
  }

  #[test]
  fn test_pitch_class_invariant_under_twelve_fifths() {
    // +12 fifths is 84 semitones = 7 octaves, so the pitch class must not move
    for n in -30..=30 {
      assert_eq!(
        TpcNote::from_fifth_number(n).pitch_class(),
        TpcNote::from_fifth_number(n + 12).pitch_class()
      );
    }
  }

  #[test]
  fn test_enharmonic_equivalence() {
    let csharp: TpcNote = "C#".parse().unwrap();
    let dflat: TpcNote = "Db".parse().unwrap();
    assert_ne!(csharp, dflat);
    assert_eq!(csharp.pitch_class(), dflat.pitch_class());
  }

  #[test]
  fn test_render() {
    assert_eq!(TpcNote::natural(Letter::C).to_string(), "C");
    assert_eq!(TpcNote::new(Letter::F, 2).to_string(), "F##");
    assert_eq!(TpcNote::new(Letter::B, -2).to_string(), "Bbb");
  }

  #[test]
  fn test_display_round_trip() {
    for letter in LETTERS {
      for acc in -3..=3 {
        let note = TpcNote::new(letter, acc);
        assert_eq!(note.to_string().parse::<TpcNote>(), Ok(note));
      }
    }
  }
}
