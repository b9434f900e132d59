//! Flat note-distribution support for the layer that feeds the walker.
//!
//! The data-loading layer hands the core a flat collection of notes with
//! weights (occurrence counts or summed durations). The core only uses it to
//! pick a default grid center, and to respell pitch classes as TPC names
//! through an explicit convention table.

use serde::{Deserialize, Serialize};

use crate::error::TonnetzError;
use crate::harmony::{PitchClass, TpcNote};

/// One row of a note distribution: a note identity and its weight (an
/// occurrence count or a total duration, the caller decides which).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoteWeight<N> {
  pub note: N,
  pub weight: f64,
}

/// Picks the note with the single largest weight, the default grid center.
///
/// Returns `None` when the collection is empty or the maximum weight is
/// shared by more than one row; ties must be resolved by the caller before
/// asking the core.
pub fn most_frequent<N: Copy + PartialEq>(notes: &[NoteWeight<N>]) -> Option<N> {
  let best = notes.iter().max_by(|a, b| a.weight.total_cmp(&b.weight))?;
  let tied = notes.iter().filter(|n| n.weight == best.weight).count();
  if tied > 1 {
    log::warn!("{tied} notes tie for the largest weight, refusing to pick a grid center");
    return None;
  }
  Some(best.note)
}

/// A pitch-class → TPC respelling convention: index i holds the spelling
/// used for pitch class i.
///
/// Enharmonic choice is genuinely a convention, so the table is supplied by
/// the caller and validated here; every spelling must actually map back to
/// the pitch class it stands for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellingTable([TpcNote; 12]);

impl SpellingTable {
  pub fn new(spellings: [TpcNote; 12]) -> Result<SpellingTable, TonnetzError> {
    for (i, note) in spellings.iter().enumerate() {
      if usize::from(note.pitch_class().get()) != i {
        return Err(TonnetzError::InvalidTableDefinition(format!(
          "{note} spells pitch class {}, but sits at index {i}",
          note.pitch_class()
        )));
      }
    }
    Ok(SpellingTable(spellings))
  }

  pub fn from_names(names: &[&str; 12]) -> Result<SpellingTable, TonnetzError> {
    let mut spellings = [TpcNote::natural(crate::harmony::Letter::C); 12];
    for (i, name) in names.iter().enumerate() {
      spellings[i] = name
        .parse()
        .map_err(|_| TonnetzError::InvalidTableDefinition(format!("bad note name {name:?}")))?;
    }
    SpellingTable::new(spellings)
  }

  pub fn spell(&self, pc: PitchClass) -> TpcNote {
    self.0[usize::from(pc.get())]
  }
}

impl Default for SpellingTable {
  /// The flat-side convention: C, Db, D, Eb, E, F, Gb, G, Ab, A, Bb, B.
  fn default() -> Self {
    SpellingTable::from_names(&[
      "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
    ])
    .expect("the default spelling table is valid")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::harmony::Letter;
  use pretty_assertions::assert_eq;

  fn weights(rows: &[(&str, f64)]) -> Vec<NoteWeight<TpcNote>> {
    rows
      .iter()
      .map(|(name, weight)| NoteWeight {
        note: name.parse().unwrap(),
        weight: *weight,
      })
      .collect()
  }

  #[test]
  fn test_most_frequent_picks_the_unique_max() {
    let rows = weights(&[("C", 12.0), ("G", 30.5), ("Bb", 2.0)]);
    assert_eq!(most_frequent(&rows), Some("G".parse().unwrap()));
  }

  #[test]
  fn test_most_frequent_refuses_ties() {
    let rows = weights(&[("C", 30.5), ("G", 30.5), ("Bb", 2.0)]);
    assert_eq!(most_frequent(&rows), None);
  }

  #[test]
  fn test_most_frequent_of_nothing() {
    assert_eq!(most_frequent::<TpcNote>(&[]), None);
  }

  #[test]
  fn test_default_spelling_table() {
    let table = SpellingTable::default();
    assert_eq!(
      table.spell(PitchClass::new(10).unwrap()),
      TpcNote::new(Letter::B, -1)
    );
    assert_eq!(
      table.spell(PitchClass::new(6).unwrap()),
      TpcNote::new(Letter::G, -1)
    );
    // every pitch class spells back to itself
    for n in 0..12 {
      let pc = PitchClass::new(n).unwrap();
      assert_eq!(table.spell(pc).pitch_class(), pc);
    }
  }

  #[test]
  fn test_sharp_side_table_is_also_valid() {
    let table = SpellingTable::from_names(&[
      "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
    ])
    .unwrap();
    assert_eq!(
      table.spell(PitchClass::new(10).unwrap()),
      TpcNote::new(Letter::A, 1)
    );
  }

  #[test]
  fn test_misplaced_spelling_is_rejected() {
    let result = SpellingTable::from_names(&[
      "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "B", "Bb",
    ]);
    assert!(matches!(
      result,
      Err(TonnetzError::InvalidTableDefinition(_))
    ));
  }

  #[test]
  fn test_unparseable_spelling_is_rejected() {
    let result = SpellingTable::from_names(&[
      "C", "Xb", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
    ]);
    assert!(matches!(
      result,
      Err(TonnetzError::InvalidTableDefinition(_))
    ));
  }
}
