use error_stack::Context;
use std::fmt::Display;

/// Errors produced by the tonnetz core.
///
/// All of these indicate a caller contract violation; none are transient,
/// and there is no retry semantics anywhere in the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TonnetzError {
  /// A note string does not parse as tonal pitch class notation.
  InvalidFormat(String),

  /// A value that is not a natural note letter reached pitch class conversion.
  UndefinedInput(String),

  /// The requested grid center is outside the valid domain for the display mode.
  InvalidCenter(String),

  /// A pitch-class spelling table is malformed.
  InvalidTableDefinition(String),
}

impl Context for TonnetzError {}

impl Display for TonnetzError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use TonnetzError::*;
    match self {
      InvalidFormat(note) => write!(f, "not a valid tpc note string: {note:?}"),

      UndefinedInput(val) => write!(f, "pitch class is undefined for input: {val:?}"),

      InvalidCenter(center) => write!(
        f,
        "invalid grid center {center:?} for the requested display mode"
      ),

      InvalidTableDefinition(msg) => write!(f, "invalid spelling table: {msg}"),
    }
  }
}
