//! Morse stream shapes

use serde::{Deserialize, Serialize};

use crate::validator::UNIT_SEPARATOR;

/// Shape of a Morse stream, decided only by the presence of a unit separator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamShape {
  /// Units separated by single spaces
  Delimited,
  /// A bare run of symbols
  Undelimited,
}

/// Parsed decoder input, borrowed from the caller's string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MorseStream<'a> {
  /// Space-separated units, empty units already dropped
  Delimited(Vec<&'a str>),
  /// Individual symbols
  Undelimited(Vec<char>),
}

impl<'a> MorseStream<'a> {
  /// Parses raw decoder input.
  ///
  /// Returns `None` when nothing but whitespace is left after trimming.
  pub fn parse(morse_text: &'a str) -> Option<Self> {
    let trimmed = morse_text.trim();
    if trimmed.is_empty() {
      return None;
    }

    if trimmed.contains(UNIT_SEPARATOR) {
      let units = trimmed.split(UNIT_SEPARATOR).filter(|unit| !unit.is_empty()).collect();
      Some(Self::Delimited(units))
    } else {
      Some(Self::Undelimited(trimmed.chars().collect()))
    }
  }

  /// Shape of this stream
  pub fn shape(&self) -> StreamShape {
    match self {
      Self::Delimited(_) => StreamShape::Delimited,
      Self::Undelimited(_) => StreamShape::Undelimited,
    }
  }

  /// Number of units (delimited) or symbols (undelimited)
  pub fn len(&self) -> usize {
    match self {
      Self::Delimited(units) => units.len(),
      Self::Undelimited(symbols) => symbols.len(),
    }
  }

  /// Whether the stream has no units or symbols
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
