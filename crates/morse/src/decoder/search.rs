//! Segmentation Search
//!
//! Depth-first enumeration of every way to split a Morse stream into table patterns.
//! One accumulator string is shared by the whole walk: each branch pushes its decoded
//! character, descends, then truncates back (explicit backtracking).
//!
//! Discovery order:
//! - delimited: the single unit first, then joins of 2, 3, ... units in increasing end index
//! - undelimited: pattern length 1 up to the longest table pattern
//!
//! The search is exponential in the worst case. Callers bound the input length.

use crate::decoder::stream::MorseStream;
use crate::table::{CodeTable, WORD_SPACE};
use crate::validator::UNIT_SEPARATOR;

/// One decode run over a single stream
#[derive(Debug)]
pub struct SegmentationSearch<'t> {
  /// Code table used for pattern lookups
  table: &'t CodeTable,

  /// Completed candidates in discovery order
  candidates: Vec<String>,

  /// Translation built along the current branch
  accumulator: String,
}

impl<'t> SegmentationSearch<'t> {
  /// Creates a search over `table`.
  pub fn new(table: &'t CodeTable) -> Self {
    Self {
      table,
      candidates: Vec::new(),
      accumulator: String::new(),
    }
  }

  /// Runs the search variant matching the stream shape and returns every candidate.
  pub fn run(mut self, stream: &MorseStream<'_>) -> Vec<String> {
    match stream {
      MorseStream::Delimited(units) => self.search_units(units, 0),
      MorseStream::Undelimited(symbols) => self.search_symbols(symbols, 0),
    }
    self.candidates
  }

  /// Unit-level search over a delimited stream.
  fn search_units(&mut self, units: &[&str], index: usize) {
    if index >= units.len() {
      self.candidates.push(self.accumulator.clone());
      return;
    }

    if let Some(character) = self.table.lookup_reverse(units[index]) {
      self.descend(character, |search| search.search_units(units, index + 1));
    }

    // Adjacent units read without their separator. A join longer than every table
    // pattern cannot match, and later joins only grow.
    let max_len = self.table.max_pattern_len();
    let mut joined = String::from(units[index]);
    for end in index + 2..=units.len() {
      joined.push(UNIT_SEPARATOR);
      joined.push_str(units[end - 1]);
      if joined.chars().count() > max_len {
        break;
      }
      if let Some(character) = self.table.lookup_reverse(&joined) {
        self.descend(character, |search| search.search_units(units, end));
      }
    }
  }

  /// Symbol-level search over an undelimited stream.
  ///
  /// A match on the word-space pattern is discarded: an undelimited stream cannot carry
  /// word boundaries.
  fn search_symbols(&mut self, symbols: &[char], index: usize) {
    if index >= symbols.len() {
      self.candidates.push(self.accumulator.clone());
      return;
    }

    let longest = self.table.max_pattern_len().min(symbols.len() - index);
    let mut pattern = String::with_capacity(longest);
    for length in 1..=longest {
      pattern.push(symbols[index + length - 1]);
      match self.table.lookup_reverse(&pattern) {
        Some(WORD_SPACE) | None => {}
        Some(character) => {
          self.descend(character, |search| search.search_symbols(symbols, index + length));
        }
      }
    }
  }

  /// Extends the accumulator with `character`, runs `next`, then backtracks.
  ///
  /// The word-space character is itself a literal space, so it is pushed unchanged.
  fn descend<F>(&mut self, character: char, next: F)
  where
    F: FnOnce(&mut Self),
  {
    let mark = self.accumulator.len();
    self.accumulator.push(character);
    next(self);
    self.accumulator.truncate(mark);
  }
}
