//! Code Table
//!
//! Bidirectional mapping between characters and Morse patterns.
//! The reverse map is always derived from the forward entries inside the constructor,
//! so the two directions cannot drift apart.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::errors::CodeTableError;

/// Dot symbol
pub const DOT: char = '.';

/// Dash symbol
pub const DASH: char = '-';

/// Character encoded by the word-space pattern
pub const WORD_SPACE: char = ' ';

/// Pattern of the word-space character (also the word separator in delimited streams)
pub const WORD_SPACE_PATTERN: &str = "/";

/// International Morse code for A-Z, 0-9 and the word space.
pub const STANDARD_ENTRIES: [(char, &str); 37] = [
  ('A', ".-"),
  ('B', "-..."),
  ('C', "-.-."),
  ('D', "-.."),
  ('E', "."),
  ('F', "..-."),
  ('G', "--."),
  ('H', "...."),
  ('I', ".."),
  ('J', ".---"),
  ('K', "-.-"),
  ('L', ".-.."),
  ('M', "--"),
  ('N', "-."),
  ('O', "---"),
  ('P', ".--."),
  ('Q', "--.-"),
  ('R', ".-."),
  ('S', "..."),
  ('T', "-"),
  ('U', "..-"),
  ('V', "...-"),
  ('W', ".--"),
  ('X', "-..-"),
  ('Y', "-.--"),
  ('Z', "--.."),
  ('1', ".----"),
  ('2', "..---"),
  ('3', "...--"),
  ('4', "....-"),
  ('5', "....."),
  ('6', "-...."),
  ('7', "--..."),
  ('8', "---.."),
  ('9', "----."),
  ('0', "-----"),
  (WORD_SPACE, WORD_SPACE_PATTERN),
];

/// Shared standard table (built on first use)
static STANDARD: OnceLock<Arc<CodeTable>> = OnceLock::new();

/// Immutable character <-> pattern table
///
/// - `Send + Sync`, never mutated after construction
/// - Characters are stored upper case; lookups fold case
#[derive(Clone, PartialEq, Eq)]
pub struct CodeTable {
  /// Entries in definition order
  entries: Vec<(char, String)>,

  /// Character -> index into `entries`
  forward: HashMap<char, usize>,

  /// Pattern -> character (derived from `entries`)
  reverse: HashMap<String, char>,

  /// Longest pattern in symbols
  max_pattern_len: usize,
}

impl CodeTable {
  /// Returns the shared international table.
  ///
  /// Built once per process and handed out as `Arc`, like a loaded dictionary.
  pub fn standard() -> Arc<CodeTable> {
    STANDARD.get_or_init(|| Arc::new(Self::build(&STANDARD_ENTRIES))).clone()
  }

  /// Builds a table from `(character, pattern)` entries.
  ///
  /// # Errors
  /// - `EmptyPattern` / `InvalidPatternSymbol`: a pattern is not a run of dots and dashes
  ///   (the word-space pattern `/` is accepted as is)
  /// - `DuplicateCharacter`: a character (after upper-casing) appears twice
  /// - `DuplicatePattern`: two characters share a pattern
  pub fn from_entries<I, S>(entries: I) -> Result<Self, CodeTableError>
  where
    I: IntoIterator<Item = (char, S)>,
    S: Into<String>,
  {
    let mut table = Self::empty();

    for (character, pattern) in entries {
      let character = fold_case(character);
      let pattern = pattern.into();
      check_pattern(character, &pattern)?;

      if table.forward.contains_key(&character) {
        return Err(CodeTableError::DuplicateCharacter { character });
      }
      if let Some(&first) = table.reverse.get(&pattern) {
        return Err(CodeTableError::DuplicatePattern {
          pattern,
          first,
          second: character,
        });
      }

      table.insert(character, pattern);
    }

    Ok(table)
  }

  /// Builds a table from entries known to be well formed.
  fn build(entries: &[(char, &str)]) -> Self {
    let mut table = Self::empty();
    for &(character, pattern) in entries {
      table.insert(character, pattern.to_string());
    }
    debug_assert!(table.verify().is_ok(), "standard table must be a bijection");
    table
  }

  fn empty() -> Self {
    Self {
      entries: Vec::new(),
      forward: HashMap::new(),
      reverse: HashMap::new(),
      max_pattern_len: 0,
    }
  }

  fn insert(&mut self, character: char, pattern: String) {
    self.max_pattern_len = self.max_pattern_len.max(pattern.chars().count());
    self.forward.insert(character, self.entries.len());
    self.reverse.insert(pattern.clone(), character);
    self.entries.push((character, pattern));
  }

  /// Looks up the pattern of a character (case-insensitive).
  pub fn lookup_forward(&self, character: char) -> Option<&str> {
    self
      .forward
      .get(&fold_case(character))
      .map(|&idx| self.entries[idx].1.as_str())
  }

  /// Looks up the character of a pattern.
  pub fn lookup_reverse(&self, pattern: &str) -> Option<char> {
    self.reverse.get(pattern).copied()
  }

  /// Returns the supported characters in table order.
  pub fn supported_characters(&self) -> Vec<char> {
    self.entries.iter().map(|(c, _)| *c).collect()
  }

  /// Iterates over `(character, pattern)` in table order.
  pub fn entries(&self) -> impl Iterator<Item = (char, &str)> + '_ {
    self.entries.iter().map(|(c, p)| (*c, p.as_str()))
  }

  /// Length of the longest pattern (bounds the per-position fan-out of the search)
  pub fn max_pattern_len(&self) -> usize {
    self.max_pattern_len
  }

  /// Number of entries
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Whether the table has no entries
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Checks that every character survives `reverse(forward(c)) == c`.
  ///
  /// # Errors
  /// `InconsistentReverse` naming the first character that fails.
  pub fn verify(&self) -> Result<(), CodeTableError> {
    for (character, pattern) in self.entries() {
      if self.lookup_reverse(pattern) != Some(character) {
        return Err(CodeTableError::InconsistentReverse { character });
      }
    }
    Ok(())
  }
}

/// Only shows size information; the full table is long.
impl fmt::Debug for CodeTable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CodeTable")
      .field("len", &self.entries.len())
      .field("max_pattern_len", &self.max_pattern_len)
      .finish()
  }
}

/// Upper-cases a character when it maps to exactly one upper-case character.
fn fold_case(character: char) -> char {
  let mut upper = character.to_uppercase();
  match (upper.next(), upper.next()) {
    (Some(folded), None) => folded,
    _ => character,
  }
}

fn check_pattern(character: char, pattern: &str) -> Result<(), CodeTableError> {
  if pattern.is_empty() {
    return Err(CodeTableError::EmptyPattern { character });
  }
  if pattern == WORD_SPACE_PATTERN {
    return Ok(());
  }
  match pattern.chars().find(|&s| s != DOT && s != DASH) {
    Some(symbol) => Err(CodeTableError::InvalidPatternSymbol {
      character,
      pattern: pattern.to_string(),
      symbol,
    }),
    None => Ok(()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn standard_table_has_37_entries() {
    let table = CodeTable::standard();
    assert_eq!(table.len(), 37);
    assert!(!table.is_empty());
    assert_eq!(table.max_pattern_len(), 5);
  }

  #[test]
  fn standard_table_is_shared() {
    let a = CodeTable::standard();
    let b = CodeTable::standard();
    assert!(Arc::ptr_eq(&a, &b));
  }

  #[test]
  fn standard_table_is_bijection() {
    let table = CodeTable::standard();
    assert!(table.verify().is_ok());
    for (character, pattern) in table.entries() {
      assert_eq!(table.lookup_reverse(pattern), Some(character));
    }
  }

  #[test]
  fn known_mappings() {
    let table = CodeTable::standard();
    assert_eq!(table.lookup_forward('A'), Some(".-"));
    assert_eq!(table.lookup_forward('B'), Some("-..."));
    assert_eq!(table.lookup_forward('S'), Some("..."));
    assert_eq!(table.lookup_forward('O'), Some("---"));
    assert_eq!(table.lookup_forward('1'), Some(".----"));
    assert_eq!(table.lookup_forward('0'), Some("-----"));
    assert_eq!(table.lookup_forward(' '), Some("/"));
  }

  #[test]
  fn forward_lookup_folds_case() {
    let table = CodeTable::standard();
    assert_eq!(table.lookup_forward('q'), table.lookup_forward('Q'));
  }

  #[test]
  fn lookups_outside_domain_return_none() {
    let table = CodeTable::standard();
    assert_eq!(table.lookup_forward('@'), None);
    assert_eq!(table.lookup_forward('é'), None);
    assert_eq!(table.lookup_reverse("......"), None);
    assert_eq!(table.lookup_reverse(".- -"), None);
    assert_eq!(table.lookup_reverse(""), None);
  }

  #[test]
  fn supported_characters_in_table_order() {
    let chars = CodeTable::standard().supported_characters();
    assert_eq!(chars.len(), 37);
    assert_eq!(chars.first(), Some(&'A'));
    assert_eq!(chars.last(), Some(&' '));
    for c in ('A'..='Z').chain('0'..='9') {
      assert!(chars.contains(&c), "missing {c:?}");
    }
  }

  #[test]
  fn from_entries_matches_standard() {
    let built = CodeTable::from_entries(STANDARD_ENTRIES).unwrap();
    assert_eq!(built, *CodeTable::standard());
  }

  #[test]
  fn from_entries_folds_characters_to_upper_case() {
    let table = CodeTable::from_entries([('a', ".-"), ('b', "-...")]).unwrap();
    assert_eq!(table.supported_characters(), vec!['A', 'B']);
    assert_eq!(table.lookup_reverse(".-"), Some('A'));
  }

  #[test]
  fn from_entries_rejects_empty_pattern() {
    let err = CodeTable::from_entries([('A', "")]).unwrap_err();
    assert_eq!(err, CodeTableError::EmptyPattern { character: 'A' });
  }

  #[test]
  fn from_entries_rejects_invalid_symbol() {
    let err = CodeTable::from_entries([('A', ".x-")]).unwrap_err();
    match err {
      CodeTableError::InvalidPatternSymbol { character, symbol, .. } => {
        assert_eq!(character, 'A');
        assert_eq!(symbol, 'x');
      }
      _ => panic!("expected InvalidPatternSymbol error"),
    }
  }

  #[test]
  fn from_entries_rejects_embedded_separator() {
    let err = CodeTable::from_entries([('A', ". -")]).unwrap_err();
    assert!(matches!(err, CodeTableError::InvalidPatternSymbol { symbol: ' ', .. }));
  }

  #[test]
  fn from_entries_rejects_duplicate_character() {
    let err = CodeTable::from_entries([('A', ".-"), ('a', "-.")]).unwrap_err();
    assert_eq!(err, CodeTableError::DuplicateCharacter { character: 'A' });
  }

  #[test]
  fn from_entries_rejects_shared_pattern() {
    let err = CodeTable::from_entries([('A', ".-"), ('B', ".-")]).unwrap_err();
    assert_eq!(
      err,
      CodeTableError::DuplicatePattern {
        pattern: ".-".to_string(),
        first: 'A',
        second: 'B',
      }
    );
  }

  #[test]
  fn debug_shows_only_sizes() {
    let debug = format!("{:?}", CodeTable::standard());
    assert_eq!(debug, "CodeTable { len: 37, max_pattern_len: 5 }");
  }
}
