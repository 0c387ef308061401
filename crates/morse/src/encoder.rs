//! English -> Morse encoder

use tracing::{debug, trace};

use crate::table::CodeTable;

/// Separator placed between the patterns of consecutive characters
const PATTERN_SEPARATOR: &str = " ";

/// Encodes `text` into a delimited Morse stream.
///
/// - Case is folded to upper case before lookup
/// - Characters missing from the table are skipped silently (no placeholder)
/// - Every literal space becomes its own word-space pattern `/`
///
/// Empty input, or input with no supported character, gives an empty string.
pub fn encode(table: &CodeTable, text: &str) -> String {
  let normalized = text.to_uppercase();

  let mut patterns = Vec::with_capacity(normalized.len());
  let mut skipped = 0usize;
  for character in normalized.chars() {
    match table.lookup_forward(character) {
      Some(pattern) => patterns.push(pattern),
      None => {
        trace!(?character, "Skipping unsupported character");
        skipped += 1;
      }
    }
  }

  debug!(
    input_chars = normalized.chars().count(),
    encoded = patterns.len(),
    skipped,
    "Encoded text"
  );

  patterns.join(PATTERN_SEPARATOR)
}
