//! Morse alphabet validation
//!
//! A pure character-class screen. It says nothing about whether the text segments into
//! real letters; that is the decoder's job.

use crate::table::{DASH, DOT};

/// Separator between letter units in a delimited stream
pub const UNIT_SEPARATOR: char = ' ';

/// Separator between words in a delimited stream
pub const WORD_SEPARATOR: char = '/';

/// Every symbol that may appear in a Morse stream
pub const MORSE_ALPHABET: [char; 4] = [DOT, DASH, UNIT_SEPARATOR, WORD_SEPARATOR];

/// Whether `symbol` belongs to the Morse alphabet
pub fn is_morse_symbol(symbol: char) -> bool {
  MORSE_ALPHABET.contains(&symbol)
}

/// Returns true iff every character of `text` is `.`, `-`, ` ` or `/`.
///
/// The empty string is valid.
pub fn is_valid_morse(text: &str) -> bool {
  text.chars().all(is_morse_symbol)
}

/// Finds the first character outside the Morse alphabet.
///
/// Returns `(character index, symbol)`.
pub fn first_invalid_symbol(text: &str) -> Option<(usize, char)> {
  text.chars().enumerate().find(|&(_, symbol)| !is_morse_symbol(symbol))
}
