//! Error definitions
//!
//! The engine functions themselves (`encode`, `decode`, `is_valid_morse`, table lookups) are
//! total and never return these types. Errors come from building a code table, from loading
//! configuration, and from the caller-side gating done by `MorseService`.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while building a `CodeTable` from entries
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CodeTableError {
  /// A character was mapped to an empty pattern
  #[error("empty Morse pattern for character {character:?}")]
  EmptyPattern {
    /// Character whose pattern is empty
    character: char,
  },

  /// A pattern contains something other than dots and dashes
  #[error("pattern {pattern:?} for character {character:?} contains invalid symbol {symbol:?}")]
  InvalidPatternSymbol {
    /// Character being defined
    character: char,
    /// Offending pattern
    pattern: String,
    /// First symbol outside the pattern alphabet
    symbol: char,
  },

  /// The same character (after case folding) was defined twice
  #[error("character {character:?} is defined more than once")]
  DuplicateCharacter {
    /// Duplicated character
    character: char,
  },

  /// Two characters share a pattern, so the table would not be a bijection
  #[error("pattern {pattern:?} is shared by {first:?} and {second:?}")]
  DuplicatePattern {
    /// Shared pattern
    pattern: String,
    /// Character that claimed the pattern first
    first: char,
    /// Character that tried to claim it again
    second: char,
  },

  /// Forward and reverse maps disagree
  #[error("reverse mapping is inconsistent for character {character:?}")]
  InconsistentReverse {
    /// Character whose round trip failed
    character: char,
  },
}

/// Configuration (`MorseConfig`) errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// limits.max_text_length < 1
  #[error("limits.max_text_length must be at least 1: actual={actual}")]
  InvalidMaxTextLength {
    /// Value actually configured
    actual: usize,
  },

  /// limits.max_morse_length < 1
  #[error("limits.max_morse_length must be at least 1: actual={actual}")]
  InvalidMaxMorseLength {
    /// Value actually configured
    actual: usize,
  },

  /// An environment variable could not be parsed
  #[error("environment variable {key} has an invalid value: {value:?}")]
  InvalidEnvValue {
    /// Variable name
    key: String,
    /// Raw value found in the environment
    value: String,
  },

  /// Reading the configuration file failed
  #[error("failed to read config file: path={path:?}, error={source}")]
  Read {
    /// Path being read
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// The configuration file is not valid JSON for `MorseConfig`
  #[error("failed to parse config file: path={path:?}, error={source}")]
  Parse {
    /// Path being parsed
    path: PathBuf,
    /// Underlying JSON error
    #[source]
    source: Arc<serde_json::Error>,
  },
}

/// Caller-facing translation outcomes that are not a successful result
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TranslateError {
  /// Input is empty or whitespace only
  #[error("input is empty")]
  EmptyInput,

  /// Input exceeds the configured length limit
  #[error("input is too long: {actual} characters (max: {max})")]
  TextTooLong {
    /// Length of the input in characters
    actual: usize,
    /// Configured maximum
    max: usize,
  },

  /// No character of the English input exists in the code table
  #[error("no translatable characters found in input text")]
  NothingTranslatable,

  /// Morse input contains a symbol outside `.`, `-`, ` `, `/`
  #[error(
    "invalid Morse code symbol {symbol:?} at position {position}; \
     use only dots (.), dashes (-), spaces, and slashes (/)"
  )]
  MalformedMorse {
    /// Character index of the first offending symbol
    position: usize,
    /// The offending symbol
    symbol: char,
  },

  /// Morse input is well formed but no decomposition yields a non-empty candidate
  #[error("no valid English translations found for the provided Morse code")]
  Unmatchable,
}

/// Unified error
/// Public APIs of this crate return this error
/// Use as `MorseResult<T>` = `Result<T, MorseError>`
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum MorseError {
  /// Code table construction error
  #[error(transparent)]
  CodeTable(#[from] CodeTableError),

  /// Configuration error
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// Translation gating error
  #[error(transparent)]
  Translate(#[from] TranslateError),

  /// A global tracing subscriber could not be installed
  #[error("failed to initialize logging: {reason}")]
  LoggingInit {
    /// Message from tracing-subscriber
    reason: String,
  },
}

/// Standard Result type alias for the morse crate
pub type MorseResult<T> = Result<T, MorseError>;
