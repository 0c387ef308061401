// crates/morse/src/service.rs

//! MorseService: integrated facade of the morse crate.
//!
//! - Code table (shared, immutable)
//! - Raw engine operations: `encode`, `decode`, `is_valid_morse`, `supported_characters`
//! - Gated translations that turn engine sentinels into `TranslateError`s
//!
//! A transport layer (HTTP, CLI, ...) only needs to know this struct.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::MorseConfig;
use crate::decoder;
use crate::encoder;
use crate::errors::{MorseResult, TranslateError};
use crate::models::model_definition::STATUS_HEALTHY;
use crate::models::{EngineInfo, TranslationKind, TranslationOutput, TranslationReport};
use crate::table::CodeTable;
use crate::validator;

/// Integrated facade of the morse crate.
///
/// Stateless apart from the shared table and the limits, so it is `Clone + Send + Sync` and
/// can serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct MorseService {
  /// Shared code table
  table: Arc<CodeTable>,

  /// Bound on English input (characters)
  max_text_length: usize,

  /// Bound on Morse input (characters)
  max_morse_length: usize,
}

impl MorseService {
  /// Initialization with the standard table.
  ///
  /// # Errors
  /// Invalid configuration (`ConfigError`).
  pub fn init(config: &MorseConfig) -> MorseResult<Self> {
    Self::with_table(CodeTable::standard(), config)
  }

  /// Initialization with a caller-supplied table.
  ///
  /// # Errors
  /// Invalid configuration (`ConfigError`).
  pub fn with_table(table: Arc<CodeTable>, config: &MorseConfig) -> MorseResult<Self> {
    // ConfigError converts into MorseError via #[from]
    config.validate()?;

    debug!(
      table_len = table.len(),
      max_text_length = config.max_text_length(),
      max_morse_length = config.max_morse_length(),
      "Initialized MorseService"
    );

    Ok(Self {
      table,
      max_text_length: config.max_text_length(),
      max_morse_length: config.max_morse_length(),
    })
  }

  /// Code table in use
  pub fn table(&self) -> &CodeTable {
    &self.table
  }

  /// Raw encode (never fails, unsupported characters are dropped).
  pub fn encode(&self, text: &str) -> String {
    encoder::encode(&self.table, text)
  }

  /// Raw decode (all candidates, unfiltered, in discovery order).
  pub fn decode(&self, morse_text: &str) -> Vec<String> {
    decoder::decode(&self.table, morse_text)
  }

  /// Whether `text` only contains Morse alphabet symbols.
  pub fn is_valid_morse(&self, text: &str) -> bool {
    validator::is_valid_morse(text)
  }

  /// Characters the encoder understands, in table order.
  pub fn supported_characters(&self) -> Vec<char> {
    self.table.supported_characters()
  }

  /// Health / capability information.
  pub fn info(&self) -> EngineInfo {
    let supported_characters = self.supported_characters();
    EngineInfo {
      status: STATUS_HEALTHY.to_string(),
      version: env!("CARGO_PKG_VERSION").to_string(),
      total_count: supported_characters.len(),
      supported_characters,
    }
  }

  /// Translates English text to Morse code.
  ///
  /// # Errors
  /// - `EmptyInput`: nothing left after trimming
  /// - `TextTooLong`: more than `max_text_length` characters
  /// - `NothingTranslatable`: no character exists in the table
  pub fn translate_english(&self, text: &str) -> MorseResult<TranslationReport> {
    let input = text.trim();
    let character_count = self.check_length(input, self.max_text_length)?;

    let morse = self.encode(input);
    if morse.is_empty() {
      warn!(character_count, "No translatable characters in input");
      return Err(TranslateError::NothingTranslatable.into());
    }

    Ok(TranslationReport {
      input: input.to_string(),
      output: TranslationOutput::Single(morse),
      translation_type: TranslationKind::EnglishToMorse,
      character_count,
    })
  }

  /// Translates Morse code to English.
  ///
  /// Empty and duplicate candidates are dropped, keeping the first occurrence.
  ///
  /// # Errors
  /// - `EmptyInput`: nothing left after trimming
  /// - `TextTooLong`: more than `max_morse_length` characters
  /// - `MalformedMorse`: a symbol outside `.`, `-`, ` `, `/`
  /// - `Unmatchable`: valid symbols but no non-empty candidate
  pub fn translate_morse(&self, morse_text: &str) -> MorseResult<TranslationReport> {
    let input = morse_text.trim();
    let character_count = self.check_length(input, self.max_morse_length)?;

    if let Some((position, symbol)) = validator::first_invalid_symbol(input) {
      warn!(position, ?symbol, "Rejected malformed Morse input");
      return Err(TranslateError::MalformedMorse { position, symbol }.into());
    }

    let candidates = distinct_non_empty(self.decode(input));
    if candidates.is_empty() {
      warn!(character_count, "No decomposition of Morse input");
      return Err(TranslateError::Unmatchable.into());
    }

    Ok(TranslationReport {
      input: input.to_string(),
      output: TranslationOutput::from_candidates(candidates),
      translation_type: TranslationKind::MorseToEnglish,
      character_count,
    })
  }

  /// Checks a trimmed input against a bound and returns its length in characters.
  fn check_length(&self, input: &str, max: usize) -> MorseResult<usize> {
    if input.is_empty() {
      return Err(TranslateError::EmptyInput.into());
    }

    let actual = input.chars().count();
    if actual > max {
      warn!(actual, max, "Rejected oversized input");
      return Err(TranslateError::TextTooLong { actual, max }.into());
    }

    Ok(actual)
  }
}

/// Drops empty candidates and duplicates (first occurrence wins).
fn distinct_non_empty(candidates: Vec<String>) -> Vec<String> {
  let mut seen = HashSet::new();
  candidates
    .into_iter()
    .filter(|candidate| !candidate.is_empty() && seen.insert(candidate.clone()))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::MorseError;

  fn service() -> MorseService {
    MorseService::init(&MorseConfig::default()).unwrap()
  }

  fn translate_error(result: MorseResult<TranslationReport>) -> TranslateError {
    match result.unwrap_err() {
      MorseError::Translate(err) => err,
      other => panic!("expected TranslateError, got {other:?}"),
    }
  }

  #[test]
  fn distinct_non_empty_keeps_first_occurrence() {
    let filtered = distinct_non_empty(vec![
      "B".to_string(),
      String::new(),
      "A".to_string(),
      "B".to_string(),
    ]);
    assert_eq!(filtered, vec!["B", "A"]);
  }

  #[test]
  fn init_rejects_invalid_config() {
    let mut config = MorseConfig::default();
    config.limits.max_morse_length = 0;

    let err = MorseService::init(&config).unwrap_err();
    assert!(matches!(err, MorseError::Config(_)));
  }

  #[test]
  fn translate_english_trims_and_reports() {
    let report = service().translate_english("  hello  ").unwrap();
    assert_eq!(report.input, "hello");
    assert_eq!(
      report.output,
      TranslationOutput::Single(".... . .-.. .-.. ---".to_string())
    );
    assert_eq!(report.translation_type, TranslationKind::EnglishToMorse);
    assert_eq!(report.character_count, 5);
  }

  #[test]
  fn translate_english_rejects_whitespace() {
    let err = translate_error(service().translate_english("   "));
    assert_eq!(err, TranslateError::EmptyInput);
  }

  #[test]
  fn translate_english_rejects_untranslatable() {
    let err = translate_error(service().translate_english("@#$%"));
    assert_eq!(err, TranslateError::NothingTranslatable);
  }

  #[test]
  fn translate_english_enforces_limit() {
    let err = translate_error(service().translate_english(&"A".repeat(1_001)));
    assert_eq!(
      err,
      TranslateError::TextTooLong {
        actual: 1_001,
        max: 1_000
      }
    );
    assert!(service().translate_english(&"A".repeat(1_000)).is_ok());
  }

  #[test]
  fn translate_morse_single_candidate() {
    let report = service().translate_morse("... --- ...").unwrap();
    assert_eq!(report.output, TranslationOutput::Single("SOS".to_string()));
    assert_eq!(report.translation_type, TranslationKind::MorseToEnglish);
    assert_eq!(report.character_count, 11);
  }

  #[test]
  fn translate_morse_multiple_candidates() {
    let report = service().translate_morse(".-").unwrap();
    assert_eq!(
      report.output,
      TranslationOutput::Multiple(vec!["ET".to_string(), "A".to_string()])
    );
  }

  #[test]
  fn translate_morse_rejects_malformed() {
    let err = translate_error(service().translate_morse(".- -... X"));
    assert_eq!(
      err,
      TranslateError::MalformedMorse {
        position: 8,
        symbol: 'X'
      }
    );
  }

  #[test]
  fn translate_morse_distinguishes_unmatchable() {
    let err = translate_error(service().translate_morse(".- ------"));
    assert_eq!(err, TranslateError::Unmatchable);

    let err = translate_error(service().translate_morse("/"));
    assert_eq!(err, TranslateError::Unmatchable);
  }

  #[test]
  fn translate_morse_rejects_empty() {
    let err = translate_error(service().translate_morse(" "));
    assert_eq!(err, TranslateError::EmptyInput);
  }

  #[test]
  fn translate_morse_enforces_limit() {
    let config = MorseConfig {
      limits: crate::config::LimitsConfig {
        max_text_length: 10,
        max_morse_length: 4,
      },
      ..MorseConfig::default()
    };
    let service = MorseService::init(&config).unwrap();

    let err = translate_error(service.translate_morse("....."));
    assert_eq!(err, TranslateError::TextTooLong { actual: 5, max: 4 });
    assert!(service.translate_morse("....").is_ok());
  }

  #[test]
  fn info_lists_supported_characters() {
    let info = service().info();
    assert_eq!(info.status, "healthy");
    assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(info.total_count, 37);
    assert_eq!(info.supported_characters.len(), 37);
  }

  #[test]
  fn custom_table_flows_through() {
    let table = CodeTable::from_entries([('A', "."), ('B', "-")]).unwrap();
    let service = MorseService::with_table(Arc::new(table), &MorseConfig::default()).unwrap();

    assert_eq!(service.encode("ab c"), ". -");
    assert_eq!(service.decode(".-"), vec!["AB"]);
    assert_eq!(service.supported_characters(), vec!['A', 'B']);
  }
}
