//! Data Model Definition
//!
//! Serializable results handed to whatever transport sits on top of `MorseService`.

use serde::{Deserialize, Serialize};

/// Status reported by a working engine
pub const STATUS_HEALTHY: &str = "healthy";

/// Direction of a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationKind {
  /// English text to a delimited Morse stream
  EnglishToMorse,
  /// Morse stream to English candidates
  MorseToEnglish,
}

/// Translation output
///
/// One candidate serializes as a plain string, several as an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationOutput {
  /// Exactly one result
  Single(String),
  /// Two or more candidates in discovery order
  Multiple(Vec<String>),
}

impl TranslationOutput {
  /// Wraps candidates, collapsing a single candidate into `Single`.
  pub fn from_candidates(mut candidates: Vec<String>) -> Self {
    if candidates.len() == 1 {
      Self::Single(candidates.remove(0))
    } else {
      Self::Multiple(candidates)
    }
  }

  /// Borrowed view of every candidate
  pub fn candidates(&self) -> Vec<&str> {
    match self {
      Self::Single(text) => vec![text.as_str()],
      Self::Multiple(texts) => texts.iter().map(String::as_str).collect(),
    }
  }

  /// Number of candidates
  pub fn len(&self) -> usize {
    match self {
      Self::Single(_) => 1,
      Self::Multiple(texts) => texts.len(),
    }
  }

  /// Whether there is no candidate at all
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// Result of a gated translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationReport {
  /// Trimmed input that was translated
  pub input: String,

  /// Translation result(s)
  pub output: TranslationOutput,

  /// Direction
  pub translation_type: TranslationKind,

  /// Length of `input` in characters
  pub character_count: usize,
}

/// Capability information (health / supported characters)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineInfo {
  /// Always `"healthy"` for a constructed service
  pub status: String,

  /// Crate version
  pub version: String,

  /// Characters accepted by the encoder, in table order
  pub supported_characters: Vec<char>,

  /// Number of supported characters
  pub total_count: usize,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn single_candidate_collapses() {
    let output = TranslationOutput::from_candidates(vec!["SOS".to_string()]);
    assert_eq!(output, TranslationOutput::Single("SOS".to_string()));
    assert_eq!(output.len(), 1);
    assert_eq!(output.candidates(), vec!["SOS"]);
  }

  #[test]
  fn several_candidates_stay_a_list() {
    let output = TranslationOutput::from_candidates(vec!["ET".to_string(), "A".to_string()]);
    assert_eq!(output.len(), 2);
    assert!(!output.is_empty());
    assert_eq!(output.candidates(), vec!["ET", "A"]);
  }

  #[test]
  fn report_serializes_like_the_wire_format() {
    let report = TranslationReport {
      input: ".-".to_string(),
      output: TranslationOutput::Multiple(vec!["ET".to_string(), "A".to_string()]),
      translation_type: TranslationKind::MorseToEnglish,
      character_count: 2,
    };
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "input": ".-",
        "output": ["ET", "A"],
        "translation_type": "morse_to_english",
        "character_count": 2
      })
    );
  }

  #[test]
  fn single_output_serializes_as_string() {
    let json = serde_json::to_string(&TranslationOutput::Single("HELLO".to_string())).unwrap();
    assert_eq!(json, "\"HELLO\"");
  }

  #[test]
  fn report_round_trips_through_json() {
    let report = TranslationReport {
      input: "SOS".to_string(),
      output: TranslationOutput::Single("... --- ...".to_string()),
      translation_type: TranslationKind::EnglishToMorse,
      character_count: 3,
    };
    let json = serde_json::to_string(&report).unwrap();
    let back: TranslationReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
  }

  #[test]
  fn engine_info_serializes_characters_as_strings() {
    let info = EngineInfo {
      status: STATUS_HEALTHY.to_string(),
      version: "0.1.0".to_string(),
      supported_characters: vec!['A', ' '],
      total_count: 2,
    };
    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["supported_characters"], serde_json::json!(["A", " "]));
    assert_eq!(json["total_count"], 2);
  }
}
