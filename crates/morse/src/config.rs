// crates/morse/src/config.rs

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;

use crate::errors::ConfigError;

/// Default bound on English input, in characters
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 1_000;

/// Default bound on Morse input, in characters
///
/// Decoding is exponential in the worst case, so Morse input is always bounded before it
/// reaches the search.
pub const DEFAULT_MAX_MORSE_LENGTH: usize = 5_000;

/// Environment variable overriding `limits.max_text_length`
pub const ENV_MAX_TEXT_LENGTH: &str = "MORSE_MAX_TEXT_LENGTH";

/// Environment variable overriding `limits.max_morse_length`
pub const ENV_MAX_MORSE_LENGTH: &str = "MORSE_MAX_MORSE_LENGTH";

/// Environment variable overriding `logging.level`
pub const ENV_LOG_LEVEL: &str = "MORSE_LOG_LEVEL";

/// Top-level configuration for the morse service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MorseConfig {
  /// [limits] section
  pub limits: LimitsConfig,
  /// [logging] section
  pub logging: LoggingConfig,
}

/// [limits] section configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
  /// Maximum English input length (characters, after trimming)
  pub max_text_length: usize,
  /// Maximum Morse input length (characters, after trimming)
  pub max_morse_length: usize,
}

impl Default for LimitsConfig {
  fn default() -> Self {
    Self {
      max_text_length: DEFAULT_MAX_TEXT_LENGTH,
      max_morse_length: DEFAULT_MAX_MORSE_LENGTH,
    }
  }
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  ///error
  Error,
}

impl LogLevel {
  /// Directive string understood by `EnvFilter`
  pub fn as_str(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

impl fmt::Display for LogLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for LogLevel {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "trace" => Ok(Self::Trace),
      "debug" => Ok(Self::Debug),
      "info" => Ok(Self::Info),
      "warn" => Ok(Self::Warn),
      "error" => Ok(Self::Error),
      _ => Err(format!(
        "Unknown log level: {}. Valid values: trace, debug, info, warn, error",
        s
      )),
    }
  }
}

// ===== Loading =====

impl MorseConfig {
  /// Loads a JSON configuration file.
  ///
  /// Missing sections and fields fall back to their defaults.
  ///
  /// # Errors
  /// `ConfigError::Read` if the file cannot be read, `ConfigError::Parse` if it is not a
  /// valid configuration.
  pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;

    serde_json::from_str(&raw).map_err(|e| ConfigError::Parse {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })
  }

  /// Loads configuration from environment variables on top of the defaults.
  ///
  /// - `MORSE_MAX_TEXT_LENGTH`
  /// - `MORSE_MAX_MORSE_LENGTH`
  /// - `MORSE_LOG_LEVEL`
  ///
  /// # Errors
  /// `ConfigError::InvalidEnvValue` if a variable is set but cannot be parsed.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_vars(|key| std::env::var(key).ok())
  }

  /// Same as [`from_env`](Self::from_env) with an explicit variable lookup.
  ///
  /// `set_var` is unsafe in Rust 2024, so tests go through here instead.
  pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut config = Self::default();

    if let Some(value) = lookup(ENV_MAX_TEXT_LENGTH) {
      config.limits.max_text_length = parse_env(ENV_MAX_TEXT_LENGTH, value)?;
    }
    if let Some(value) = lookup(ENV_MAX_MORSE_LENGTH) {
      config.limits.max_morse_length = parse_env(ENV_MAX_MORSE_LENGTH, value)?;
    }
    if let Some(value) = lookup(ENV_LOG_LEVEL) {
      config.logging.level = parse_env(ENV_LOG_LEVEL, value)?;
    }

    Ok(config)
  }
}

fn parse_env<T: FromStr>(key: &str, value: String) -> Result<T, ConfigError> {
  let parsed = value.trim().parse();
  parsed.map_err(|_| ConfigError::InvalidEnvValue {
    key: key.to_string(),
    value,
  })
}

// ===== Accessor Methods =====

impl MorseConfig {
  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `limits.max_text_length` >= 1
  /// - `limits.max_morse_length` >= 1
  ///
  /// # Errors
  /// Returns the first failing check as a `ConfigError`.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.limits.max_text_length < 1 {
      return Err(ConfigError::InvalidMaxTextLength {
        actual: self.limits.max_text_length,
      });
    }

    if self.limits.max_morse_length < 1 {
      return Err(ConfigError::InvalidMaxMorseLength {
        actual: self.limits.max_morse_length,
      });
    }

    Ok(())
  }

  /// Returns the English input bound.
  pub fn max_text_length(&self) -> usize {
    self.limits.max_text_length
  }

  /// Returns the Morse input bound.
  pub fn max_morse_length(&self) -> usize {
    self.limits.max_morse_length
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
