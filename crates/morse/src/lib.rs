//! morse translation library
//!
//! Translates English text to Morse code and back. Decoding enumerates every way a Morse
//! stream can be split into code-table patterns, so ambiguous input yields all readings.
//!
//! ```
//! use morse::{MorseConfig, MorseService};
//!
//! let service = MorseService::init(&MorseConfig::default()).unwrap();
//! assert_eq!(service.encode("SOS"), "... --- ...");
//! assert_eq!(service.decode(".-"), vec!["ET", "A"]);
//! ```

/// Configuration module - MorseConfig, LogLevel and input limits
pub mod config;

/// Decoder module - Morse stream shapes and the segmentation search
pub mod decoder;

/// Encoder module - English to Morse by table lookup
pub mod encoder;

/// Error module - MorseError, MorseResult and the per-concern error types
pub mod errors;

/// Logging module - tracing subscriber initialization
pub mod logging;

/// Data model module - translation reports and engine info
pub mod models;

/// Service module - MorseService facade with input gating
pub mod service;

/// Code table module - the immutable character <-> pattern bijection
pub mod table;

/// Validator module - Morse alphabet screening
pub mod validator;

/// Re-exports
pub use config::{LogLevel, MorseConfig};
pub use decoder::decode;
pub use encoder::encode;
pub use errors::{MorseError, MorseResult, TranslateError};
pub use service::MorseService;
pub use table::CodeTable;
pub use validator::is_valid_morse;
