//! morse crate example
//!
//! Encodes a few phrases, decodes delimited streams, and lists every reading of
//! ambiguous undelimited streams.

use morse::{MorseConfig, MorseService};
use tracing_subscriber::EnvFilter;

/// Application common result type
type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> AppResult<()> {
  // Initialize tracing_subscriber
  // Use RUST_LOG environment variable if set
  // Default: info for global, debug for morse
  let env_filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,morse=debug"));
  tracing_subscriber::fmt().with_env_filter(env_filter).with_target(true).with_level(true).init();

  let config = MorseConfig::from_env()?;
  let service = MorseService::init(&config)?;

  println!("1. English to Morse:");
  for phrase in ["HELLO WORLD", "SOS", "PUPPY", "A B C"] {
    println!("   {:?} -> {:?}", phrase, service.encode(phrase));
  }

  println!("\n2. Morse to English:");
  for morse in [".... . .-.. .-.. --- / .-- --- .-. .-.. -..", "... --- ...", ".- / -... / -.-."] {
    println!("   {:?} -> {:?}", morse, service.decode(morse));
  }

  println!("\n3. Ambiguous Morse:");
  for morse in ["...-.", "-..-."] {
    let report = service.translate_morse(morse)?;
    println!("   {:?} -> {:?}", morse, report.output.candidates());
    println!("      ({} possible interpretation(s))", report.output.len());
  }

  let info = service.info();
  println!(
    "\nSupported characters ({}): {:?}",
    info.total_count, info.supported_characters
  );

  Ok(())
}
