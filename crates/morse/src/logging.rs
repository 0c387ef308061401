//! tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;
use crate::errors::{MorseError, MorseResult};

/// Installs a global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `level` applies to everything.
///
/// # Errors
/// `MorseError::LoggingInit` if a global subscriber is already installed.
pub fn init_logging(level: LogLevel) -> MorseResult<()> {
  let env_filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

  tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(true)
    .with_level(true)
    .try_init()
    .map_err(|e| MorseError::LoggingInit {
      reason: e.to_string(),
    })
}
