//! decoder module
//!
//! Morse -> English. A delimited stream is searched unit by unit, an undelimited stream
//! symbol by symbol; both enumerate every decomposition the code table admits.

pub mod search;
pub mod stream;

use tracing::debug;

use crate::table::CodeTable;

/// Re-export
pub use search::SegmentationSearch;
pub use stream::{MorseStream, StreamShape};

/// Decodes a Morse stream into every candidate English string, in discovery order.
///
/// - Whitespace-only input yields `[""]`
/// - A stream containing a space is delimited, otherwise undelimited
/// - Dead ends contribute nothing, so unmatchable input yields `[]`
///
/// No filtering or deduplication happens here.
pub fn decode(table: &CodeTable, morse_text: &str) -> Vec<String> {
  let Some(stream) = MorseStream::parse(morse_text) else {
    return vec![String::new()];
  };

  let shape = stream.shape();
  let candidates = SegmentationSearch::new(table).run(&stream);

  debug!(
    ?shape,
    stream_len = stream.len(),
    candidates = candidates.len(),
    "Decoded Morse stream"
  );

  candidates
}
