//! table module
pub mod code_table;

/// Re-export
pub use code_table::{CodeTable, DASH, DOT, STANDARD_ENTRIES, WORD_SPACE, WORD_SPACE_PATTERN};
