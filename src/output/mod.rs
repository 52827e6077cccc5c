//! Output formatting for expanded blocks.
//!
//! - [`terminal`] - line-per-address output to any writer

mod terminal;

// Re-export public functions
pub use terminal::print_hosts;
