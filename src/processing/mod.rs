//! Block expansion logic.
//!
//! This module contains the enumeration side of the pipeline:
//! - [`expand`] - lazy iteration over every host address in a block

mod expand;

// Re-export public functions
pub use expand::{expand_cidr, HostIter};
