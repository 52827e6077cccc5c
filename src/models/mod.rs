//! Domain models for CIDR expansion.
//!
//! This module contains the core data structures:
//! - [`Cidr`] - IPv4 address with prefix length, plus mask arithmetic

mod ipv4;

// Re-export public types
pub use ipv4::{broadcast_addr, network_addr, prefix_mask, Cidr, MAX_LENGTH};
