//! cidrl
//!
//! Lists all IP addresses within a CIDR block.
//!
//! The pipeline is parse → validate → expand: a CIDR string such as
//! `"192.168.0.1/28"` is parsed into a [`Cidr`], validated up front,
//! and then lazily expanded into every address from the network
//! address through the broadcast address, in ascending order.
//!
//! # Examples
//! ```
//! use cidrl::expand_cidr;
//!
//! let hosts: Vec<String> = expand_cidr("192.168.1.0/30").unwrap().collect();
//! assert_eq!(hosts.len(), 4);
//! assert_eq!(hosts[0], "192.168.1.0");
//! assert_eq!(hosts[3], "192.168.1.3");
//! ```

pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::CidrError;
pub use models::Cidr;
pub use processing::{expand_cidr, HostIter};
