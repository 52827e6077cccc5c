//! Error taxonomy for CIDR parsing and validation.

use std::error::Error;
use std::fmt;

/// Errors detected while parsing or validating a CIDR block.
///
/// Every variant is raised before enumeration starts, so expansion
/// either yields the complete sequence or nothing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    /// Input is not of the form `address/prefix-length`.
    MalformedInput(String),
    /// The address portion is not a well-formed dotted-quad IPv4 address.
    InvalidAddress(String),
    /// The prefix portion is non-numeric, negative, or greater than 32.
    InvalidPrefixLength(String),
}

impl fmt::Display for CidrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CidrError::MalformedInput(input) => {
                write!(f, "expected address/prefix-length, got {:?}", input)
            }
            CidrError::InvalidAddress(addr) => {
                write!(f, "invalid IPv4 address {:?}", addr)
            }
            CidrError::InvalidPrefixLength(len) => {
                write!(f, "invalid prefix length {:?}, expected 0-32", len)
            }
        }
    }
}

impl Error for CidrError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = CidrError::InvalidAddress("999.1.1.1".to_string());
        assert_eq!(e.to_string(), "invalid IPv4 address \"999.1.1.1\"");

        let e = CidrError::InvalidPrefixLength("33".to_string());
        assert_eq!(e.to_string(), "invalid prefix length \"33\", expected 0-32");

        let e = CidrError::MalformedInput("10.0.0.0".to_string());
        assert_eq!(e.to_string(), "expected address/prefix-length, got \"10.0.0.0\"");
    }
}
