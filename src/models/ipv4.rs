//! IPv4 CIDR block model.
//!
//! Provides the [`Cidr`] struct pairing an IPv4 address with a prefix
//! length, along with mask arithmetic for deriving the inclusive
//! [network, broadcast] range the block covers.

use crate::error::CidrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a network mask as u32.
///
/// The top `len` bits are set, the remaining `32 - len` host bits clear.
///
/// # Examples
/// ```
/// use cidrl::models::prefix_mask;
/// assert_eq!(prefix_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn prefix_mask(len: u8) -> Result<u32, CidrError> {
    if len > MAX_LENGTH {
        Err(CidrError::InvalidPrefixLength(len.to_string()))
    } else {
        let host_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> host_len) << host_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length (host bits zeroed).
pub fn network_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CidrError> {
    if len == MAX_LENGTH {
        // single-host block, the address is its own network
        return Ok(addr);
    }
    let mask = prefix_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Get the broadcast address for a given IP and prefix length (host bits set).
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CidrError> {
    if len == MAX_LENGTH {
        return Ok(addr);
    }
    let mask = prefix_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// IPv4 CIDR block.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// The IPv4 address as written in the input.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix_len: u8,
}

impl Cidr {
    /// Create a new [`Cidr`], rejecting prefix lengths over 32.
    pub fn new(addr: Ipv4Addr, prefix_len: u8) -> Result<Cidr, CidrError> {
        if prefix_len > MAX_LENGTH {
            return Err(CidrError::InvalidPrefixLength(prefix_len.to_string()));
        }
        Ok(Cidr { addr, prefix_len })
    }

    /// Get the lowest (network) address in the block.
    pub fn network(&self) -> Ipv4Addr {
        network_addr(self.addr, self.prefix_len)
            .unwrap_or_else(|e| panic!("prefix length checked at construction: {}", e))
    }

    /// Get the highest (broadcast) address in the block.
    pub fn broadcast(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.prefix_len)
            .unwrap_or_else(|e| panic!("prefix length checked at construction: {}", e))
    }

    /// Number of addresses in the block, `2^(32 - prefix_len)`.
    ///
    /// Includes the network and broadcast addresses, so a /30 counts 4.
    pub fn host_count(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix_len)
    }
}

impl FromStr for Cidr {
    type Err = CidrError;

    /// Parse a CIDR string (e.g., "192.168.0.1/28").
    ///
    /// Splits at the first `/`; input without a separator is rejected
    /// rather than defaulted to /32.
    fn from_str(addr_cidr: &str) -> Result<Cidr, CidrError> {
        let addr_cidr = addr_cidr.trim();
        let (addr_text, prefix_text) = addr_cidr
            .split_once('/')
            .ok_or_else(|| CidrError::MalformedInput(addr_cidr.to_string()))?;

        let addr: Ipv4Addr = addr_text
            .parse()
            .map_err(|_| CidrError::InvalidAddress(addr_text.to_string()))?;
        let prefix_len: u8 = prefix_text
            .parse()
            .map_err(|_| CidrError::InvalidPrefixLength(prefix_text.to_string()))?;
        if prefix_len > MAX_LENGTH {
            return Err(CidrError::InvalidPrefixLength(prefix_text.to_string()));
        }

        Ok(Cidr { addr, prefix_len })
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.prefix_len);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix_len)
    }
}

impl PartialEq for Cidr {
    fn eq(&self, other: &Cidr) -> bool {
        self.addr == other.addr && self.prefix_len == other.prefix_len
    }
}

impl PartialOrd for Cidr {
    fn partial_cmp(&self, other: &Cidr) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
