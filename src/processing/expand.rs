//! Lazy expansion of a CIDR block into its host addresses.
//!
//! Enumeration is streaming: nothing is materialized up front, so even
//! a /0 block can be walked (or abandoned early) in constant memory.

use crate::error::CidrError;
use crate::models::Cidr;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Iterator over every address in a block, lowest first.
///
/// The cursor is 64-bit so a block ending at 255.255.255.255 terminates
/// without overflowing.
#[derive(Debug, Clone)]
pub struct HostIter {
    next: u64,
    end: u64, // inclusive
}

impl HostIter {
    fn new(start: u32, end: u32) -> HostIter {
        HostIter {
            next: start as u64,
            end: end as u64,
        }
    }

    /// Number of addresses not yet yielded.
    pub fn remaining(&self) -> u64 {
        (self.end + 1).saturating_sub(self.next)
    }
}

impl Iterator for HostIter {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Ipv4Addr> {
        if self.next > self.end {
            return None;
        }
        let addr = Ipv4Addr::from(self.next as u32);
        self.next += 1;
        Some(addr)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // A /0 block holds 2^32 addresses, which can exceed usize::MAX
        // on 32-bit targets; remaining() is the authoritative length.
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl Cidr {
    /// Iterate over every address in the block, network through broadcast.
    ///
    /// Each call returns a fresh iterator; no cursor state is shared.
    pub fn hosts(&self) -> HostIter {
        HostIter::new(u32::from(self.network()), u32::from(self.broadcast()))
    }
}

/// Expand a CIDR string into every address it covers, as dotted-quad text.
///
/// Parsing and validation happen up front; enumeration is lazy, so the
/// caller decides how much of a large block to actually walk.
///
/// # Examples
/// ```
/// use cidrl::expand_cidr;
/// let hosts: Vec<String> = expand_cidr("10.0.0.5/32").unwrap().collect();
/// assert_eq!(hosts, vec!["10.0.0.5"]);
/// ```
pub fn expand_cidr(cidr_text: &str) -> Result<impl Iterator<Item = String>, CidrError> {
    let cidr = Cidr::from_str(cidr_text)?;
    log::debug!("expanding {} ({} addresses)", cidr, cidr.host_count());
    Ok(cidr.hosts().map(|addr| addr.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_host_block() {
        let hosts: Vec<String> = expand_cidr("10.0.0.5/32").unwrap().collect();
        assert_eq!(hosts, vec!["10.0.0.5"]);
    }

    #[test]
    fn test_small_block() {
        let hosts: Vec<String> = expand_cidr("192.168.1.0/30").unwrap().collect();
        assert_eq!(
            hosts,
            vec!["192.168.1.0", "192.168.1.1", "192.168.1.2", "192.168.1.3"]
        );
    }

    #[test]
    fn test_host_bits_are_masked_off() {
        // 192.168.0.1/28 starts at the network address, not the input
        let cidr: Cidr = "192.168.0.1/28".parse().unwrap();
        let hosts: Vec<Ipv4Addr> = cidr.hosts().collect();
        assert_eq!(hosts.len(), 16);
        assert_eq!(hosts[0], Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(hosts[15], Ipv4Addr::new(192, 168, 0, 15));
    }

    #[test]
    fn test_ascending_and_complete() {
        let cidr: Cidr = "10.1.2.0/24".parse().unwrap();
        let hosts: Vec<Ipv4Addr> = cidr.hosts().collect();
        assert_eq!(hosts.len() as u64, cidr.host_count());
        for pair in hosts.windows(2) {
            assert!(u32::from(pair[0]) < u32::from(pair[1]));
        }
    }

    #[test]
    fn test_restartable() {
        let cidr: Cidr = "192.168.1.0/30".parse().unwrap();
        let first: Vec<Ipv4Addr> = cidr.hosts().collect();
        let second: Vec<Ipv4Addr> = cidr.hosts().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_terminates_at_top_of_address_space() {
        let cidr: Cidr = "255.255.255.252/30".parse().unwrap();
        let hosts: Vec<Ipv4Addr> = cidr.hosts().collect();
        assert_eq!(hosts.len(), 4);
        assert_eq!(hosts[3], Ipv4Addr::new(255, 255, 255, 255));
    }

    #[test]
    fn test_large_block_is_lazy() {
        let cidr: Cidr = "10.0.0.0/8".parse().unwrap();
        assert_eq!(cidr.host_count(), 1 << 24);
        assert_eq!(cidr.network(), Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(cidr.broadcast(), Ipv4Addr::new(10, 255, 255, 255));

        let mut iter = cidr.hosts();
        assert_eq!(iter.remaining(), 1 << 24);
        assert_eq!(iter.next(), Some(Ipv4Addr::new(10, 0, 0, 0)));
        assert_eq!(iter.remaining(), (1 << 24) - 1);
    }

    #[test]
    fn test_full_address_space_block() {
        let cidr: Cidr = "0.0.0.0/0".parse().unwrap();
        let mut iter = cidr.hosts();
        assert_eq!(iter.remaining(), 1 << 32);
        assert_eq!(iter.next(), Some(Ipv4Addr::new(0, 0, 0, 0)));
        assert_eq!(iter.next(), Some(Ipv4Addr::new(0, 0, 0, 1)));
        assert_eq!(cidr.broadcast(), Ipv4Addr::new(255, 255, 255, 255));
    }

    #[test]
    fn test_size_hint_exact_for_small_blocks() {
        let cidr: Cidr = "10.0.0.0/24".parse().unwrap();
        assert_eq!(cidr.hosts().size_hint(), (256, Some(256)));
    }

    #[test]
    fn test_errors_detected_before_enumeration() {
        assert!(matches!(
            expand_cidr("999.1.1.1/24"),
            Err(CidrError::InvalidAddress(_))
        ));
        assert!(matches!(
            expand_cidr("10.0.0.0/33"),
            Err(CidrError::InvalidPrefixLength(_))
        ));
        assert!(matches!(
            expand_cidr("10.0.0.0"),
            Err(CidrError::MalformedInput(_))
        ));
    }
}
