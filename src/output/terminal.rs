//! Terminal output utilities.
//!
//! Writes expanded blocks one address per line.

use crate::models::Cidr;
use std::io::{self, Write};

/// Write every address in the block to `out`, one per line, ascending.
///
/// The caller supplies the writer (and any buffering), so output can go
/// to stdout, a file, or a test buffer.
pub fn print_hosts<W: Write>(out: &mut W, cidr: &Cidr) -> io::Result<()> {
    for addr in cidr.hosts() {
        writeln!(out, "{}", addr)?;
    }
    Ok(())
}
