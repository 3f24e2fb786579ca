//! Sequential stream adapters
//!
//! Byte oriented writers, readers and verifiers that move fixed width
//! values between a buffer and a file (or any `Read`/`Write`). Values are
//! encoded with the byte order from [`StreamConfig`](crate::StreamConfig).
//!
//! Short reads at the end of a source are filled with `0xFF`, the value an
//! erased or absent device location reads back as.

mod reader;
mod verify;
mod writer;

pub use reader::StreamReader;
pub use verify::{Mismatch, StreamVerifier, VerifyReport};
pub use writer::StreamWriter;

use crate::progress::TransferStats;
use std::io::{self, ErrorKind, Read};

/// Fill byte for data past the end of a source
pub const FILL_BYTE: u8 = 0xFF;

/// Read exactly `buf.len()` bytes, padding with [`FILL_BYTE`] at end of source
///
/// Returns how many bytes actually came from the source.
pub(crate) fn read_padded<R: Read + ?Sized>(source: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    if filled < buf.len() {
        log::trace!("short read: {} of {} bytes", filled, buf.len());
        buf[filled..].fill(FILL_BYTE);
    }
    Ok(filled)
}

/// Closing message, with throughput when requested
pub(crate) fn done_message(stats: &TransferStats, show_rate: bool) -> String {
    if show_rate {
        format!("done ({:.2} KiB/sec)", stats.rate_kib())
    } else {
        "done".to_string()
    }
}
