//! Verification of supplied values against an existing source

use super::read_padded;
use crate::config::StreamConfig;
use crate::error::Result;
use crate::progress::{Progress, TransferStats};
use rjtag_core::{ByteOrder, Width};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A value that differs from the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// Byte offset of the value in the source
    pub offset: u64,
    /// Value that was supplied
    pub expected: u32,
    /// Value found in the source
    pub actual: u32,
}

/// Outcome of a verification
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyReport {
    /// Every mismatch, in offset order
    pub differences: Vec<Mismatch>,
    /// Bytes compared and time taken
    pub stats: TransferStats,
}

impl VerifyReport {
    /// Returns true if no differences were found
    pub fn is_same(&self) -> bool {
        self.differences.is_empty()
    }
}

/// Compares supplied values with the values already stored in a source
///
/// Each write decodes the value at the current offset of the source (with
/// `0xFF` fill past the end) and records a [`Mismatch`] when they differ.
pub struct StreamVerifier<R: Read> {
    source: R,
    n: u64,
    order: ByteOrder,
    diff: Vec<Mismatch>,
    progress: Progress,
}

impl StreamVerifier<BufReader<File>> {
    /// Open a file to verify against
    pub fn open(
        path: impl AsRef<Path>,
        msg: &str,
        size: u64,
        config: &StreamConfig,
    ) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        log::debug!("verifying {} bytes against {:?} ({})", size, path, config.order);
        Self::new(BufReader::new(file), msg, size, config)
    }
}

impl<R: Read> StreamVerifier<R> {
    /// Verify against an existing source; `size` is the expected total in bytes
    pub fn new(source: R, msg: &str, size: u64, config: &StreamConfig) -> Result<Self> {
        Ok(Self {
            source,
            n: 0,
            order: config.order,
            diff: Vec::new(),
            progress: Progress::new(msg, size, config.progress)?,
        })
    }

    /// Compare one value of the given width against the source
    pub fn write_value(&mut self, value: u32, width: Width) -> Result<()> {
        let mut bytes = [0u8; 4];
        let len = width.bytes();
        read_padded(&mut self.source, &mut bytes[..len])?;
        let actual = self.order.decode(&bytes, width);
        let expected = value & width.mask();
        if expected != actual {
            log::trace!(
                "mismatch at 0x{:08x}: expected 0x{:x}, found 0x{:x}",
                self.n,
                expected,
                actual
            );
            self.diff.push(Mismatch {
                offset: self.n,
                expected,
                actual,
            });
        }
        self.n += len as u64;
        self.progress.update(self.n);
        Ok(())
    }

    /// Compare a 32-bit value
    pub fn wr32(&mut self, value: u32) -> Result<()> {
        self.write_value(value, Width::W32)
    }

    /// Compare a 16-bit value
    pub fn wr16(&mut self, value: u16) -> Result<()> {
        self.write_value(value as u32, Width::W16)
    }

    /// Compare an 8-bit value
    pub fn wr8(&mut self, value: u8) -> Result<()> {
        self.write_value(value as u32, Width::W8)
    }

    /// Mismatches found so far
    pub fn differences(&self) -> &[Mismatch] {
        &self.diff
    }

    /// Release the source and report the differences
    pub fn close(self) -> VerifyReport {
        let outcome = if self.diff.is_empty() {
            "same".to_string()
        } else {
            format!("{} differences", self.diff.len())
        };
        let stats = self.progress.finish(self.n, &outcome);
        VerifyReport {
            differences: self.diff,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn verifier(data: &[u8]) -> StreamVerifier<Cursor<Vec<u8>>> {
        StreamVerifier::new(
            Cursor::new(data.to_vec()),
            "Verifying",
            data.len() as u64,
            &StreamConfig::quiet(),
        )
        .unwrap()
    }

    #[test]
    fn test_identical() {
        let mut v = verifier(&[0x04, 0x03, 0x02, 0x01, 0x08, 0x07, 0x06, 0x05]);
        v.wr32(0x01020304).unwrap();
        v.wr32(0x05060708).unwrap();
        let report = v.close();
        assert!(report.is_same());
        assert_eq!(report.stats.bytes, 8);
    }

    #[test]
    fn test_records_differences() {
        let mut v = verifier(&[0x04, 0x03, 0x02, 0x01, 0x08, 0x07, 0x06, 0x05]);
        v.wr32(0x01020304).unwrap();
        v.wr32(0x05060709).unwrap();
        assert_eq!(v.differences().len(), 1);
        let report = v.close();
        assert_eq!(
            report.differences,
            vec![Mismatch {
                offset: 4,
                expected: 0x05060709,
                actual: 0x05060708,
            }]
        );
    }

    #[test]
    fn test_past_end_compares_against_fill() {
        let mut v = verifier(&[0x01, 0x02]);
        v.wr32(0xffff0201).unwrap();
        v.wr32(0).unwrap();
        let report = v.close();
        assert_eq!(report.differences.len(), 1);
        assert_eq!(report.differences[0].offset, 4);
        assert_eq!(report.differences[0].actual, 0xffffffff);
    }

    #[test]
    fn test_mixed_widths() {
        let mut v = verifier(&[0xaa, 0x34, 0x12]);
        v.wr8(0xaa).unwrap();
        v.wr16(0x1234).unwrap();
        assert!(v.close().is_same());
    }
}
