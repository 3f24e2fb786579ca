//! Sequential value reader

use super::{done_message, read_padded};
use crate::config::StreamConfig;
use crate::error::Result;
use crate::progress::{Progress, TransferStats};
use rjtag_core::{ByteOrder, Width};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Consumes encoded 8, 16 and 32-bit values from a byte source
///
/// Reading past the end of the source does not fail: missing bytes read as
/// `0xFF`, and the byte counter still advances by the full value width.
pub struct StreamReader<R: Read> {
    source: R,
    n: u64,
    order: ByteOrder,
    show_rate: bool,
    progress: Progress,
}

impl StreamReader<BufReader<File>> {
    /// Open a file for reading
    pub fn open(
        path: impl AsRef<Path>,
        msg: &str,
        size: u64,
        config: &StreamConfig,
    ) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        log::debug!("reading {} bytes from {:?} ({})", size, path, config.order);
        Self::new(BufReader::new(file), msg, size, config)
    }
}

impl<R: Read> StreamReader<R> {
    /// Read from an existing source; `size` is the expected total in bytes
    pub fn new(source: R, msg: &str, size: u64, config: &StreamConfig) -> Result<Self> {
        Ok(Self {
            source,
            n: 0,
            order: config.order,
            show_rate: config.show_rate,
            progress: Progress::new(msg, size, config.progress)?,
        })
    }

    /// Read one value of the given width
    pub fn read_value(&mut self, width: Width) -> Result<u32> {
        let mut bytes = [0u8; 4];
        let len = width.bytes();
        read_padded(&mut self.source, &mut bytes[..len])?;
        self.n += len as u64;
        self.progress.update(self.n);
        Ok(self.order.decode(&bytes, width))
    }

    /// Read a 32-bit value
    pub fn rd32(&mut self) -> Result<u32> {
        self.read_value(Width::W32)
    }

    /// Read a 16-bit value
    pub fn rd16(&mut self) -> Result<u16> {
        self.read_value(Width::W16).map(|x| x as u16)
    }

    /// Read an 8-bit value
    pub fn rd8(&mut self) -> Result<u8> {
        self.read_value(Width::W8).map(|x| x as u8)
    }

    /// Bytes consumed so far, fill bytes included
    pub fn bytes_read(&self) -> u64 {
        self.n
    }

    /// Release the source
    pub fn close(self) -> TransferStats {
        let stats = TransferStats {
            bytes: self.n,
            elapsed: self.progress.elapsed(),
        };
        self.progress
            .finish(self.n, &done_message(&stats, self.show_rate))
    }
}
