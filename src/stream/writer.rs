//! Sequential value writer

use super::done_message;
use crate::config::StreamConfig;
use crate::error::Result;
use crate::progress::{Progress, TransferStats};
use rjtag_core::{ByteOrder, Width};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends encoded 8, 16 and 32-bit values to a byte sink
pub struct StreamWriter<W: Write> {
    sink: W,
    n: u64,
    order: ByteOrder,
    show_rate: bool,
    progress: Progress,
}

impl StreamWriter<BufWriter<File>> {
    /// Create (or truncate) a file and write to it
    pub fn create(
        path: impl AsRef<Path>,
        msg: &str,
        size: u64,
        config: &StreamConfig,
    ) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        log::debug!("writing {} bytes to {:?} ({})", size, path, config.order);
        Self::new(BufWriter::new(file), msg, size, config)
    }
}

impl<W: Write> StreamWriter<W> {
    /// Write to an existing sink; `size` is the expected total in bytes
    pub fn new(sink: W, msg: &str, size: u64, config: &StreamConfig) -> Result<Self> {
        Ok(Self {
            sink,
            n: 0,
            order: config.order,
            show_rate: config.show_rate,
            progress: Progress::new(msg, size, config.progress)?,
        })
    }

    /// Write one value of the given width
    pub fn write_value(&mut self, value: u32, width: Width) -> Result<()> {
        let mut bytes = [0u8; 4];
        let len = self.order.encode(value, width, &mut bytes);
        self.sink.write_all(&bytes[..len])?;
        self.n += len as u64;
        self.progress.update(self.n);
        Ok(())
    }

    /// Write a 32-bit value
    pub fn wr32(&mut self, value: u32) -> Result<()> {
        self.write_value(value, Width::W32)
    }

    /// Write a 16-bit value
    pub fn wr16(&mut self, value: u16) -> Result<()> {
        self.write_value(value as u32, Width::W16)
    }

    /// Write an 8-bit value
    pub fn wr8(&mut self, value: u8) -> Result<()> {
        self.write_value(value as u32, Width::W8)
    }

    /// Bytes written so far
    pub fn bytes_written(&self) -> u64 {
        self.n
    }

    /// Flush and release the sink
    pub fn close(mut self) -> Result<TransferStats> {
        self.sink.flush()?;
        let stats = TransferStats {
            bytes: self.n,
            elapsed: self.progress.elapsed(),
        };
        Ok(self
            .progress
            .finish(self.n, &done_message(&stats, self.show_rate)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::transfer;
    use rjtag_core::DataBuffer;
    use std::io::{self, ErrorKind};

    /// Sink that fails writes or flushes on demand
    struct FailingSink {
        fail_write: bool,
        fail_flush: bool,
    }

    impl Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.fail_write {
                return Err(io::Error::other("full"));
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.fail_flush {
                return Err(io::Error::other("flush failed"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_write_little_endian() {
        let mut out = Vec::new();
        let mut w = StreamWriter::new(&mut out, "Writing", 7, &StreamConfig::quiet()).unwrap();
        w.wr32(0x12345678).unwrap();
        w.wr16(0xabcd).unwrap();
        w.wr8(0xef).unwrap();
        assert_eq!(w.bytes_written(), 7);
        let stats = w.close().unwrap();
        assert_eq!(stats.bytes, 7);
        assert_eq!(out, [0x78, 0x56, 0x34, 0x12, 0xcd, 0xab, 0xef]);
    }

    #[test]
    fn test_write_big_endian() {
        let mut out = Vec::new();
        let config = StreamConfig::quiet().with_order(ByteOrder::Big);
        let mut w = StreamWriter::new(&mut out, "Writing", 6, &config).unwrap();
        w.wr32(0x12345678).unwrap();
        w.wr16(0xabcd).unwrap();
        w.close().unwrap();
        assert_eq!(out, [0x12, 0x34, 0x56, 0x78, 0xab, 0xcd]);
    }

    #[test]
    fn test_create_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        let config = StreamConfig::quiet().with_rate(true);
        let mut w = StreamWriter::create(&path, "Writing", 2, &config).unwrap();
        w.wr16(0x0102).unwrap();
        let stats = w.close().unwrap();
        assert_eq!(stats.bytes, 2);
        assert!(stats.rate_kib() >= 0.0);
        assert_eq!(std::fs::read(&path).unwrap(), [0x02, 0x01]);
    }

    #[test]
    fn test_failed_write_propagates() {
        let sink = FailingSink {
            fail_write: true,
            fail_flush: false,
        };
        let buf = DataBuffer::from_values(Width::W32, [0x01020304, 0x05060708]);
        let mut w = StreamWriter::new(sink, "Writing", 8, &StreamConfig::quiet()).unwrap();
        match transfer::save(&buf, &mut w) {
            Err(Error::Io(e)) => assert_eq!(e.kind(), ErrorKind::Other),
            other => panic!("expected I/O error, got {:?}", other),
        }
        assert_eq!(w.bytes_written(), 0);
        // Dropping without close releases the sink and abandons the bar
        drop(w);
    }

    #[test]
    fn test_failed_flush_on_close() {
        let sink = FailingSink {
            fail_write: false,
            fail_flush: true,
        };
        let mut w = StreamWriter::new(sink, "Writing", 1, &StreamConfig::quiet()).unwrap();
        w.wr8(0xaa).unwrap();
        assert!(matches!(w.close(), Err(Error::Io(_))));
    }
}
