//! Whole-buffer transfers through the stream adapters

use crate::config::StreamConfig;
use crate::error::Result;
use crate::progress::TransferStats;
use crate::stream::{StreamReader, StreamVerifier, StreamWriter, VerifyReport};
use rjtag_core::{DataBuffer, Width};
use std::io::{Read, Write};
use std::path::Path;

/// Size of a buffer on the stream, in bytes
fn stream_size(buf: &DataBuffer) -> u64 {
    (buf.len() * buf.width().bytes()) as u64
}

/// Write every element of `buf` at its own width
pub fn save<W: Write>(buf: &DataBuffer, writer: &mut StreamWriter<W>) -> Result<()> {
    let width = buf.width();
    for &x in buf.iter() {
        writer.write_value(x, width)?;
    }
    Ok(())
}

/// Read `count` values of `width` into a new buffer
pub fn load<R: Read>(
    reader: &mut StreamReader<R>,
    width: Width,
    count: usize,
) -> Result<DataBuffer> {
    let mut buf = DataBuffer::new(width);
    for _ in 0..count {
        buf.write(reader.read_value(width)?)?;
    }
    Ok(buf)
}

/// Feed every element of `buf` to a verifier
pub fn verify<R: Read>(buf: &DataBuffer, verifier: &mut StreamVerifier<R>) -> Result<()> {
    let width = buf.width();
    for &x in buf.iter() {
        verifier.write_value(x, width)?;
    }
    Ok(())
}

/// Save a buffer to a file
pub fn save_file(
    path: impl AsRef<Path>,
    buf: &DataBuffer,
    config: &StreamConfig,
) -> Result<TransferStats> {
    let mut writer = StreamWriter::create(path, "Writing file", stream_size(buf), config)?;
    save(buf, &mut writer)?;
    writer.close()
}

/// Load a whole file as values of `width`
///
/// A trailing partial value is completed with `0xFF` fill bytes.
pub fn load_file(
    path: impl AsRef<Path>,
    width: Width,
    config: &StreamConfig,
) -> Result<DataBuffer> {
    let path = path.as_ref();
    let size = std::fs::metadata(path)?.len();
    let count = size.div_ceil(width.bytes() as u64) as usize;
    let mut reader = StreamReader::open(path, "Reading file", size, config)?;
    let buf = load(&mut reader, width, count)?;
    reader.close();
    Ok(buf)
}

/// Compare a buffer against the contents of a file
pub fn verify_file(
    path: impl AsRef<Path>,
    buf: &DataBuffer,
    config: &StreamConfig,
) -> Result<VerifyReport> {
    let mut verifier = StreamVerifier::open(path, "Verifying file", stream_size(buf), config)?;
    verify(buf, &mut verifier)?;
    Ok(verifier.close())
}
