//! Width-typed data buffer
//!
//! A [`DataBuffer`] holds an ordered sequence of unsigned values that all
//! share one element width. It is filled through a write cursor (append or
//! in-place patch), drained through a read cursor, and can be reinterpreted
//! at another width under a chosen [`ByteOrder`].
//!
//! Conversions are arithmetic (shift and mask), never a reinterpretation of
//! memory, so the result only depends on the element values and the order.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use md5::{Digest, Md5};

use crate::bits;
use crate::error::{Error, Result};
use crate::width::{ByteOrder, Width};

/// Ordered sequence of same-width values with read and write cursors
#[derive(Debug)]
pub struct DataBuffer {
    width: Width,
    buf: Vec<u32>,
    wr_idx: usize,
    rd_idx: usize,
}

impl DataBuffer {
    /// Create an empty buffer
    pub fn new(width: Width) -> Self {
        Self {
            width,
            buf: Vec::new(),
            wr_idx: 0,
            rd_idx: 0,
        }
    }

    /// Create a buffer from existing values, masking each to `width`
    ///
    /// The write cursor starts at the end, so further writes append.
    pub fn from_values<I>(width: Width, values: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let mask = width.mask();
        let buf: Vec<u32> = values.into_iter().map(|x| x & mask).collect();
        Self {
            width,
            wr_idx: buf.len(),
            buf,
            rd_idx: 0,
        }
    }

    /// Create an 8-bit buffer from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_values(Width::W8, bytes.iter().map(|&b| b as u32))
    }

    /// Return an independent copy with the cursors reset
    pub fn copy(&self) -> Self {
        Self::from_values(self.width, self.buf.iter().copied())
    }

    /// Current element width
    pub fn width(&self) -> Width {
        self.width
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if the buffer holds no elements
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Elements as a slice
    pub fn as_slice(&self) -> &[u32] {
        &self.buf
    }

    /// Iterate over the elements without touching the read cursor
    pub fn iter(&self) -> core::slice::Iter<'_, u32> {
        self.buf.iter()
    }

    /// Index of the next element to read
    pub fn read_cursor(&self) -> usize {
        self.rd_idx
    }

    /// Index of the next element to write
    pub fn write_cursor(&self) -> usize {
        self.wr_idx
    }

    /// Move the read cursor
    ///
    /// Positions past the end are accepted; the next read underflows.
    pub fn seek_read(&mut self, index: usize) {
        self.rd_idx = index;
    }

    /// Move the write cursor, typically back onto an element to patch it
    ///
    /// Positions past the append boundary are accepted here but the next
    /// write fails with [`Error::BufferOverrun`].
    pub fn seek_write(&mut self, index: usize) {
        self.wr_idx = index;
    }

    /// Read the element at the read cursor and advance it
    pub fn read(&mut self) -> Result<u32> {
        let val = *self.buf.get(self.rd_idx).ok_or(Error::BufferUnderflow)?;
        self.rd_idx += 1;
        Ok(val)
    }

    /// Write a value at the write cursor
    ///
    /// At the append boundary the value is appended and the cursor advances.
    /// Before it, the element under the cursor is replaced and the cursor
    /// stays put, so the same position can be patched repeatedly.
    pub fn write(&mut self, val: u32) -> Result<()> {
        let val = bits::mask_val(val, self.width.bits());
        let len = self.buf.len();
        if self.wr_idx == len {
            self.buf.push(val);
            self.wr_idx += 1;
        } else if self.wr_idx < len {
            self.buf[self.wr_idx] = val;
        } else {
            return Err(Error::BufferOverrun {
                cursor: self.wr_idx,
                len,
            });
        }
        Ok(())
    }

    fn expect_width(&self, width: Width) -> Result<()> {
        if self.width != width {
            return Err(Error::WidthMismatch {
                expected: width.bits(),
                actual: self.width.bits(),
            });
        }
        Ok(())
    }

    /// Read a value from a 32-bit buffer
    pub fn rd32(&mut self) -> Result<u32> {
        self.expect_width(Width::W32)?;
        self.read()
    }

    /// Read a value from a 16-bit buffer
    pub fn rd16(&mut self) -> Result<u16> {
        self.expect_width(Width::W16)?;
        self.read().map(|x| x as u16)
    }

    /// Read a value from an 8-bit buffer
    pub fn rd8(&mut self) -> Result<u8> {
        self.expect_width(Width::W8)?;
        self.read().map(|x| x as u8)
    }

    /// Write a value to a 32-bit buffer
    pub fn wr32(&mut self, val: u32) -> Result<()> {
        self.expect_width(Width::W32)?;
        self.write(val)
    }

    /// Write a value to a 16-bit buffer
    pub fn wr16(&mut self, val: u16) -> Result<()> {
        self.expect_width(Width::W16)?;
        self.write(val as u32)
    }

    /// Write a value to an 8-bit buffer
    pub fn wr8(&mut self, val: u8) -> Result<()> {
        self.expect_width(Width::W8)?;
        self.write(val as u32)
    }

    /// Reinterpret the buffer at another element width
    ///
    /// Narrowing splits each element into `old / new` parts, most
    /// significant part first for [`ByteOrder::Big`]. Widening groups
    /// `new / old` elements, zero padding the tail to a whole group; the
    /// first element of a group is the most significant part for `Big`.
    ///
    /// 16 to 32 bit conversion is not supported. On success both cursors are
    /// reset (read to 0, write to the end). Converting to the current width
    /// does nothing, cursors included.
    pub fn convert(&mut self, target: Width, order: ByteOrder) -> Result<()> {
        let from = self.width;
        if from == target {
            return Ok(());
        }
        let buf = match (from, target) {
            (Width::W16, Width::W32) => {
                return Err(Error::UnsupportedConversion {
                    from: from.bits(),
                    to: target.bits(),
                })
            }
            _ if target < from => split(&self.buf, from, target, order),
            _ => join(&self.buf, from, target, order),
        };
        log::trace!(
            "convert {} -> {} ({}): {} -> {} elements",
            from,
            target,
            order,
            self.buf.len(),
            buf.len()
        );
        self.buf = buf;
        self.width = target;
        self.wr_idx = self.buf.len();
        self.rd_idx = 0;
        Ok(())
    }

    /// Convert the buffer to 8-bit values
    pub fn convert8(&mut self, order: ByteOrder) -> Result<()> {
        self.convert(Width::W8, order)
    }

    /// Convert the buffer to 16-bit values
    pub fn convert16(&mut self, order: ByteOrder) -> Result<()> {
        self.convert(Width::W16, order)
    }

    /// Convert the buffer to 32-bit values
    pub fn convert32(&mut self, order: ByteOrder) -> Result<()> {
        self.convert(Width::W32, order)
    }

    /// Swap the byte order of every element in place
    ///
    /// Element count and width are unchanged. No-op for 8-bit buffers.
    pub fn endian_swap(&mut self) {
        let swap: fn(u32) -> u32 = match self.width {
            Width::W8 => return,
            Width::W16 => bits::swap16,
            Width::W32 => bits::swap32,
        };
        self.buf.iter_mut().for_each(|x| *x = swap(*x));
    }

    /// Returns true if both buffers have the same width and elements
    ///
    /// Cursor positions are not compared.
    pub fn compare(&self, other: &Self) -> bool {
        self.width == other.width && self.buf == other.buf
    }

    /// Raw bytes of the buffer as if converted to 8 bits with `order`
    ///
    /// The buffer itself is left untouched.
    pub fn byte_image(&self, order: ByteOrder) -> Vec<u8> {
        match self.width {
            Width::W8 => self.buf.iter().map(|&x| x as u8).collect(),
            width => split(&self.buf, width, Width::W8, order)
                .into_iter()
                .map(|x| x as u8)
                .collect(),
        }
    }

    /// MD5 digest of the buffer contents serialized with `order`
    pub fn md5_digest(&self, order: ByteOrder) -> [u8; 16] {
        Md5::digest(self.byte_image(order)).into()
    }

    /// MD5 digest as a lowercase hex string
    pub fn md5(&self, order: ByteOrder) -> String {
        alloc::format!("{:x}", Md5::digest(self.byte_image(order)))
    }

    /// Render an 8-bit buffer as text, with `.` for unprintable bytes
    pub fn ascii_str(&self) -> Result<String> {
        self.expect_width(Width::W8)?;
        Ok(self
            .buf
            .iter()
            .map(|&x| {
                let b = x as u8;
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect())
    }

    /// Raw bytes of an 8-bit buffer
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.expect_width(Width::W8)?;
        Ok(self.buf.iter().map(|&x| x as u8).collect())
    }
}

/// Break each value into `from / to` parts
fn split(values: &[u32], from: Width, to: Width, order: ByteOrder) -> Vec<u32> {
    let parts = from.bytes() / to.bytes();
    let shift = to.bits();
    let mask = to.mask();
    let mut out = Vec::with_capacity(values.len() * parts);
    for &x in values {
        for i in 0..parts {
            let chunk = match order {
                ByteOrder::Big => parts - 1 - i,
                ByteOrder::Little => i,
            };
            out.push((x >> (chunk as u32 * shift)) & mask);
        }
    }
    out
}

/// Combine runs of `to / from` values; a short last run is zero padded
fn join(values: &[u32], from: Width, to: Width, order: ByteOrder) -> Vec<u32> {
    let parts = to.bytes() / from.bytes();
    let shift = from.bits();
    values
        .chunks(parts)
        .map(|group| {
            group.iter().enumerate().fold(0u32, |acc, (i, &x)| {
                let chunk = match order {
                    ByteOrder::Big => parts - 1 - i,
                    ByteOrder::Little => i,
                };
                acc | (x << (chunk as u32 * shift))
            })
        })
        .collect()
}

impl Clone for DataBuffer {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl PartialEq for DataBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other)
    }
}

impl Eq for DataBuffer {}

impl fmt::Display for DataBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.width.hex_digits();
        for (i, x) in self.buf.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:0digits$x}", x, digits = digits)?;
        }
        Ok(())
    }
}
