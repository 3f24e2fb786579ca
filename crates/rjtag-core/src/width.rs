//! Element widths and byte orders

use crate::bits;
use crate::error::{Error, Result};
use core::fmt;
use core::str::FromStr;

/// Bit width of the elements held in a buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Width {
    /// 8-bit elements
    W8,
    /// 16-bit elements
    W16,
    /// 32-bit elements
    W32,
}

impl Width {
    /// Returns the number of bits per element
    pub const fn bits(&self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
        }
    }

    /// Returns the number of bytes per element
    pub const fn bytes(&self) -> usize {
        match self {
            Self::W8 => 1,
            Self::W16 => 2,
            Self::W32 => 4,
        }
    }

    /// Returns the value mask for this width
    pub const fn mask(&self) -> u32 {
        bits::mask(self.bits())
    }

    /// Returns the number of hex digits needed to print one element
    pub const fn hex_digits(&self) -> usize {
        (self.bits() / 4) as usize
    }
}

impl TryFrom<u32> for Width {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self> {
        match bits {
            8 => Ok(Self::W8),
            16 => Ok(Self::W16),
            32 => Ok(Self::W32),
            other => Err(Error::InvalidWidth(other)),
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Order of bytes (or sub-elements) within a wider value
///
/// Used both for width conversion and for stream encoding. `Big` puts the
/// most significant part first, `Little` the least significant part.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most significant first ("be")
    Big,
    /// Least significant first ("le")
    #[default]
    Little,
}

impl ByteOrder {
    /// Encode the low `width` bits of `value` into `out`
    ///
    /// Returns the number of bytes written. `out` must hold at least
    /// `width.bytes()` bytes.
    pub fn encode(&self, value: u32, width: Width, out: &mut [u8]) -> usize {
        let n = width.bytes();
        match (self, width) {
            (_, Width::W8) => out[0] = value as u8,
            (Self::Big, Width::W16) => out[..2].copy_from_slice(&(value as u16).to_be_bytes()),
            (Self::Little, Width::W16) => out[..2].copy_from_slice(&(value as u16).to_le_bytes()),
            (Self::Big, Width::W32) => out[..4].copy_from_slice(&value.to_be_bytes()),
            (Self::Little, Width::W32) => out[..4].copy_from_slice(&value.to_le_bytes()),
        }
        n
    }

    /// Decode a value of the given width from the first bytes of `bytes`
    pub fn decode(&self, bytes: &[u8], width: Width) -> u32 {
        match (self, width) {
            (_, Width::W8) => bytes[0] as u32,
            (Self::Big, Width::W16) => u16::from_be_bytes([bytes[0], bytes[1]]) as u32,
            (Self::Little, Width::W16) => u16::from_le_bytes([bytes[0], bytes[1]]) as u32,
            (Self::Big, Width::W32) => {
                u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
            }
            (Self::Little, Width::W32) => {
                u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
            }
        }
    }
}

impl FromStr for ByteOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "be" | "big" => Ok(Self::Big),
            "le" | "little" => Ok(Self::Little),
            _ => Err(Error::InvalidByteOrder),
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Big => write!(f, "be"),
            Self::Little => write!(f, "le"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_from_bits() {
        assert_eq!(Width::try_from(8), Ok(Width::W8));
        assert_eq!(Width::try_from(16), Ok(Width::W16));
        assert_eq!(Width::try_from(32), Ok(Width::W32));
        assert_eq!(Width::try_from(24), Err(Error::InvalidWidth(24)));
    }

    #[test]
    fn test_width_properties() {
        assert_eq!(Width::W16.bytes(), 2);
        assert_eq!(Width::W32.mask(), u32::MAX);
        assert_eq!(Width::W8.hex_digits(), 2);
        assert_eq!(Width::W32.hex_digits(), 8);
    }

    #[test]
    fn test_byte_order_parse() {
        assert_eq!("be".parse::<ByteOrder>(), Ok(ByteOrder::Big));
        assert_eq!("little".parse::<ByteOrder>(), Ok(ByteOrder::Little));
        assert_eq!("middle".parse::<ByteOrder>(), Err(Error::InvalidByteOrder));
        assert_eq!(ByteOrder::default(), ByteOrder::Little);
    }

    #[test]
    fn test_encode_layout() {
        let mut out = [0u8; 4];
        assert_eq!(ByteOrder::Big.encode(0x12345678, Width::W32, &mut out), 4);
        assert_eq!(out, [0x12, 0x34, 0x56, 0x78]);

        assert_eq!(ByteOrder::Little.encode(0x1234, Width::W16, &mut out), 2);
        assert_eq!(&out[..2], &[0x34, 0x12]);

        assert_eq!(ByteOrder::Big.encode(0xab, Width::W8, &mut out), 1);
        assert_eq!(out[0], 0xab);
    }

    #[test]
    fn test_decode_layout() {
        let bytes = [0x01, 0x02, 0x03, 0x04];
        assert_eq!(ByteOrder::Big.decode(&bytes, Width::W32), 0x01020304);
        assert_eq!(ByteOrder::Little.decode(&bytes, Width::W32), 0x04030201);
        assert_eq!(ByteOrder::Big.decode(&bytes, Width::W16), 0x0102);
        assert_eq!(ByteOrder::Little.decode(&bytes, Width::W16), 0x0201);
        assert_eq!(ByteOrder::Little.decode(&bytes, Width::W8), 0x01);
    }
}
