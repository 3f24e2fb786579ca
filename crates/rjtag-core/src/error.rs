//! Error types for rjtag-core
//!
//! This module provides a no_std compatible error type that can be used
//! throughout the crate.

use core::fmt;

/// Core error type - no_std compatible, Copy for efficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    // Cursor errors
    /// Read attempted past the last element
    BufferUnderflow,
    /// Write cursor is more than one position past the append boundary
    BufferOverrun {
        /// Write cursor at the time of the write
        cursor: usize,
        /// Number of elements in the buffer
        len: usize,
    },

    // Width errors
    /// Operation requires a different element width
    WidthMismatch {
        /// Width the operation requires
        expected: u32,
        /// Current width of the buffer
        actual: u32,
    },
    /// Conversion between these widths is not implemented
    UnsupportedConversion {
        /// Width before conversion
        from: u32,
        /// Requested width
        to: u32,
    },
    /// Width is not one of 8, 16 or 32 bits
    InvalidWidth(u32),
    /// Byte order string not recognised
    InvalidByteOrder,
}

impl Error {
    /// Returns true if the caller can reasonably continue after this error
    ///
    /// Only an underflow (end of data) is recoverable. Everything else means
    /// the caller used the buffer at the wrong width or moved a cursor where
    /// it should never be.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::BufferUnderflow)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferUnderflow => write!(f, "buffer underflow: no more elements to read"),
            Self::BufferOverrun { cursor, len } => write!(
                f,
                "buffer write error: cursor {} is more than 1 off the end ({} elements)",
                cursor, len
            ),
            Self::WidthMismatch { expected, actual } => write!(
                f,
                "width mismatch: operation needs {} bits, buffer is {} bits",
                expected, actual
            ),
            Self::UnsupportedConversion { from, to } => {
                write!(f, "unsupported conversion from {} to {} bits", from, to)
            }
            Self::InvalidWidth(width) => write!(f, "invalid element width: {} bits", width),
            Self::InvalidByteOrder => write!(f, "invalid byte order (expected 'be' or 'le')"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias using the core Error type
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_underflow_is_recoverable() {
        assert!(Error::BufferUnderflow.is_recoverable());
        assert!(!Error::BufferOverrun { cursor: 3, len: 1 }.is_recoverable());
        assert!(!Error::WidthMismatch {
            expected: 8,
            actual: 16
        }
        .is_recoverable());
        assert!(!Error::UnsupportedConversion { from: 16, to: 32 }.is_recoverable());
        assert!(!Error::InvalidWidth(12).is_recoverable());
    }
}
