//! rjtag-core - Data buffers for device programming sessions
//!
//! This crate provides the width-typed element container used to move data
//! between a device session and persistent files. Elements are 8, 16 or 32
//! bit unsigned values and a buffer can be reinterpreted at a different
//! width under a chosen byte order.
//!
//! # Features
//!
//! - `std` - Enable standard library support (includes `alloc`)
//! - `alloc` - Enable heap allocation, required for [`DataBuffer`]
//!
//! # Example
//!
//! ```ignore
//! use rjtag_core::{ByteOrder, DataBuffer, Width};
//!
//! let mut buf = DataBuffer::from_values(Width::W8, [0x01, 0x02, 0x03, 0x04]);
//! buf.convert(Width::W16, ByteOrder::Little)?;
//! assert_eq!(buf.as_slice(), &[0x0201, 0x0403]);
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod bits;
#[cfg(feature = "alloc")]
pub mod buffer;
pub mod error;
pub mod width;

#[cfg(feature = "alloc")]
pub use buffer::DataBuffer;
pub use error::{Error, Result};
pub use width::{ByteOrder, Width};
