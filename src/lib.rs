//! rjtag - Data buffers and file transfer for device programming
//!
//! Device sessions fill a [`DataBuffer`] through its write cursor. The
//! buffer can then be converted or endian swapped, and streamed to a file,
//! loaded back from one, or checked against one.
//!
//! # Architecture
//!
//! - [`rjtag_core`] holds the `no_std` buffer, width and bit helpers
//! - [`stream`] has the sequential file adapters (writer, reader, verifier)
//! - [`transfer`] moves whole buffers through those adapters
//!
//! ```ignore
//! use rjtag::{transfer, ByteOrder, DataBuffer, StreamConfig, Width};
//!
//! let buf = DataBuffer::from_values(Width::W32, [0xdeadbeef, 0x01020304]);
//! let config = StreamConfig::default().with_order(ByteOrder::Big);
//! transfer::save_file("image.bin", &buf, &config)?;
//! let report = transfer::verify_file("image.bin", &buf, &config)?;
//! assert!(report.is_same());
//! ```

pub mod config;
pub mod error;
pub mod progress;
pub mod stream;
pub mod transfer;

pub use config::StreamConfig;
pub use error::{Error, Result};
pub use progress::TransferStats;
pub use rjtag_core::{bits, ByteOrder, DataBuffer, Width};
pub use stream::{Mismatch, StreamReader, StreamVerifier, StreamWriter, VerifyReport};
