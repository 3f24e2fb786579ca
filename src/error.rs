//! Error types for rjtag

use thiserror::Error;

/// Errors from the stream adapters and transfer helpers
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error on the underlying file or stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Buffer operation failed
    #[error("buffer error: {0}")]
    Buffer(#[from] rjtag_core::Error),

    /// Progress bar template could not be parsed
    #[error("progress template error: {0}")]
    Template(#[from] indicatif::style::TemplateError),
}

/// Result type alias for rjtag operations
pub type Result<T> = std::result::Result<T, Error>;
