//! Error types for codec operations.

use pixbuf_core::ErrorKind;
use std::io;
use thiserror::Error;

/// Codec adapter error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Format name or file type that the adapter does not handle.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Buffer-level failure (allocation, empty buffer, bad dimensions).
    #[error(transparent)]
    Core(#[from] pixbuf_core::Error),
}

impl IoError {
    /// Classifies the error.
    ///
    /// File and codec failures are [`ErrorKind::Codec`]; an unknown format
    /// name is a caller mistake and maps to [`ErrorKind::InvalidArgument`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) | Self::DecodeError(_) | Self::EncodeError(_) => ErrorKind::Codec,
            Self::UnsupportedFormat(_) => ErrorKind::InvalidArgument,
            Self::Core(e) => e.kind(),
        }
    }
}

/// Result type for codec operations.
pub type IoResult<T> = Result<T, IoError>;
