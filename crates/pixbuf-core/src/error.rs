//! Error types for pixbuf-core operations.
//!
//! Every fallible operation in the workspace reports one of four kinds of
//! failure, captured by [`ErrorKind`]. Each crate keeps its own error enum
//! (this one, `pixbuf_ops::OpsError`, `pixbuf_io::IoError`) and maps its
//! variants onto these kinds through a `kind()` method, so callers can match
//! on the category without knowing which layer failed.
//!
//! # Usage
//!
//! ```rust
//! use pixbuf_core::{Error, ErrorKind, PixelBuffer};
//!
//! let err = PixelBuffer::new(u32::MAX, u32::MAX).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Allocation);
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Category of a failure, shared by all crates in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Storage could not be obtained.
    Allocation,
    /// A caller-supplied value was out of range or unsupported.
    InvalidArgument,
    /// The operation needs pixel storage that the buffer does not have.
    InvalidState,
    /// Decoding or encoding an image file failed.
    Codec,
}

/// Errors raised by [`PixelBuffer`](crate::PixelBuffer) construction and access.
#[derive(Debug, Error)]
pub enum Error {
    /// Memory allocation failed.
    ///
    /// Returned when the byte count overflows `usize` or the allocator
    /// refuses the reservation.
    #[error("failed to allocate {requested} bytes: {reason}")]
    AllocationFailed {
        /// Bytes requested
        requested: usize,
        /// Failure reason
        reason: String,
    },

    /// Raw data does not match the stated dimensions.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Buffer has no pixel storage.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl Error {
    /// Creates an [`Error::AllocationFailed`] error.
    #[inline]
    pub fn allocation_failed(requested: usize, reason: impl Into<String>) -> Self {
        Self::AllocationFailed {
            requested,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidState`] error.
    #[inline]
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Returns the failure category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AllocationFailed { .. } => ErrorKind::Allocation,
            Self::InvalidDimensions { .. } => ErrorKind::InvalidArgument,
            Self::InvalidState(_) => ErrorKind::InvalidState,
        }
    }

    /// Returns `true` if this is an allocation error.
    #[inline]
    pub fn is_allocation_error(&self) -> bool {
        matches!(self, Self::AllocationFailed { .. })
    }
}
