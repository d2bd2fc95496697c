//! Error types for image operations.

use pixbuf_core::ErrorKind;
use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid parameter value, e.g. a scale ratio that yields no pixels.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure raised by the pixel buffer itself (allocation, missing storage).
    #[error(transparent)]
    Core(#[from] pixbuf_core::Error),
}

impl OpsError {
    /// Returns the failure category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::Core(e) => e.kind(),
        }
    }
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
