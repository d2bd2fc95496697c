//! # pixbuf-core
//!
//! Core types for in-process RGB image work.
//!
//! This crate provides the data model shared by the rest of the workspace:
//!
//! - [`PixelBuffer`] - Owned, tightly packed 3-channel byte buffer
//! - [`Rgb`] - 8-bit RGB pixel value
//! - [`pixel_index`] - The one place 2-D coordinates become byte offsets
//! - [`Error`], [`ErrorKind`] - Failure reporting
//!
//! ## Crate Structure
//!
//! ```text
//! pixbuf-core (this crate)
//!    ^
//!    |
//!    +-- pixbuf-ops (bicubic resize, alpha compositing)
//!    +-- pixbuf-io  (PNG/JPEG codec adapter)
//!    +-- pixbuf-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod pixel;

pub use buffer::{byte_len, PixelBuffer};
pub use error::{Error, ErrorKind, Result};
pub use pixel::{pixel_index, Rgb, CHANNELS};

/// Prelude module for convenient imports.
///
/// ```
/// use pixbuf_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::error::{Error, ErrorKind, Result};
    pub use crate::pixel::Rgb;
}
