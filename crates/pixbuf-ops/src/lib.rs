//! # pixbuf-ops
//!
//! Pixel operations on [`pixbuf_core::PixelBuffer`].
//!
//! # Modules
//!
//! - [`resize`] - Bicubic scaling by ratio or to an exact size
//! - [`composite`] - Drawing one buffer onto another with blue-as-opacity blending
//! - [`kernel`] - Cubic convolution and clamping helpers shared by resize
//!
//! Every operation runs synchronously on the calling thread and either
//! completes fully or leaves its buffers untouched.
//!
//! # Example
//!
//! ```rust
//! use pixbuf_core::{PixelBuffer, Rgb};
//! use pixbuf_ops::{draw, resize};
//!
//! let mut bg = PixelBuffer::filled(300, 300, Rgb::new(20, 40, 60)).unwrap();
//! let mut overlay = PixelBuffer::filled(100, 100, Rgb::new(250, 250, 255)).unwrap();
//!
//! // Zoom the overlay out by 50%, then place it at (100, 100)
//! resize(&mut overlay, 0.5, None).unwrap();
//! draw(&mut bg, &overlay, 100, 100).unwrap();
//!
//! assert_eq!(bg.pixel(120, 120), Rgb::new(250, 250, 255));
//! assert_eq!(bg.pixel(10, 10), Rgb::new(20, 40, 60));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod composite;
pub mod kernel;
pub mod resize;

pub use composite::draw;
pub use error::{OpsError, OpsResult};
pub use resize::{resize, resize_to, resized, ResizeRatio};
