//! # pixbuf-io
//!
//! Codec adapter between [`PixelBuffer`] and encoded image files.
//!
//! - **PNG** - lossless, zlib level 0-9
//! - **JPEG** - lossy, quality 0-100
//!
//! Decoding always yields 8-bit RGB: gray is expanded, alpha dropped,
//! 16-bit samples narrowed.
//!
//! # Architecture
//!
//! - [`ImageReader`] / [`ImageWriter`] - traits implemented by
//!   [`png::PngCodec`] and [`jpeg::JpegCodec`]
//! - [`load`] / [`load_into`] - read with format auto-detection
//! - [`save`] / [`save_as`] - write with a named or typed format and
//!   [`SaveOptions`]
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pixbuf_io::{load, save, JpegOptions, SaveOptions};
//!
//! let image = load("input.png")?;
//! let opts = SaveOptions::default().with_jpeg(JpegOptions::default().with_quality(85));
//! save(&image, "output.jpg", "jpeg", opts)?;
//! # Ok::<(), pixbuf_io::IoError>(())
//! ```
//!
//! # Dependencies
//!
//! - `pixbuf-core` - pixel buffer type
//! - `png` - PNG support
//! - `jpeg-decoder` / `jpeg-encoder` - JPEG support

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;
mod options;
mod traits;

pub mod jpeg;
pub mod png;

pub use detect::ImageFormat;
pub use error::{IoError, IoResult};
pub use options::{JpegOptions, PngOptions, SaveOptions};
pub use options::{FALLBACK_QUALITY, MAX_COMPRESSION_LEVEL, MAX_QUALITY};
pub use traits::{ImageReader, ImageWriter};

use pixbuf_core::PixelBuffer;
use std::path::Path;
use tracing::debug;

/// Reads an image from a file, auto-detecting the format.
///
/// The format is detected by magic bytes, then by file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The format is not supported
/// - The file is corrupted
pub fn load<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    let format = ImageFormat::detect(path)?;
    debug!(path = %path.display(), %format, "loading");

    match format {
        ImageFormat::Png => png::PngCodec::new().read(path),
        ImageFormat::Jpeg => jpeg::JpegCodec::new().read(path),
    }
}

/// Loads a file into an existing buffer.
///
/// The previous contents are replaced only once decoding has succeeded;
/// on error `buf` is left as it was.
pub fn load_into<P: AsRef<Path>>(buf: &mut PixelBuffer, path: P) -> IoResult<()> {
    let loaded = load(path)?;
    buf.replace_with(loaded);
    Ok(())
}

/// Decodes an in-memory PNG or JPEG, identified by its magic bytes.
pub fn decode(data: &[u8]) -> IoResult<PixelBuffer> {
    match ImageFormat::from_bytes(data) {
        Some(ImageFormat::Png) => png::PngCodec::new().read_from_memory(data),
        Some(ImageFormat::Jpeg) => jpeg::JpegCodec::new().read_from_memory(data),
        None => Err(IoError::DecodeError("unrecognized image data".into())),
    }
}

/// Encodes a buffer to memory in the given format.
pub fn encode(buf: &PixelBuffer, format: ImageFormat, options: SaveOptions) -> IoResult<Vec<u8>> {
    match format {
        ImageFormat::Png => png::PngCodec::with_options(options.png).write_to_memory(buf),
        ImageFormat::Jpeg => jpeg::JpegCodec::with_options(options.jpeg).write_to_memory(buf),
    }
}

/// Writes a buffer to `path` in the format named by `format`.
///
/// `format` is `"png"`, `"jpeg"` or `"jpg"`, in any case. The file
/// extension is not consulted. Only the options for the chosen format
/// are used.
///
/// # Errors
///
/// - `InvalidState` (via [`IoError::Core`]) if `buf` is empty
/// - [`IoError::UnsupportedFormat`] for any other format name
/// - [`IoError::EncodeError`] or [`IoError::Io`] if encoding or writing fails
pub fn save<P: AsRef<Path>>(
    buf: &PixelBuffer,
    path: P,
    format: &str,
    options: SaveOptions,
) -> IoResult<()> {
    buf.ensure_allocated("save")?;
    save_as(buf, path, ImageFormat::parse(format)?, options)
}

/// Writes a buffer to `path` in an already resolved format.
///
/// The whole file is encoded in memory first; nothing is written if
/// encoding fails.
pub fn save_as<P: AsRef<Path>>(
    buf: &PixelBuffer,
    path: P,
    format: ImageFormat,
    options: SaveOptions,
) -> IoResult<()> {
    let path = path.as_ref();
    let data = encode(buf, format, options)?;
    std::fs::write(path, &data)?;
    debug!(path = %path.display(), %format, bytes = data.len(), "saved");
    Ok(())
}
