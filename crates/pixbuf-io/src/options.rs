//! Encoder settings for [`save`](crate::save).
//!
//! Out-of-range values passed to the setters are clamped into the valid
//! range rather than rejected.
//!
//! # Example
//!
//! ```rust
//! use pixbuf_io::{JpegOptions, PngOptions, SaveOptions};
//!
//! let opts = SaveOptions::default()
//!     .with_png(PngOptions::default().with_compression_level(12))
//!     .with_jpeg(JpegOptions::default().with_quality(85));
//! assert_eq!(opts.png.compression_level(), 9);
//! assert_eq!(opts.jpeg.quality(), 85);
//! ```

/// Highest PNG compression level.
pub const MAX_COMPRESSION_LEVEL: u8 = 9;

/// Highest JPEG quality.
pub const MAX_QUALITY: u8 = 100;

/// Quality the JPEG encoder substitutes for a requested quality of 0.
pub const FALLBACK_QUALITY: u8 = 90;

/// Options for writing PNG files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PngOptions {
    compression_level: u8,
}

impl PngOptions {
    /// Sets the zlib compression level, clamped to `0..=9`.
    ///
    /// 0 stores the pixel data uncompressed (the default).
    pub fn with_compression_level(mut self, level: i32) -> Self {
        self.compression_level = level.clamp(0, i32::from(MAX_COMPRESSION_LEVEL)) as u8;
        self
    }

    /// Compression level in `0..=9`.
    pub fn compression_level(&self) -> u8 {
        self.compression_level
    }
}

/// Options for writing JPEG files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegOptions {
    quality: u8,
}

impl Default for JpegOptions {
    fn default() -> Self {
        Self { quality: MAX_QUALITY }
    }
}

impl JpegOptions {
    /// Sets the quality, clamped to `0..=100`. Default: 100.
    pub fn with_quality(mut self, quality: i32) -> Self {
        self.quality = quality.clamp(0, i32::from(MAX_QUALITY)) as u8;
        self
    }

    /// Quality in `0..=100` as requested.
    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Quality handed to the encoder: 0 means [`FALLBACK_QUALITY`].
    pub fn effective_quality(&self) -> u8 {
        match self.quality {
            0 => FALLBACK_QUALITY,
            q => q,
        }
    }
}

/// Per-format options for [`save`](crate::save).
///
/// Only the options matching the chosen format are consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SaveOptions {
    /// Used when saving PNG.
    pub png: PngOptions,
    /// Used when saving JPEG.
    pub jpeg: JpegOptions,
}

impl SaveOptions {
    /// Replaces the PNG options.
    pub fn with_png(mut self, png: PngOptions) -> Self {
        self.png = png;
        self
    }

    /// Replaces the JPEG options.
    pub fn with_jpeg(mut self, jpeg: JpegOptions) -> Self {
        self.jpeg = jpeg;
        self
    }
}
