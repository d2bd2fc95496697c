//! PNG format support.
//!
//! Any stored layout (palette, gray, gray+alpha, RGBA, 16-bit) is decoded
//! to 8-bit RGB; alpha is discarded. Output is always 8-bit RGB.
//!
//! # Example
//!
//! ```rust,no_run
//! use pixbuf_io::png::PngCodec;
//! use pixbuf_io::{ImageReader, ImageWriter, PngOptions};
//!
//! let image = PngCodec::new().read("input.png")?;
//! PngCodec::with_options(PngOptions::default().with_compression_level(6))
//!     .write("output.png", &image)?;
//! # Ok::<(), pixbuf_io::IoError>(())
//! ```

use crate::{ImageReader, ImageWriter, IoError, IoResult, PngOptions};
use pixbuf_core::PixelBuffer;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::Path;
use tracing::debug;

/// PNG reader and writer.
#[derive(Debug, Clone, Default)]
pub struct PngCodec {
    options: PngOptions,
}

impl PngCodec {
    /// Creates a codec with default options (no compression).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a codec with custom options.
    pub fn with_options(options: PngOptions) -> Self {
        Self { options }
    }

    fn decode<R: BufRead + Seek>(&self, reader: R) -> IoResult<PixelBuffer> {
        let mut decoder = png::Decoder::new(reader);
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
        let mut reader = decoder
            .read_info()
            .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

        let buf_size = reader
            .output_buffer_size()
            .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
        let mut buf = vec![0u8; buf_size];
        let info = reader
            .next_frame(&mut buf)
            .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
        buf.truncate(info.buffer_size());

        let rgb = match (info.color_type, info.bit_depth) {
            (png::ColorType::Rgb, png::BitDepth::Eight) => buf,
            (png::ColorType::Rgba, png::BitDepth::Eight) => buf
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect(),
            (png::ColorType::Grayscale, png::BitDepth::Eight) => {
                buf.iter().flat_map(|&g| [g, g, g]).collect()
            }
            (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => buf
                .chunks_exact(2)
                .flat_map(|ga| [ga[0], ga[0], ga[0]])
                .collect(),
            (color_type, bit_depth) => {
                return Err(IoError::DecodeError(format!(
                    "unsupported PNG layout: {:?} {:?}",
                    color_type, bit_depth
                )));
            }
        };

        debug!(width = info.width, height = info.height, color = ?info.color_type, "decoded PNG");
        Ok(PixelBuffer::from_raw(info.width, info.height, rgb)?)
    }

    fn deflate(&self) -> png::DeflateCompression {
        match self.options.compression_level() {
            0 => png::DeflateCompression::NoCompression,
            level => png::DeflateCompression::Level(level),
        }
    }
}

impl ImageReader for PngCodec {
    fn read<P: AsRef<Path>>(&self, path: P) -> IoResult<PixelBuffer> {
        let file = File::open(path.as_ref())?;
        self.decode(BufReader::new(file))
    }

    fn read_from_memory(&self, data: &[u8]) -> IoResult<PixelBuffer> {
        self.decode(Cursor::new(data))
    }
}

impl ImageWriter for PngCodec {
    fn write_to_memory(&self, image: &PixelBuffer) -> IoResult<Vec<u8>> {
        image.ensure_allocated("encode PNG")?;

        let mut out = Vec::new();
        let mut encoder = png::Encoder::new(&mut out, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_deflate_compression(self.deflate());

        let mut writer = encoder
            .write_header()
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
        writer
            .write_image_data(image.as_bytes())
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| IoError::EncodeError(e.to_string()))?;

        debug!(
            width = image.width(),
            height = image.height(),
            level = self.options.compression_level(),
            bytes = out.len(),
            "encoded PNG"
        );
        Ok(out)
    }
}
