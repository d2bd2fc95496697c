//! JPEG format support.
//!
//! Decoding accepts RGB, grayscale (8 and 16 bit) and CMYK input and always
//! yields 8-bit RGB. Encoding writes baseline RGB at the configured quality.
//!
//! # Example
//!
//! ```rust,no_run
//! use pixbuf_io::jpeg::JpegCodec;
//! use pixbuf_io::{ImageReader, ImageWriter, JpegOptions};
//!
//! let image = JpegCodec::new().read("photo.jpg")?;
//! JpegCodec::with_options(JpegOptions::default().with_quality(80))
//!     .write("preview.jpg", &image)?;
//! # Ok::<(), pixbuf_io::IoError>(())
//! ```

use crate::{ImageReader, ImageWriter, IoError, IoResult, JpegOptions};
use pixbuf_core::PixelBuffer;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;
use tracing::debug;

/// Largest width or height a JPEG frame header can describe.
pub const MAX_DIMENSION: u32 = u16::MAX as u32;

/// JPEG reader and writer.
#[derive(Debug, Clone, Default)]
pub struct JpegCodec {
    options: JpegOptions,
}

impl JpegCodec {
    /// Creates a codec with default options (quality 100).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a codec with custom options.
    pub fn with_options(options: JpegOptions) -> Self {
        Self { options }
    }

    fn decode<R: Read>(&self, reader: R) -> IoResult<PixelBuffer> {
        let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(reader));
        let pixels = decoder
            .decode()
            .map_err(|e| IoError::DecodeError(e.to_string()))?;

        let info = decoder
            .info()
            .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;

        let rgb = match info.pixel_format {
            jpeg_decoder::PixelFormat::RGB24 => pixels,
            jpeg_decoder::PixelFormat::L8 => pixels.iter().flat_map(|&g| [g, g, g]).collect(),
            jpeg_decoder::PixelFormat::L16 => pixels
                .chunks_exact(2)
                // high byte
                .flat_map(|l16| [l16[0], l16[0], l16[0]])
                .collect(),
            jpeg_decoder::PixelFormat::CMYK32 => pixels
                .chunks_exact(4)
                .flat_map(|cmyk| {
                    let [c, m, y, k] = [cmyk[0], cmyk[1], cmyk[2], cmyk[3]].map(|v| v as f32 / 255.0);
                    [
                        ((1.0 - c) * (1.0 - k) * 255.0) as u8,
                        ((1.0 - m) * (1.0 - k) * 255.0) as u8,
                        ((1.0 - y) * (1.0 - k) * 255.0) as u8,
                    ]
                })
                .collect(),
        };

        let (width, height) = (u32::from(info.width), u32::from(info.height));
        debug!(width, height, format = ?info.pixel_format, "decoded JPEG");
        Ok(PixelBuffer::from_raw(width, height, rgb)?)
    }
}

impl ImageReader for JpegCodec {
    fn read<P: AsRef<Path>>(&self, path: P) -> IoResult<PixelBuffer> {
        let data = std::fs::read(path.as_ref())?;
        self.decode(Cursor::new(data))
    }

    fn read_from_memory(&self, data: &[u8]) -> IoResult<PixelBuffer> {
        self.decode(Cursor::new(data))
    }
}

impl ImageWriter for JpegCodec {
    fn write_to_memory(&self, image: &PixelBuffer) -> IoResult<Vec<u8>> {
        use jpeg_encoder::{ColorType, Encoder};

        image.ensure_allocated("encode JPEG")?;
        let (width, height) = image.dimensions();
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(IoError::EncodeError(format!(
                "{}x{} exceeds the JPEG limit of {} pixels per side",
                width, height, MAX_DIMENSION
            )));
        }

        let quality = self.options.effective_quality();
        let mut buffer = Vec::new();
        let encoder = Encoder::new(&mut buffer, quality);
        encoder
            .encode(image.as_bytes(), width as u16, height as u16, ColorType::Rgb)
            .map_err(|e: jpeg_encoder::EncodingError| IoError::EncodeError(e.to_string()))?;

        debug!(width, height, quality, bytes = buffer.len(), "encoded JPEG");
        Ok(buffer)
    }
}
