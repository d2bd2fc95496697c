//! Format detection utilities.
//!
//! Detects image formats from format names, file extensions and magic bytes.

use crate::{IoError, IoResult};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];

/// Supported image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// PNG format.
    Png,
    /// JPEG format.
    Jpeg,
}

impl ImageFormat {
    /// Parses a format name, ignoring ASCII case.
    ///
    /// Accepts `png`, `jpeg` and `jpg`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::UnsupportedFormat`] for any other name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixbuf_io::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::parse("JPG").unwrap(), ImageFormat::Jpeg);
    /// assert!(ImageFormat::parse("bmp").is_err());
    /// ```
    pub fn parse(name: &str) -> IoResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            _ => Err(IoError::UnsupportedFormat(name.to_string())),
        }
    }

    /// Detects format from file path.
    ///
    /// First checks magic bytes, falls back to extension.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened, or if neither its content nor
    /// its extension identifies a supported format.
    pub fn detect<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();

        if let Some(format) = Self::from_magic_bytes(path)? {
            return Ok(format);
        }

        Self::from_extension(path).ok_or_else(|| {
            IoError::DecodeError(format!("unrecognized image data in {}", path.display()))
        })
    }

    /// Detects format from file extension only.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        Self::parse(ext).ok()
    }

    /// Detects format from the first bytes of a file.
    pub fn from_magic_bytes<P: AsRef<Path>>(path: P) -> IoResult<Option<Self>> {
        let mut file = File::open(path)?;
        let mut header = [0u8; 8];
        let mut filled = 0;
        while filled < header.len() {
            match file.read(&mut header[filled..])? {
                0 => break,
                n => filled += n,
            }
        }
        Ok(Self::from_bytes(&header[..filled]))
    }

    /// Detects format from raw bytes (magic number check).
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&PNG_MAGIC) {
            Some(Self::Png)
        } else if bytes.starts_with(&JPEG_MAGIC) {
            Some(Self::Jpeg)
        } else {
            None
        }
    }

    /// Returns the typical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = IoError;

    fn from_str(s: &str) -> IoResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
        })
    }
}
