//! I/O traits for image readers and writers.
//!
//! These traits define the interface for format-specific implementations.

use crate::IoResult;
use pixbuf_core::PixelBuffer;
use std::path::Path;

/// Trait for image format readers.
///
/// Readers always produce 8-bit RGB, whatever the stored layout.
pub trait ImageReader {
    /// Reads an image from a file path.
    fn read<P: AsRef<Path>>(&self, path: P) -> IoResult<PixelBuffer>;

    /// Reads an image from memory.
    fn read_from_memory(&self, data: &[u8]) -> IoResult<PixelBuffer>;
}

/// Trait for image format writers.
pub trait ImageWriter {
    /// Writes an image to a file path.
    ///
    /// The image is encoded completely before the file is created, so an
    /// encoding failure leaves nothing on disk.
    fn write<P: AsRef<Path>>(&self, path: P, image: &PixelBuffer) -> IoResult<()> {
        let data = self.write_to_memory(image)?;
        std::fs::write(path.as_ref(), data)?;
        Ok(())
    }

    /// Writes an image to memory.
    fn write_to_memory(&self, image: &PixelBuffer) -> IoResult<Vec<u8>>;
}
