//! Owned RGB pixel buffer.
//!
//! [`PixelBuffer`] is the single data structure shared by the resampler,
//! the compositor and the codec adapter. It owns a tightly packed,
//! row-major `Vec<u8>` of `width * height * 3` bytes, or nothing at all
//! when the buffer is empty (0x0).
//!
//! # Lifecycle
//!
//! - [`PixelBuffer::empty`] - valid but unusable for pixel operations
//! - [`PixelBuffer::new`] / [`PixelBuffer::square`] - zero-filled (opaque black)
//! - [`PixelBuffer::replace_with`] - wholesale replacement, used by resize
//!   and load once the new storage is fully built
//!
//! Construction never leaves a half-built value behind: allocation is done
//! with [`Vec::try_reserve_exact`] before a buffer exists, so a failure
//! yields an [`Error`] and no buffer.
//!
//! # Example
//!
//! ```rust
//! use pixbuf_core::{PixelBuffer, Rgb};
//!
//! let mut buf = PixelBuffer::new(4, 2).unwrap();
//! assert_eq!(buf.as_bytes().len(), 4 * 2 * 3);
//!
//! buf.set_pixel(1, 1, Rgb::new(255, 0, 0));
//! assert_eq!(buf.pixel(1, 1), Rgb::new(255, 0, 0));
//! ```

use crate::{pixel_index, Error, Result, Rgb, CHANNELS};
use tracing::trace;

/// Owned, contiguous RGB image storage.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    /// Pixel bytes, `width * height * 3` long or empty
    data: Vec<u8>,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
}

/// Number of bytes needed for a `width` x `height` RGB buffer.
///
/// # Errors
///
/// Returns [`Error::AllocationFailed`] if the count overflows `usize`.
pub fn byte_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(|| {
            Error::allocation_failed(
                usize::MAX,
                format!("{}x{} RGB buffer overflows the address space", width, height),
            )
        })
}

/// Allocates `len` zeroed bytes without aborting on failure.
fn alloc_zeroed(len: usize) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|e| Error::allocation_failed(len, e.to_string()))?;
    data.resize(len, 0);
    Ok(data)
}

impl PixelBuffer {
    /// Creates an empty 0x0 buffer with no storage.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            data: Vec::new(),
            width: 0,
            height: 0,
        }
    }

    /// Creates a `width` x `height` buffer filled with opaque black.
    ///
    /// A zero width or height yields the empty buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the storage cannot be
    /// obtained.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixbuf_core::PixelBuffer;
    ///
    /// let buf = PixelBuffer::new(200, 100).unwrap();
    /// assert_eq!(buf.dimensions(), (200, 100));
    /// assert!(buf.as_bytes().iter().all(|&b| b == 0));
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Ok(Self::empty());
        }
        let len = byte_len(width, height)?;
        let data = alloc_zeroed(len)?;
        trace!(width, height, bytes = len, "PixelBuffer::new");
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a `size` x `size` buffer filled with opaque black.
    #[inline]
    pub fn square(size: u32) -> Result<Self> {
        Self::new(size, size)
    }

    /// Creates a buffer with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Rgb) -> Result<Self> {
        let mut buf = Self::new(width, height)?;
        buf.fill(pixel);
        Ok(buf)
    }

    /// Wraps existing RGB bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not
    /// `width * height * 3`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        if expected == 0 {
            return Ok(Self::empty());
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns `true` if the buffer has no pixel storage.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Length of the pixel storage in bytes.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    /// Fails with [`Error::InvalidState`] if the buffer has no storage.
    ///
    /// `op` names the operation in the error message.
    pub fn ensure_allocated(&self, op: &str) -> Result<()> {
        if self.is_empty() {
            return Err(Error::invalid_state(format!(
                "{}: buffer has no pixel data",
                op
            )));
        }
        Ok(())
    }

    /// Raw RGB bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Raw RGB bytes, mutable.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the buffer and returns `(width, height, bytes)`.
    pub fn into_raw(self) -> (u32, u32, Vec<u8>) {
        (self.width, self.height, self.data)
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Out-of-range coordinates are a caller bug: debug builds assert, and
    /// release builds panic on the slice index or read the wrong pixel.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let i = pixel_index(self.width, x, y);
        Rgb([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// Sets the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Same contract as [`pixel`](Self::pixel).
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Rgb) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let i = pixel_index(self.width, x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&pixel.0);
    }

    /// Fills every pixel with `pixel`.
    pub fn fill(&mut self, pixel: Rgb) {
        for chunk in self.data.chunks_exact_mut(CHANNELS) {
            chunk.copy_from_slice(&pixel.0);
        }
    }

    /// Iterates over `(x, y, pixel)` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Rgb)> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y, self.pixel(x, y))))
    }

    /// Replaces this buffer's storage and dimensions with `other`'s.
    ///
    /// The previous storage is dropped here, exactly once.
    pub fn replace_with(&mut self, other: PixelBuffer) {
        trace!(
            from_w = self.width,
            from_h = self.height,
            to_w = other.width,
            to_h = other.height,
            "PixelBuffer::replace_with"
        );
        *self = other;
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}
