//! RGB pixel value and byte indexing.
//!
//! Pixels are three bytes, `R G B`, with no alpha channel. Compositing reads
//! the blue byte as its opacity (see [`Rgb::blend_factor`]).
//!
//! # Memory Layout
//!
//! ```text
//! Memory: [R G B R G B R G B ...]  <- Row 0
//!         [R G B R G B R G B ...]  <- Row 1
//! ```
//!
//! All 2-D addressing in the workspace goes through [`pixel_index`].

use std::fmt;

/// Number of channels per pixel.
pub const CHANNELS: usize = 3;

/// Byte offset of pixel `(x, y)` in a tightly packed RGB buffer of `width`
/// pixels per row.
///
/// The caller guarantees `x < width` and `y < height`; the result is then
/// `< width * height * 3 - 2`. Nothing is checked here.
///
/// # Example
///
/// ```
/// use pixbuf_core::pixel_index;
///
/// assert_eq!(pixel_index(4, 0, 0), 0);
/// assert_eq!(pixel_index(4, 1, 0), 3);
/// assert_eq!(pixel_index(4, 0, 1), 12);
/// ```
#[inline]
pub fn pixel_index(width: u32, x: u32, y: u32) -> usize {
    (y as usize * width as usize + x as usize) * CHANNELS
}

/// An 8-bit RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// Opaque black, the fill of a freshly allocated buffer.
    pub const BLACK: Self = Self([0, 0, 0]);

    /// Creates a pixel from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        self.0[0]
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        self.0[1]
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        self.0[2]
    }

    /// Opacity used when this pixel is drawn onto another buffer.
    ///
    /// The buffer model has no alpha channel; the blue byte doubles as
    /// opacity, mapped to `[0.0, 1.0]` as `b / 255`.
    #[inline]
    pub fn blend_factor(self) -> f32 {
        self.b() as f32 / 255.0
    }

    /// Returns the channels as an array.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        self.0
    }
}

impl From<[u8; 3]> for Rgb {
    #[inline]
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<Rgb> for [u8; 3] {
    #[inline]
    fn from(value: Rgb) -> Self {
        value.0
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self([r, g, b])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r(), self.g(), self.b())
    }
}
