//! Drawing one buffer onto another with per-pixel blending.
//!
//! [`draw`] places a source [`PixelBuffer`] at an integer offset on a
//! destination buffer and blends every overlapping pixel:
//!
//! ```text
//! alpha = src.blue / 255
//! dst   = trunc(dst * (1 - alpha) + src * alpha)     (per channel)
//! ```
//!
//! The buffers carry no alpha channel, so the source's blue byte is the
//! opacity. A blue of 0 leaves the destination untouched, 255 replaces it.
//!
//! Source pixels that land outside the destination are clipped without
//! error. The destination is updated in place and never reallocated.
//!
//! # Example
//!
//! ```rust
//! use pixbuf_core::{PixelBuffer, Rgb};
//! use pixbuf_ops::composite::draw;
//!
//! let mut bg = PixelBuffer::filled(4, 4, Rgb::new(0, 0, 0)).unwrap();
//! let fg = PixelBuffer::filled(2, 2, Rgb::new(200, 100, 255)).unwrap();
//!
//! draw(&mut bg, &fg, 3, 3).unwrap();
//! assert_eq!(bg.pixel(3, 3), Rgb::new(200, 100, 255));
//! assert_eq!(bg.pixel(2, 2), Rgb::new(0, 0, 0));
//! ```

use crate::OpsResult;
use pixbuf_core::{PixelBuffer, Rgb};
use tracing::{debug, trace};

/// Destination-space rectangle touched by a draw, half-open on the far edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlap {
    /// First destination column.
    pub x0: u32,
    /// First destination row.
    pub y0: u32,
    /// One past the last destination column.
    pub x1: u32,
    /// One past the last destination row.
    pub y1: u32,
}

impl Overlap {
    /// Width of the overlap in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    /// Height of the overlap in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }
}

/// Clips a `src_w` x `src_h` source placed at `(x, y)` against a
/// `dst_w` x `dst_h` destination.
///
/// Returns `None` when nothing overlaps.
///
/// # Example
///
/// ```rust
/// use pixbuf_ops::composite::{overlap, Overlap};
///
/// let o = overlap((4, 4), (4, 4), 2, 2).unwrap();
/// assert_eq!(o, Overlap { x0: 2, y0: 2, x1: 4, y1: 4 });
/// assert!(overlap((4, 4), (4, 4), -4, 0).is_none());
/// ```
pub fn overlap(dst: (u32, u32), src: (u32, u32), x: i32, y: i32) -> Option<Overlap> {
    let span = |offset: i32, src_len: u32, dst_len: u32| -> Option<(u32, u32)> {
        let start = i64::from(offset).max(0);
        let end = (i64::from(offset) + i64::from(src_len)).min(i64::from(dst_len));
        (start < end).then(|| (start as u32, end as u32))
    };
    let (x0, x1) = span(x, src.0, dst.0)?;
    let (y0, y1) = span(y, src.1, dst.1)?;
    Some(Overlap { x0, y0, x1, y1 })
}

/// Blends one channel: `trunc(dst * (1 - alpha) + src * alpha)`.
#[inline]
pub fn blend_channel(dst: u8, src: u8, alpha: f32) -> u8 {
    (f32::from(dst) * (1.0 - alpha) + f32::from(src) * alpha) as u8
}

/// Blends `src` over `dst` using `src`'s blue byte as opacity.
///
/// # Example
///
/// ```rust
/// use pixbuf_core::Rgb;
/// use pixbuf_ops::composite::blend_pixel;
///
/// let dst = Rgb::new(10, 20, 30);
/// assert_eq!(blend_pixel(dst, Rgb::new(99, 99, 0)), dst);
/// assert_eq!(blend_pixel(dst, Rgb::new(1, 2, 255)), Rgb::new(1, 2, 255));
/// ```
#[inline]
pub fn blend_pixel(dst: Rgb, src: Rgb) -> Rgb {
    let alpha = src.blend_factor();
    Rgb([
        blend_channel(dst.r(), src.r(), alpha),
        blend_channel(dst.g(), src.g(), alpha),
        blend_channel(dst.b(), src.b(), alpha),
    ])
}

/// Draws `src` onto `dst` with its top-left corner at `(x, y)`.
///
/// Offsets may be negative. Only the overlapping region of `dst` is
/// written; `src` is read-only.
///
/// # Errors
///
/// Returns an `InvalidState` error if either buffer has no pixel data.
/// The check happens before any write, so `dst` is unchanged on error.
pub fn draw(dst: &mut PixelBuffer, src: &PixelBuffer, x: i32, y: i32) -> OpsResult<()> {
    dst.ensure_allocated("draw (destination)")?;
    src.ensure_allocated("draw (source)")?;

    let Some(region) = overlap(dst.dimensions(), src.dimensions(), x, y) else {
        debug!(x, y, "draw: source entirely outside destination");
        return Ok(());
    };
    trace!(?region, x, y, "draw: clipped region");

    for dy in region.y0..region.y1 {
        let sy = (i64::from(dy) - i64::from(y)) as u32;
        for dx in region.x0..region.x1 {
            let sx = (i64::from(dx) - i64::from(x)) as u32;
            let blended = blend_pixel(dst.pixel(dx, dy), src.pixel(sx, sy));
            dst.set_pixel(dx, dy, blended);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixbuf_core::ErrorKind;

    fn patterned(w: u32, h: u32) -> PixelBuffer {
        let mut buf = PixelBuffer::new(w, h).unwrap();
        for (x, y, _) in buf.clone().pixels() {
            buf.set_pixel(x, y, Rgb::new((x * 40) as u8, (y * 40) as u8, ((x + y) * 20) as u8));
        }
        buf
    }

    #[test]
    fn test_zero_blue_is_noop() {
        let mut dst = patterned(5, 5);
        let before = dst.clone();
        let src = PixelBuffer::filled(5, 5, Rgb::new(255, 128, 0)).unwrap();
        draw(&mut dst, &src, 0, 0).unwrap();
        assert_eq!(dst, before);
    }

    #[test]
    fn test_full_blue_replaces() {
        let mut dst = patterned(4, 3);
        let mut src = PixelBuffer::new(4, 3).unwrap();
        for (x, y, _) in src.clone().pixels() {
            src.set_pixel(x, y, Rgb::new((x * 50 + 3) as u8, (y * 70 + 1) as u8, 255));
        }
        draw(&mut dst, &src, 0, 0).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn test_partial_overlap_only_touches_overlap() {
        let mut dst = patterned(4, 4);
        let before = dst.clone();
        let src = PixelBuffer::filled(4, 4, Rgb::new(1, 2, 255)).unwrap();
        draw(&mut dst, &src, 2, 2).unwrap();

        for (x, y, px) in dst.pixels() {
            if x >= 2 && y >= 2 {
                assert_eq!(px, Rgb::new(1, 2, 255));
            } else {
                assert_eq!(px, before.pixel(x, y), "({x}, {y}) changed");
            }
        }
    }

    #[test]
    fn test_negative_offset() {
        let mut dst = PixelBuffer::new(3, 3).unwrap();
        let mut src = PixelBuffer::new(2, 2).unwrap();
        src.set_pixel(1, 1, Rgb::new(7, 8, 255));
        draw(&mut dst, &src, -1, -1).unwrap();
        assert_eq!(dst.pixel(0, 0), Rgb::new(7, 8, 255));
        assert_eq!(dst.pixel(1, 1), Rgb::BLACK);
    }

    #[test]
    fn test_fully_outside_is_ok() {
        let mut dst = patterned(3, 3);
        let before = dst.clone();
        let src = PixelBuffer::filled(2, 2, Rgb::new(9, 9, 255)).unwrap();
        for (x, y) in [(3, 0), (0, 3), (-2, 0), (0, -2), (i32::MAX, i32::MAX), (i32::MIN, 0)] {
            draw(&mut dst, &src, x, y).unwrap();
        }
        assert_eq!(dst, before);
    }

    #[test]
    fn test_half_blend_values() {
        let mut dst = PixelBuffer::filled(2, 2, Rgb::new(10, 20, 30)).unwrap();
        let src = PixelBuffer::filled(2, 2, Rgb::new(100, 110, 128)).unwrap();
        draw(&mut dst, &src, 0, 0).unwrap();
        // alpha = 128 / 255
        assert!(dst.pixels().all(|(_, _, px)| px == Rgb::new(55, 65, 79)));
    }

    #[test]
    fn test_empty_buffers_rejected() {
        let mut dst = patterned(2, 2);
        let before = dst.clone();
        let err = draw(&mut dst, &PixelBuffer::empty(), 0, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(dst, before);

        let mut empty = PixelBuffer::empty();
        let err = draw(&mut empty, &before, 0, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_overlap_extents() {
        assert_eq!(overlap((10, 10), (3, 3), 8, -1), Some(Overlap { x0: 8, y0: 0, x1: 10, y1: 2 }));
        let o = overlap((4, 4), (10, 10), -3, -3).unwrap();
        assert_eq!((o.width(), o.height()), (4, 4));
        assert_eq!(overlap((4, 4), (1, 1), 4, 0), None);
    }

    #[test]
    fn test_blend_channel_truncates() {
        // 0.5 * 0 + 0.5 * 255 = 127.5 -> 127
        assert_eq!(blend_channel(0, 255, 0.5), 127);
        assert_eq!(blend_channel(200, 0, 0.0), 200);
        assert_eq!(blend_channel(200, 13, 1.0), 13);
    }
}
