//! Bicubic image resize.
//!
//! Scales a [`PixelBuffer`] by independent horizontal and vertical ratios
//! using 4x4 cubic convolution with edge-replicated borders.
//!
//! # Algorithm
//!
//! For every destination pixel `(x, y)` of a `dw` x `dh` target:
//!
//! ```text
//! gx = x / dw * (sw - 1)        gy = y / dh * (sh - 1)
//! fx = gx - trunc(gx)           fy = gy - trunc(gy)
//! ```
//!
//! The 4x4 source samples around `(trunc(gx), trunc(gy))` are clamped to
//! the source edges, interpolated along y with `fy` and then along x with
//! `fx` (see [`kernel::bicubic`](crate::kernel::bicubic)), truncated and
//! clamped into a byte.
//!
//! Note the mapping pins destination pixel 0 to source pixel 0 but never
//! reaches the last source row/column exactly; a ratio of 1.0 is therefore
//! not an identity copy except for uniform regions.
//!
//! # Example
//!
//! ```rust
//! use pixbuf_core::{PixelBuffer, Rgb};
//! use pixbuf_ops::resize::resize;
//!
//! let mut buf = PixelBuffer::filled(200, 200, Rgb::new(10, 20, 30)).unwrap();
//! resize(&mut buf, 0.5, None).unwrap();
//! assert_eq!(buf.dimensions(), (100, 100));
//! assert_eq!(buf.pixel(50, 50), Rgb::new(10, 20, 30));
//! ```

use crate::kernel::{bicubic, neighbours, to_byte};
use crate::{OpsError, OpsResult};
use pixbuf_core::{pixel_index, PixelBuffer, Rgb, CHANNELS};
use tracing::{debug, trace};

/// Horizontal and vertical scale factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeRatio {
    /// Horizontal factor.
    pub width: f64,
    /// Vertical factor.
    pub height: f64,
}

impl ResizeRatio {
    /// Independent factors per axis.
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The same factor on both axes.
    #[inline]
    pub fn uniform(ratio: f64) -> Self {
        Self::new(ratio, ratio)
    }

    /// Target dimensions for a `src_w` x `src_h` source.
    ///
    /// Each side is `trunc(side * ratio)`.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidArgument`] if either side comes out below 1 (zero,
    /// negative or NaN ratios) or beyond `u32::MAX`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixbuf_ops::resize::ResizeRatio;
    ///
    /// assert_eq!(ResizeRatio::new(0.5, 2.0).apply(101, 10).unwrap(), (50, 20));
    /// assert!(ResizeRatio::uniform(0.0).apply(10, 10).is_err());
    /// ```
    pub fn apply(&self, src_w: u32, src_h: u32) -> OpsResult<(u32, u32)> {
        Ok((
            scale_side(src_w, self.width, "width")?,
            scale_side(src_h, self.height, "height")?,
        ))
    }
}

fn scale_side(side: u32, ratio: f64, axis: &str) -> OpsResult<u32> {
    let scaled = (f64::from(side) * ratio).trunc();
    // NaN fails both comparisons
    if !(scaled >= 1.0) {
        return Err(OpsError::InvalidArgument(format!(
            "{} ratio {} gives a target {} of {} (must be at least 1)",
            axis, ratio, axis, scaled
        )));
    }
    if scaled > f64::from(u32::MAX) {
        return Err(OpsError::InvalidArgument(format!(
            "{} ratio {} gives a target {} of {} (too large)",
            axis, ratio, axis, scaled
        )));
    }
    Ok(scaled as u32)
}

/// Resizes `buffer` in place by `width_ratio` and `height_ratio`.
///
/// `height_ratio` defaults to `width_ratio`. On success the buffer's
/// storage is replaced by the resampled image; on any error it is left
/// exactly as it was.
///
/// # Errors
///
/// - [`OpsError::Core`] with `InvalidState` if `buffer` is empty
/// - [`OpsError::InvalidArgument`] if a target side would be below 1
/// - [`OpsError::Core`] with `AllocationFailed` if the new storage cannot
///   be obtained
pub fn resize(buffer: &mut PixelBuffer, width_ratio: f64, height_ratio: Option<f64>) -> OpsResult<()> {
    buffer.ensure_allocated("resize")?;
    let ratio = ResizeRatio::new(width_ratio, height_ratio.unwrap_or(width_ratio));
    let (dst_w, dst_h) = ratio.apply(buffer.width(), buffer.height())?;
    resize_to(buffer, dst_w, dst_h)
}

/// Resizes `buffer` in place to exactly `dst_w` x `dst_h`.
///
/// Same error contract as [`resize`]; zero target sides are rejected as
/// [`OpsError::InvalidArgument`].
pub fn resize_to(buffer: &mut PixelBuffer, dst_w: u32, dst_h: u32) -> OpsResult<()> {
    let out = resized(buffer, dst_w, dst_h)?;
    buffer.replace_with(out);
    Ok(())
}

/// Returns a bicubic-resampled copy of `src` at `dst_w` x `dst_h`.
///
/// `src` is not modified.
pub fn resized(src: &PixelBuffer, dst_w: u32, dst_h: u32) -> OpsResult<PixelBuffer> {
    src.ensure_allocated("resize")?;
    if dst_w == 0 || dst_h == 0 {
        return Err(OpsError::InvalidArgument(format!(
            "target size {}x{} must be at least 1x1",
            dst_w, dst_h
        )));
    }

    let (src_w, src_h) = src.dimensions();
    debug!(src_w, src_h, dst_w, dst_h, "bicubic resize");

    let mut dst = PixelBuffer::new(dst_w, dst_h)?;
    let bytes = src.as_bytes();
    let max_x = (src_w - 1) as f32;
    let max_y = (src_h - 1) as f32;

    for y in 0..dst_h {
        let gy = y as f32 / dst_h as f32 * max_y;
        let gyi = gy as i64;
        let fy = gy - gyi as f32;
        let rows = neighbours(gyi, src_h);

        for x in 0..dst_w {
            let gx = x as f32 / dst_w as f32 * max_x;
            let gxi = gx as i64;
            let fx = gx - gxi as f32;
            let cols = neighbours(gxi, src_w);

            let mut out = [0u8; CHANNELS];
            for (c, value) in out.iter_mut().enumerate() {
                let mut p = [[0.0f32; 4]; 4];
                for (m, &sx) in cols.iter().enumerate() {
                    for (n, &sy) in rows.iter().enumerate() {
                        p[m][n] = f32::from(bytes[pixel_index(src_w, sx, sy) + c]);
                    }
                }
                *value = to_byte(bicubic(&p, fx, fy));
            }
            dst.set_pixel(x, y, Rgb(out));
        }
    }

    trace!(bytes = dst.byte_len(), "resize done");
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixbuf_core::ErrorKind;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn gradient(w: u32, h: u32) -> PixelBuffer {
        let mut buf = PixelBuffer::new(w, h).unwrap();
        for y in 0..h {
            for x in 0..w {
                buf.set_pixel(x, y, Rgb::new((x * 255 / w.max(2)) as u8, (y * 255 / h.max(2)) as u8, 77));
            }
        }
        buf
    }

    #[test]
    fn test_downscale_dimensions() {
        let mut buf = PixelBuffer::new(200, 200).unwrap();
        resize(&mut buf, 0.5, None).unwrap();
        assert_eq!(buf.dimensions(), (100, 100));
        assert_eq!(buf.byte_len(), 100 * 100 * 3);
    }

    #[test]
    fn test_upscale_dimensions() {
        let mut buf = PixelBuffer::new(100, 100).unwrap();
        resize(&mut buf, 2.0, Some(2.0)).unwrap();
        assert_eq!(buf.dimensions(), (200, 200));
    }

    #[test]
    fn test_independent_ratios_truncate() {
        let mut buf = PixelBuffer::new(7, 9).unwrap();
        resize(&mut buf, 1.5, Some(0.5)).unwrap();
        // 10.5 -> 10, 4.5 -> 4
        assert_eq!(buf.dimensions(), (10, 4));
    }

    #[test]
    fn test_uniform_color_identity() {
        for color in [Rgb::new(0, 0, 0), Rgb::new(10, 20, 30), Rgb::new(255, 255, 255)] {
            let mut buf = PixelBuffer::filled(13, 7, color).unwrap();
            resize(&mut buf, 1.0, None).unwrap();
            assert_eq!(buf.dimensions(), (13, 7));
            assert!(buf.pixels().all(|(_, _, px)| px == color));
        }
    }

    #[test]
    fn test_uniform_color_any_scale() {
        let mut buf = PixelBuffer::filled(5, 5, Rgb::new(200, 100, 50)).unwrap();
        resize(&mut buf, 3.3, Some(0.7)).unwrap();
        assert!(buf.pixels().all(|(_, _, px)| px == Rgb::new(200, 100, 50)));
    }

    #[test]
    fn test_origin_pixel_preserved() {
        let src = gradient(16, 16);
        let out = resized(&src, 40, 9).unwrap();
        assert_eq!(out.pixel(0, 0), src.pixel(0, 0));
    }

    #[test]
    fn test_single_pixel_source() {
        let mut buf = PixelBuffer::filled(1, 1, Rgb::new(9, 99, 199)).unwrap();
        resize(&mut buf, 4.0, None).unwrap();
        assert_eq!(buf.dimensions(), (4, 4));
        assert!(buf.pixels().all(|(_, _, px)| px == Rgb::new(9, 99, 199)));
    }

    #[test]
    fn test_non_positive_ratio_rejected() {
        for (wr, hr) in [(0.0, None), (-1.0, None), (1.0, Some(0.0)), (0.01, None), (f64::NAN, None)] {
            let mut buf = gradient(8, 8);
            let before = buf.clone();
            let err = resize(&mut buf, wr, hr).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "ratio {wr} {hr:?}");
            assert_eq!(buf, before);
        }
    }

    #[test]
    fn test_empty_source_rejected() {
        let mut buf = PixelBuffer::empty();
        let err = resize(&mut buf, 2.0, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_allocation_failure_leaves_source() {
        let mut buf = gradient(4, 4);
        let before = buf.clone();
        // 2^31 x 2^31 fits u32 sides but not a reservable byte count
        let err = resize(&mut buf, f64::from(1u32 << 29), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Allocation);
        assert_eq!(buf, before);
    }

    #[test]
    fn test_resize_to_zero_rejected() {
        let mut buf = gradient(4, 4);
        assert!(resize_to(&mut buf, 0, 4).is_err());
        assert_eq!(buf.dimensions(), (4, 4));
    }

    #[test]
    fn test_resized_leaves_source() {
        let src = gradient(10, 10);
        let before = src.clone();
        let out = resized(&src, 3, 17).unwrap();
        assert_eq!(out.dimensions(), (3, 17));
        assert_eq!(src, before);
    }

    #[test]
    fn test_horizontal_ramp_is_monotonic() {
        let mut src = PixelBuffer::new(8, 1).unwrap();
        for x in 0..8 {
            src.set_pixel(x, 0, Rgb::new((x * 30) as u8, 0, 0));
        }
        let out = resized(&src, 32, 1).unwrap();
        let reds: Vec<u8> = (0..32).map(|x| out.pixel(x, 0).r()).collect();
        assert!(reds.windows(2).all(|w| w[0] <= w[1]), "{reds:?}");
    }

    #[test]
    fn test_output_stays_in_byte_range() {
        // Hard edges make the kernel overshoot; values must clamp, not wrap
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..40 {
            let w = rng.gen_range(1..12);
            let h = rng.gen_range(1..12);
            let data: Vec<u8> = (0..w * h * 3)
                .map(|_| if rng.gen_bool(0.5) { 0 } else { 255 })
                .collect();
            let src = PixelBuffer::from_raw(w, h, data).unwrap();
            let wr: f64 = rng.gen_range(0.1..4.0);
            let hr: f64 = rng.gen_range(0.1..4.0);

            let mut buf = src.clone();
            match resize(&mut buf, wr, Some(hr)) {
                Ok(()) => {
                    let (dw, dh) = ResizeRatio::new(wr, hr).apply(w, h).unwrap();
                    assert_eq!(buf.dimensions(), (dw, dh));
                    assert_eq!(buf.byte_len(), dw as usize * dh as usize * 3);
                }
                Err(e) => {
                    // Tiny sources times small ratios can round to zero
                    assert_eq!(e.kind(), ErrorKind::InvalidArgument);
                    assert_eq!(buf, src);
                }
            }
        }
    }

    #[test]
    fn test_overshoot_is_clamped() {
        // Black field with one white column: the kernel undershoots below 0
        // in the segment before the edge (x = 5..10 maps to gx in [1, 2)).
        let mut src = PixelBuffer::new(6, 1).unwrap();
        src.set_pixel(3, 0, Rgb::new(255, 255, 255));
        let out = resized(&src, 24, 1).unwrap();
        let reds: Vec<u8> = (0..24).map(|x| out.pixel(x, 0).r()).collect();
        assert!(reds[5..10].iter().all(|&r| r == 0), "{reds:?}");
        assert!(reds.iter().any(|&r| r > 200));
    }
}
