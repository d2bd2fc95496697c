//! Numeric helpers for bicubic resampling.
//!
//! - [`cubic`] - 1-D cubic convolution (Catmull-Rom) through four samples
//! - [`bicubic`] - separable 4x4 evaluation built from [`cubic`]
//! - [`neighbours`] - edge-replicated sample coordinates
//! - [`to_byte`] - truncate and clamp an interpolated value into `u8`

/// Cubic convolution through `p[0..4]`, evaluated at `t` in `[0, 1)`
/// between `p[1]` and `p[2]`.
///
/// `p1 + 0.5*t*(p2-p0 + t*(2*p0-5*p1+4*p2-p3 + t*(3*(p1-p2)+p3-p0)))`
///
/// Evaluated in `f64` and narrowed on return. Reproduces `p[1]` at `t = 0`
/// and any constant input exactly.
///
/// # Example
///
/// ```rust
/// use pixbuf_ops::kernel::cubic;
///
/// assert_eq!(cubic([7.0, 7.0, 7.0, 7.0], 0.3), 7.0);
/// assert_eq!(cubic([0.0, 10.0, 20.0, 30.0], 0.0), 10.0);
/// ```
#[inline]
pub fn cubic(p: [f32; 4], t: f32) -> f32 {
    let [p0, p1, p2, p3] = p.map(f64::from);
    let t = f64::from(t);
    let v = p1
        + 0.5
            * t
            * (p2 - p0
                + t * (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3 + t * (3.0 * (p1 - p2) + p3 - p0)));
    v as f32
}

/// Bicubic evaluation of a 4x4 neighbourhood.
///
/// `p[m][n]` holds the sample at x offset `m - 1` and y offset `n - 1`.
/// Each `p[m]` is first interpolated with `fy`, then the four results are
/// interpolated with `fx`.
#[inline]
pub fn bicubic(p: &[[f32; 4]; 4], fx: f32, fy: f32) -> f32 {
    let cols = [
        cubic(p[0], fy),
        cubic(p[1], fy),
        cubic(p[2], fy),
        cubic(p[3], fy),
    ];
    cubic(cols, fx)
}

/// Coordinates `base - 1 ..= base + 2`, each clamped into `[0, len - 1]`.
///
/// `len` must be at least 1.
#[inline]
pub fn neighbours(base: i64, len: u32) -> [u32; 4] {
    debug_assert!(len > 0);
    let max = i64::from(len) - 1;
    [-1i64, 0, 1, 2].map(|off| (base + off).clamp(0, max) as u32)
}

/// Truncates toward zero, then clamps to `[0, 255]`.
#[inline]
pub fn to_byte(v: f32) -> u8 {
    (v as i32).clamp(0, 255) as u8
}
