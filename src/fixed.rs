//! Fixed point coordinates
//!
//! Screen positions are quantized once, on entry to the rasterizer, to
//! integers with [`SUBPIXEL_SHIFT`] fractional bits.  Everything after that
//! is exact integer arithmetic, so stepping along an edge always lands on
//! the value a direct evaluation would produce.
//!
//! Coordinates saturate at [`GUARD_BAND`], which keeps every edge product
//! well inside `i64`.
//!
//! [`GUARD_BAND`]: constant.GUARD_BAND.html
//!
//! [`SUBPIXEL_SHIFT`]: ../constant.SUBPIXEL_SHIFT.html

use crate::SUBPIXEL_HALF;
use crate::SUBPIXEL_SCALE;
use crate::SUBPIXEL_SHIFT;
use crate::vertex::Vertex;

/// Largest fixed point magnitude of a coordinate, 2^24 pixels
pub const GUARD_BAND : i32 = 1 << 28;

/// Convert a real coordinate to fixed point, rounding to nearest
///
/// Values beyond the guard band saturate
///
///     use trifill::fixed::{upscale, GUARD_BAND};
///
///     assert_eq!(upscale(1.0), 16);
///     assert_eq!(upscale(0.53), 8);
///     assert_eq!(upscale(-10.0), -160);
///     assert_eq!(upscale(2e8), GUARD_BAND);
///     assert_eq!(upscale(f64::NEG_INFINITY), -GUARD_BAND);
///
pub fn upscale(v: f64) -> i32 {
    let g = f64::from(GUARD_BAND);
    (v * f64::from(SUBPIXEL_SCALE)).round().max(-g).min(g) as i32
}

/// Convert a fixed point coordinate to the integer pixel containing it
///
/// Arithmetic shift, so negative values round towards negative infinity
///
///     use trifill::fixed::downscale;
///
///     assert_eq!(downscale(31), 1);
///     assert_eq!(downscale(-1), -1);
///
pub fn downscale(v: i32) -> i32 {
    v >> SUBPIXEL_SHIFT
}

/// Smallest pixel index whose span reaches past `v`, i.e. ceil(v / scale)
pub fn downscale_ceil(v: i32) -> i32 {
    ((i64::from(v) + i64::from(SUBPIXEL_SCALE) - 1) >> SUBPIXEL_SHIFT) as i32
}

/// Fixed point center of pixel `p`
pub fn pixel_center(p: i32) -> i32 {
    (p << SUBPIXEL_SHIFT) + SUBPIXEL_HALF
}

/// Last pixel whose center lies strictly before the fixed point value `v`
///
/// This is the half-open boundary used by the fill rule: a sample exactly on
/// `v` belongs to the pixel after the returned one.
///
///     use trifill::fixed::last_center_before;
///
///     assert_eq!(last_center_before(8), -1);  // center of pixel 0
///     assert_eq!(last_center_before(9), 0);
///     assert_eq!(last_center_before(24), 0);  // center of pixel 1
///
pub fn last_center_before(v: i32) -> i32 {
    ((i64::from(v) - i64::from(SUBPIXEL_HALF) - 1) >> SUBPIXEL_SHIFT) as i32
}

/// Homogeneous position in fixed point
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct FixedVector {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    /// Always the fixed point one
    pub w: i32,
}

impl FixedVector {
    /// Create a vector from real coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x: upscale(x), y: upscale(y), z: upscale(z), w: SUBPIXEL_SCALE }
    }
    /// Create a vector from values already in fixed point
    pub fn from_raw(x: i32, y: i32) -> Self {
        Self { x, y, z: 0, w: SUBPIXEL_SCALE }
    }
    /// Same point with x and y saturated to the guard band
    pub fn clamped(&self) -> Self {
        Self { x: self.x.max(-GUARD_BAND).min(GUARD_BAND),
               y: self.y.max(-GUARD_BAND).min(GUARD_BAND),
               ..*self }
    }
}

impl From<Vertex> for FixedVector {
    fn from(v: Vertex) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
impl<'a> From<&'a Vertex> for FixedVector {
    fn from(v: &Vertex) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
