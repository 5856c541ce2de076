//! Edge functions
//!
//! A single determinant serves three purposes: back-face culling (the signed
//! area of the whole triangle), the inside test of the half-space rasterizer
//! and the orientation used to decide which side an edge bounds.

use crate::fixed::pixel_center;
use crate::fixed::FixedVector;
use crate::SUBPIXEL_SCALE;

/// Signed area (times two) of the triangle `a`, `b`, `c`
///
/// Exact for coordinates within the guard band.
/// Positive when the vertices are counter-clockwise, which is the only
/// visible orientation.  Also the edge function of edge `a -> b` evaluated
/// at `c`: positive when `c` lies on the interior side.
///
///     use trifill::FixedVector;
///     use trifill::edge::signed_area;
///
///     let a = FixedVector::new(0.0, 0.0, 0.0);
///     let b = FixedVector::new(0.0, 4.0, 0.0);
///     let c = FixedVector::new(4.0, 0.0, 0.0);
///     assert!(signed_area(&a, &b, &c) > 0);
///     assert!(signed_area(&a, &c, &b) < 0);
///
pub fn signed_area(a: &FixedVector, b: &FixedVector, c: &FixedVector) -> i64 {
    let (ax, ay) = (i64::from(a.x), i64::from(a.y));
    let (abx, aby) = (i64::from(b.x) - ax, i64::from(b.y) - ay);
    let (acx, acy) = (i64::from(c.x) - ax, i64::from(c.y) - ay);
    aby * acx - abx * acy
}

/// Is the triangle `a`, `b`, `c` facing away from the viewer (or degenerate)
pub fn is_back_facing(a: &FixedVector, b: &FixedVector, c: &FixedVector) -> bool {
    signed_area(a, b, c) <= 0
}

/// Which side of the triangle an edge bounds
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum EdgeKind {
    /// Descending, the interior lies to its right when walked top down
    Left,
    /// Ascending, the interior lies to its left when walked top down
    Right,
    /// Bounds the first or last row; never scan converted
    Horizontal,
}

impl EdgeKind {
    /// Classify the edge `start -> end` of a counter-clockwise triangle
    pub fn classify(start: &FixedVector, end: &FixedVector) -> Self {
        if start.y < end.y {
            EdgeKind::Left
        } else if start.y > end.y {
            EdgeKind::Right
        } else {
            EdgeKind::Horizontal
        }
    }
}

/// Top-left rule: samples exactly on this edge belong to the triangle
///
/// True for descending edges and for horizontal edges walked leftwards
/// (the top edge of a counter-clockwise triangle).
pub fn is_top_left(start: &FixedVector, end: &FixedVector) -> bool {
    end.y > start.y || (end.y == start.y && end.x < start.x)
}

/// Fill rule bias added to an edge value before the `>= 0` test
pub fn bias(start: &FixedVector, end: &FixedVector) -> i64 {
    if is_top_left(start, end) { 0 } else { -1 }
}

/// Edge function `start -> end` set up for incremental evaluation
///
/// The value is sampled at pixel centers; moving one pixel right adds
/// `step_x`, moving one row down adds `step_y`.  Both are exact, so after
/// any number of steps `value` equals a fresh evaluation.
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct EdgeFunction {
    /// Biased value at the current sample
    pub value: i64,
    /// Change per pixel in x
    pub step_x: i64,
    /// Change per row in y
    pub step_y: i64,
}

impl EdgeFunction {
    /// Set up the edge `start -> end` at the center of pixel (`px`,`py`)
    ///
    /// The fill rule bias is already applied to `value`.
    pub fn new(start: &FixedVector, end: &FixedVector, px: i32, py: i32) -> Self {
        let p = FixedVector::from_raw(pixel_center(px), pixel_center(py));
        let scale = i64::from(SUBPIXEL_SCALE);
        Self {
            value: signed_area(start, end, &p) + bias(start, end),
            step_x: (i64::from(end.y) - i64::from(start.y)) * scale,
            step_y: (i64::from(start.x) - i64::from(end.x)) * scale,
        }
    }
}
