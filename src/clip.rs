//! Clipping Region
//!
//! Triangles are clipped by clamping: rows and columns outside the target
//! are skipped, edge slopes are untouched.  [`Rectangle::clip_flags`] gives
//! the quick reject for triangles entirely outside the target.
//!
//! [`Rectangle::clip_flags`]: struct.Rectangle.html#method.clip_flags

use crate::fixed::FixedVector;
use crate::SUBPIXEL_SHIFT;

/// Rectangle, inclusive on both ends
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rectangle<T: std::cmp::PartialOrd + Copy> {
    /// Minimum x value
    pub x1: T,
    /// Minimum y value
    pub y1: T,
    /// Maximum x value
    pub x2: T,
    /// Maximum y value
    pub y2: T,
}

impl<T> Rectangle<T> where T: std::cmp::PartialOrd + Copy {
    /// Create a new Rectangle
    ///
    /// Values are sorted before storing
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        let (x1, x2) = if x1 > x2 { (x2,x1) } else { (x1,x2) };
        let (y1, y2) = if y1 > y2 { (y2,y1) } else { (y1,y2) };
        Self { x1,y1,x2,y2 }
    }
    /// Get location of point relative to rectangle
    ///
    /// Returned is an a u8 made up of the following bits:
    /// - [INSIDE](constant.INSIDE.html)
    /// - [LEFT](constant.LEFT.html)
    /// - [RIGHT](constant.RIGHT.html)
    /// - [BOTTOM](constant.BOTTOM.html)
    /// - [TOP](constant.TOP.html)
    ///
    pub fn clip_flags(&self, x: T, y: T) -> u8 {
        clip_flags(&x,&y, &self.x1, &self.y1, &self.x2, &self.y2)
    }
    /// Expand if the point (x,y) is outside
    pub fn expand(&mut self, x: T, y: T) {
        if x < self.x1 { self.x1 = x; }
        if x > self.x2 { self.x2 = x; }
        if y < self.y1 { self.y1 = y; }
        if y > self.y2 { self.y2 = y; }
    }
}

impl Rectangle<i32> {
    /// Pixel bounds of a `width` x `height` target
    ///
    /// Empty (x2 < x1) for a zero sized target
    pub fn pixels(width: usize, height: usize) -> Self {
        Self { x1: 0, y1: 0, x2: width as i32 - 1, y2: height as i32 - 1 }
    }
    /// Intersection with `other`, None if they do not overlap
    ///
    ///     use trifill::Rectangle;
    ///
    ///     let a = Rectangle::new(-3, -3, 4, 4);
    ///     let b = Rectangle::new(0, 0, 9, 9);
    ///     assert_eq!(a.intersect(&b), Some(Rectangle::new(0, 0, 4, 4)));
    ///     assert_eq!(a.intersect(&Rectangle::new(5, 0, 9, 9)), None);
    ///
    pub fn intersect(&self, other: &Rectangle<i32>) -> Option<Rectangle<i32>> {
        let x1 = self.x1.max(other.x1);
        let y1 = self.y1.max(other.y1);
        let x2 = self.x2.min(other.x2);
        let y2 = self.y2.min(other.y2);
        if x1 > x2 || y1 > y2 {
            None
        } else {
            Some(Self { x1, y1, x2, y2 })
        }
    }
    /// Same region in fixed point coordinates, covering whole pixels
    pub fn upscale(&self) -> Self {
        Self { x1: self.x1 << SUBPIXEL_SHIFT,
               y1: self.y1 << SUBPIXEL_SHIFT,
               x2: (self.x2 + 1) << SUBPIXEL_SHIFT,
               y2: (self.y2 + 1) << SUBPIXEL_SHIFT }
    }
    /// True if all of `points` lie on the same outside side of the region
    ///
    /// Such a triangle cannot cover any pixel of the region.
    pub fn rejects(&self, points: &[FixedVector]) -> bool {
        let all = points.iter()
            .map(|p| self.clip_flags(p.x, p.y))
            .fold(LEFT | RIGHT | TOP | BOTTOM, |acc, f| acc & f);
        all != INSIDE
    }
}

/// Inside Region
///
/// See <https://en.wikipedia.org/wiki/Cohen%E2%80%93Sutherland_algorithm>
pub const INSIDE : u8 = 0b0000;
/// Left of Region
pub const LEFT   : u8 = 0b0000_0001;
/// Right of Region
pub const RIGHT  : u8 = 0b0000_0010;
/// Below Region (larger y, screen space is y down)
pub const BOTTOM : u8 = 0b0000_0100;
/// Above Region
pub const TOP    : u8 = 0b0000_1000;

/// Determine the location of a point to a broken-down rectangle or range
///
/// Returned is an a u8 made up of the following bits:
/// - [INSIDE](constant.INSIDE.html)
/// - [LEFT](constant.LEFT.html)
/// - [RIGHT](constant.RIGHT.html)
/// - [BOTTOM](constant.BOTTOM.html)
/// - [TOP](constant.TOP.html)
///
fn clip_flags<T: std::cmp::PartialOrd>(x: &T, y: &T, x1: &T, y1: &T, x2: &T, y2: &T) -> u8 {
    let mut code = INSIDE;
    if x < x1 { code |= LEFT; }
    if x > x2 { code |= RIGHT; }
    if y < y1 { code |= TOP; }
    if y > y2 { code |= BOTTOM; }
    code
}
