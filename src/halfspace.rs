//! Incremental half-space rasterizer
//!
//! Every pixel center in the triangle's bounding box is tested against the
//! three edge functions.  The functions are evaluated once, at the top-left
//! pixel, and then stepped by constant deltas; in fixed point the stepping
//! is exact.

use crate::clip::Rectangle;
use crate::color::Rgba8;
use crate::edge::EdgeFunction;
use crate::fixed::downscale;
use crate::fixed::downscale_ceil;
use crate::fixed::FixedVector;
use crate::Rasterize;
use crate::Target;

/// Bounding box rasterizer with incremental edge functions
#[derive(Debug,Default,Copy,Clone)]
pub struct HalfSpace;

impl HalfSpace {
    /// Create the rasterizer; it holds no scratch storage
    pub fn new() -> Self {
        HalfSpace
    }
    /// Pixel bounding box of `v` expanded outward to whole pixels and
    /// clamped to `clip`
    ///
    ///     use trifill::{FixedVector, HalfSpace, Rectangle};
    ///
    ///     let v = [FixedVector::new(-10.0, 1.5, 0.0),
    ///              FixedVector::new(3.25, 6.0, 0.0),
    ///              FixedVector::new(2.0, 0.0, 0.0)];
    ///     let clip = Rectangle::pixels(8, 8);
    ///     assert_eq!(HalfSpace::bounds(&v, &clip), Some(Rectangle::new(0, 0, 4, 6)));
    ///
    pub fn bounds(v: &[FixedVector; 3], clip: &Rectangle<i32>) -> Option<Rectangle<i32>> {
        let mut r = Rectangle::new(v[0].x, v[0].y, v[0].x, v[0].y);
        r.expand(v[1].x, v[1].y);
        r.expand(v[2].x, v[2].y);
        let pixels = Rectangle { x1: downscale(r.x1), y1: downscale(r.y1),
                                 x2: downscale_ceil(r.x2), y2: downscale_ceil(r.y2) };
        pixels.intersect(clip)
    }
}

impl Rasterize for HalfSpace {
    fn rasterize<T: Target>(&mut self, v: &[FixedVector; 3], target: &mut T, color: Rgba8) {
        let clip = Rectangle::pixels(target.width(), target.height());
        let b = match Self::bounds(v, &clip) {
            Some(b) => b,
            None => return,
        };
        log::trace!("half-space box {:?}", b);

        // Edge i is opposite vertex i
        let mut row = [EdgeFunction::new(&v[1], &v[2], b.x1, b.y1),
                       EdgeFunction::new(&v[2], &v[0], b.x1, b.y1),
                       EdgeFunction::new(&v[0], &v[1], b.x1, b.y1)];
        let dx = [row[0].step_x, row[1].step_x, row[2].step_x];

        for y in b.y1 ..= b.y2 {
            let mut w = [row[0].value, row[1].value, row[2].value];
            for x in b.x1 ..= b.x2 {
                if (w[0] | w[1] | w[2]) >= 0 {
                    target.put_pixel(x as usize, y as usize, color);
                }
                w[0] += dx[0];
                w[1] += dx[1];
                w[2] += dx[2];
            }
            for e in row.iter_mut() {
                e.value += e.step_y;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Framebuffer;

    #[test]
    fn bounds_outside_clip() {
        let v = [FixedVector::new(20.0, 1.0, 0.0),
                 FixedVector::new(30.0, 1.0, 0.0),
                 FixedVector::new(25.0, 5.0, 0.0)];
        assert_eq!(HalfSpace::bounds(&v, &Rectangle::pixels(8, 8)), None);
    }

    #[test]
    fn single_pixel_triangle() {
        // Covers the center of pixel (2,1); (3,1) and (2,2) sit on the
        // right edge and are excluded
        let v = [FixedVector::new(2.0, 1.0, 0.0),
                 FixedVector::new(2.0, 3.0, 0.0),
                 FixedVector::new(4.0, 1.0, 0.0)];
        let mut fb = Framebuffer::new(4, 4);
        HalfSpace::new().rasterize(&v, &mut fb, Rgba8::white());
        assert_eq!(fb.count_not(Rgba8::transparent()), 1);
        assert_eq!(fb.get(2, 1), Rgba8::white());
    }
}
