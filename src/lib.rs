//! Flat shaded triangle rasterizer
//!
//! How does this work
//!    tri = Triangle( [a, b, c], width, height, Strategy )
//!    tri.draw( target, vertices, color )
//!  Draw
//!    FixedVector::from(vertex)       -- quantize to 1/16 pixel
//!    is_back_facing()                -- signed area <= 0: nothing drawn
//!    Rectangle::rejects()            -- entirely outside the target
//!    Strategy::HalfSpace
//!      HalfSpace::bounds()           -- pixel box, clamped to target
//!      EdgeFunction::new()           -- once, at the top-left pixel center
//!        step_x / step_y             -- exact incremental stepping
//!        put_pixel()                 -- all three edges >= 0
//!    Strategy::Scanline
//!      find_edge() x 3               -- left edges -> start, right -> end
//!        scan()                      -- Bresenham, sampled at row centers
//!      copy_hline()                  -- start[y]+1 ..= end[y], rows ymin+1 ..= ymax
//!
//! Both strategies sample pixel centers and share one fill rule: a center
//! exactly on an edge is inside only if the edge is a top or left edge, so
//! triangles sharing an edge never both write a pixel on it.

pub mod fixed;
pub mod vertex;
pub mod edge;
pub mod clip;
pub mod color;
pub mod buffer;
pub mod scan;
pub mod walker;
pub mod halfspace;
pub mod raster;
pub mod ppm;
pub mod error;

pub use fixed::FixedVector;
pub use vertex::*;
pub use edge::EdgeFunction;
pub use edge::EdgeKind;
pub use clip::Rectangle;
pub use color::*;
pub use buffer::*;
pub use scan::*;
pub use walker::EdgeWalker;
pub use halfspace::*;
pub use raster::*;
pub use error::Error;
pub use error::Result;

/// Number of fractional bits in fixed point coordinates
pub const SUBPIXEL_SHIFT : i32 = 4;
/// Fixed point one, sub-pixel steps per pixel
pub const SUBPIXEL_SCALE : i32 = 1<<SUBPIXEL_SHIFT;
/// Mask of the fractional bits
pub const SUBPIXEL_MASK  : i32 = SUBPIXEL_SCALE - 1;
/// Fixed point one half, offset of a pixel center
pub const SUBPIXEL_HALF  : i32 = SUBPIXEL_SCALE / 2;

/// Destination of pixel writes
///
/// Coordinates passed in are always within `width` x `height`
pub trait Target {
    /// Width in pixels
    fn width(&self) -> usize;
    /// Height in pixels
    fn height(&self) -> usize;
    /// Write a single pixel
    fn put_pixel(&mut self, x: usize, y: usize, c: Rgba8);
    /// Write pixels `x1 ..= x2` of row `y`
    fn copy_hline(&mut self, x1: usize, x2: usize, y: usize, c: Rgba8) {
        for x in x1 ..= x2 {
            self.put_pixel(x, y, c);
        }
    }
}

/// Coverage computation for a single front-facing triangle
pub trait Rasterize {
    /// Write `color` to every pixel of `target` covered by `v`
    ///
    /// `v` must be counter-clockwise; culling is the caller's job
    fn rasterize<T: Target>(&mut self, v: &[FixedVector; 3], target: &mut T, color: Rgba8);
}
