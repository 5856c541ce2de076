//! Triangle rasterizer
//!
//! A [Triangle] binds three indices into the caller's vertex array and the
//! dimensions of the target it draws into.  It is built once and drawn many
//! times, typically once per frame with freshly projected vertices.

use crate::clip::Rectangle;
use crate::color::Rgb8;
use crate::color::Rgba8;
use crate::edge::is_back_facing;
use crate::error::Error;
use crate::fixed::FixedVector;
use crate::halfspace::HalfSpace;
use crate::vertex::Vertex;
use crate::walker::EdgeWalker;
use crate::Rasterize;
use crate::Target;

use std::fmt;
use std::str::FromStr;

/// Coverage algorithm used by a [Triangle]
///
/// Both produce identical pixels; they differ only in speed
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Strategy {
    /// Bounding box traversal with incremental edge functions
    HalfSpace,
    /// Bresenham edge walk into span tables, then horizontal fill
    Scanline,
}

impl Default for Strategy {
    fn default() -> Strategy {
        Strategy::HalfSpace
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::HalfSpace => write!(f, "halfspace"),
            Strategy::Scanline => write!(f, "scanline"),
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;
    /// Parse a strategy name
    ///
    ///     use trifill::Strategy;
    ///
    ///     assert_eq!("scanline".parse::<Strategy>().unwrap(), Strategy::Scanline);
    ///     assert_eq!("Half-Space".parse::<Strategy>().unwrap(), Strategy::HalfSpace);
    ///     assert!("dda".parse::<Strategy>().is_err());
    ///
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "halfspace" | "half-space" => Ok(Strategy::HalfSpace),
            "scanline" => Ok(Strategy::Scanline),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

/// Strategy together with its scratch storage
#[derive(Debug,Clone)]
enum Rasterizer {
    HalfSpace(HalfSpace),
    Scanline(EdgeWalker),
}

impl Rasterizer {
    fn new(strategy: Strategy, height: usize) -> Self {
        match strategy {
            Strategy::HalfSpace => Rasterizer::HalfSpace(HalfSpace::new()),
            Strategy::Scanline => Rasterizer::Scanline(EdgeWalker::new(height)),
        }
    }
}

/// Flat colored triangle bound to three vertex indices
///
///     use trifill::{Framebuffer, Rgb8, Rgba8, Triangle, Vertex};
///
///     let mut fb = Framebuffer::new(8, 8);
///     let vertices = [Vertex::xy(0.0, 0.0), Vertex::xy(0.0, 4.0), Vertex::xy(4.0, 0.0)];
///
///     let mut tri = Triangle::new([0, 1, 2], 8, 8);
///     tri.draw(&mut fb, &vertices, Rgb8::new(255, 0, 0));
///
///     assert_eq!(fb.get(0, 0), Rgba8::new(255, 0, 0, 255));
///     assert_eq!(fb.get(4, 0), Rgba8::transparent());
///
#[derive(Debug,Clone)]
pub struct Triangle {
    /// Index of first vertex
    pub va: usize,
    /// Index of second vertex
    pub vb: usize,
    /// Index of third vertex
    pub vc: usize,
    width: usize,
    height: usize,
    rasterizer: Rasterizer,
}

impl Triangle {
    /// Create a triangle drawing into `width` x `height` targets with the
    /// default strategy
    pub fn new(indices: [usize; 3], width: usize, height: usize) -> Self {
        Self::with_strategy(indices, width, height, Strategy::default())
    }
    /// Create a triangle using a specific [Strategy]
    ///
    /// Scratch storage for the strategy is allocated here, sized to `height`
    pub fn with_strategy(indices: [usize; 3], width: usize, height: usize, strategy: Strategy) -> Self {
        log::debug!("triangle {:?}: {}x{} {}", indices, width, height, strategy);
        Self { va: indices[0], vb: indices[1], vc: indices[2],
               width, height,
               rasterizer: Rasterizer::new(strategy, height) }
    }
    /// Vertex indices
    pub fn indices(&self) -> [usize; 3] {
        [self.va, self.vb, self.vc]
    }
    /// Target width in pixels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Target height in pixels
    pub fn height(&self) -> usize {
        self.height
    }
    /// Current strategy
    pub fn strategy(&self) -> Strategy {
        match self.rasterizer {
            Rasterizer::HalfSpace(_) => Strategy::HalfSpace,
            Rasterizer::Scanline(_) => Strategy::Scanline,
        }
    }
    /// Switch strategy, allocating scratch storage for the new one
    pub fn set_strategy(&mut self, strategy: Strategy) {
        if strategy != self.strategy() {
            log::debug!("triangle {:?}: strategy {}", self.indices(), strategy);
            self.rasterizer = Rasterizer::new(strategy, self.height);
        }
    }
    /// Bind to targets of a new size
    ///
    /// The only operation that reallocates scratch storage
    pub fn resize(&mut self, width: usize, height: usize) {
        log::debug!("triangle {:?}: resize {}x{} -> {}x{}",
                    self.indices(), self.width, self.height, width, height);
        self.width = width;
        self.height = height;
        if let Rasterizer::Scanline(ref mut w) = self.rasterizer {
            w.resize(height);
        }
    }
    /// Draw the triangle with vertex positions taken from `vertices`
    ///
    /// Positions are screen space pixels.  Nothing is drawn if the
    /// triangle is clockwise, degenerate or entirely outside the target.
    /// Parts outside the target are clipped.
    ///
    /// # Panics
    ///
    /// If a bound index is out of range for `vertices`
    pub fn draw<T: Target>(&mut self, target: &mut T, vertices: &[Vertex], color: Rgb8) {
        let v = [FixedVector::from(&vertices[self.va]),
                 FixedVector::from(&vertices[self.vb]),
                 FixedVector::from(&vertices[self.vc])];
        self.draw_fixed(target, &v, color);
    }
    /// Draw the triangle from positions already in fixed point
    ///
    /// Positions beyond the guard band saturate to it
    pub fn draw_fixed<T: Target>(&mut self, target: &mut T, v: &[FixedVector; 3], color: Rgb8) {
        let v = &[v[0].clamped(), v[1].clamped(), v[2].clamped()];
        debug_assert_eq!((target.width(), target.height()), (self.width, self.height),
                         "target does not match the bound dimensions");
        if self.width == 0 || self.height == 0 {
            return;
        }
        if is_back_facing(&v[0], &v[1], &v[2]) {
            log::trace!("triangle {:?}: culled", self.indices());
            return;
        }
        if Rectangle::pixels(self.width, self.height).upscale().rejects(v) {
            log::trace!("triangle {:?}: outside target", self.indices());
            return;
        }
        let color = Rgba8::from(color);
        match self.rasterizer {
            Rasterizer::HalfSpace(ref mut r) => r.rasterize(v, target, color),
            Rasterizer::Scanline(ref mut r) => r.rasterize(v, target, color),
        }
    }
}
