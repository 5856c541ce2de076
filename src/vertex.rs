//! Screen space vertices

/// Projected vertex position in homogeneous coordinates
///
/// Supplied by the caller each frame, already in screen space (pixels,
/// origin top left, y down).  Only `x` and `y` are rasterized.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Vertex {
    /// Create a new vertex with `w` set to 1
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, w: 1.0 }
    }
    /// Create a new vertex on the z = 0 plane
    ///
    ///     use trifill::Vertex;
    ///
    ///     let v = Vertex::xy(3.5, 2.0);
    ///     assert_eq!(v, Vertex::new(3.5, 2.0, 0.0));
    ///
    pub fn xy(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl From<(f64,f64)> for Vertex {
    fn from(p: (f64, f64)) -> Self {
        Self::xy(p.0, p.1)
    }
}
impl From<[f64;3]> for Vertex {
    fn from(p: [f64;3]) -> Self {
        Self::new(p[0], p[1], p[2])
    }
}
