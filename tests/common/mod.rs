#![allow(dead_code)]

use trifill::{Framebuffer, Rgb8, Rgba8, Strategy, Triangle, Vertex};

/// Small deterministic generator, xorshift64*
pub struct Rng(u64);

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng(seed.max(1))
    }
    pub fn next_u64(&mut self) -> u64 {
        self.0 ^= self.0 >> 12;
        self.0 ^= self.0 << 25;
        self.0 ^= self.0 >> 27;
        self.0.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }
    /// Uniform in [lo, hi)
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        let u = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        lo + (hi - lo) * u
    }
}

/// Vertices of the rotating quad scene, two triangles sharing edge 0-2
pub fn quad() -> Vec<Vertex> {
    vec![Vertex::xy(140.0, 100.0),
         Vertex::xy(140.0, 40.0),
         Vertex::xy(80.0, 40.0),
         Vertex::xy(50.0, 90.0)]
}
pub const GREEN_INDICES : [usize; 3] = [0, 1, 2];
pub const BLUE_INDICES  : [usize; 3] = [0, 2, 3];

pub fn green() -> Rgb8 { Rgb8::new(120, 240, 100) }
pub fn blue()  -> Rgb8 { Rgb8::new(100, 180, 240) }

/// Rotate `vertices` by `angle` degrees about (cx, cy)
pub fn rotate(vertices: &[Vertex], cx: f64, cy: f64, angle: f64) -> Vec<Vertex> {
    let (s, c) = angle.to_radians().sin_cos();
    vertices.iter().map(|v| {
        let (x, y) = (v.x - cx, v.y - cy);
        Vertex::xy(x * c - y * s + cx, x * s + y * c + cy)
    }).collect()
}

/// Draw a single triangle into a fresh buffer
pub fn render(strategy: Strategy, indices: [usize; 3], vertices: &[Vertex],
              width: usize, height: usize) -> Framebuffer {
    let mut fb = Framebuffer::new(width, height);
    let mut tri = Triangle::with_strategy(indices, width, height, strategy);
    tri.draw(&mut fb, vertices, Rgb8::white());
    fb
}

/// Coordinates of all written pixels
pub fn covered(fb: &Framebuffer) -> Vec<(usize, usize)> {
    let mut out = vec![];
    for y in 0 .. fb.height {
        for x in 0 .. fb.width {
            if fb.get(x, y) != Rgba8::transparent() {
                out.push((x, y));
            }
        }
    }
    out
}

/// Text picture of a buffer, '#' for written pixels
pub fn picture(fb: &Framebuffer) -> String {
    let mut s = String::new();
    for y in 0 .. fb.height {
        for x in 0 .. fb.width {
            s.push(if fb.get(x, y) == Rgba8::transparent() { '.' } else { '#' });
        }
        s.push('\n');
    }
    s
}
