mod common;

use common::*;
use test_log::test;
use trifill::edge::signed_area;
use trifill::{FixedVector, Rgb8, Rgba8, Strategy, Target, Triangle, Vertex};

const STRATEGIES : [Strategy; 2] = [Strategy::HalfSpace, Strategy::Scanline];

/// Counts writes to each pixel
struct Counter {
    counts: Vec<u8>,
    width: usize,
    height: usize,
}

impl Counter {
    fn new(width: usize, height: usize) -> Self {
        Self { counts: vec![0; width * height], width, height }
    }
    fn at(&self, x: usize, y: usize) -> u8 {
        self.counts[y * self.width + x]
    }
}

impl Target for Counter {
    fn width(&self) -> usize { self.width }
    fn height(&self) -> usize { self.height }
    fn put_pixel(&mut self, x: usize, y: usize, _c: Rgba8) {
        self.counts[y * self.width + x] += 1;
    }
}

/// Draw triangles `tris` of `vertices`, then check every pixel of a convex
/// counter-clockwise `outline` was written once if its center is strictly
/// inside, and never if it is outside
fn check_cover(strategy: Strategy, vertices: &[Vertex], tris: &[[usize; 3]],
               outline: &[usize], width: usize, height: usize) {
    let mut counter = Counter::new(width, height);
    for t in tris {
        let mut tri = Triangle::with_strategy(*t, width, height, strategy);
        tri.draw(&mut counter, vertices, Rgb8::white());
    }
    let p : Vec<FixedVector> = outline.iter().map(|&i| FixedVector::from(&vertices[i])).collect();
    for y in 0 .. height {
        for x in 0 .. width {
            let c = FixedVector::from_raw(16 * x as i32 + 8, 16 * y as i32 + 8);
            let areas : Vec<i64> = (0 .. p.len())
                .map(|i| signed_area(&p[i], &p[(i + 1) % p.len()], &c))
                .collect();
            let n = counter.at(x, y);
            if areas.iter().all(|&a| a > 0) {
                assert_eq!(n, 1, "{}: interior pixel ({},{}) written {} times", strategy, x, y, n);
            } else if areas.iter().any(|&a| a < 0) {
                assert_eq!(n, 0, "{}: exterior pixel ({},{}) written", strategy, x, y);
            } else {
                assert!(n <= 1, "{}: boundary pixel ({},{}) written {} times", strategy, x, y, n);
            }
        }
    }
}

#[test]
fn rotating_quad_has_no_gaps_or_overlaps() {
    let outline = [0, 1, 2, 3];
    let mut angle = 0.0;
    while angle < 360.0 {
        let v = rotate(&quad(), 110.0, 70.0, angle);
        for &s in STRATEGIES.iter() {
            check_cover(s, &v, &[GREEN_INDICES, BLUE_INDICES], &outline, 200, 150);
        }
        angle += 7.3;
    }
}

#[test]
fn axis_aligned_diagonals() {
    // Shared edge passes exactly through pixel centers
    let v = vec![Vertex::xy(2.0, 2.0), Vertex::xy(2.0, 10.0),
                 Vertex::xy(10.0, 10.0), Vertex::xy(10.0, 2.0)];
    for &s in STRATEGIES.iter() {
        check_cover(s, &v, &[[0, 1, 2], [0, 2, 3]], &[0, 1, 2, 3], 12, 12);
        check_cover(s, &v, &[[0, 1, 3], [1, 2, 3]], &[0, 1, 2, 3], 12, 12);
    }
}

#[test]
fn shared_horizontal_and_vertical_edges() {
    // Two squares split into four triangles meeting at pixel boundaries and
    // on pixel centers
    let v = vec![Vertex::xy(1.5, 1.5), Vertex::xy(1.5, 6.5), Vertex::xy(6.5, 6.5),
                 Vertex::xy(6.5, 1.5), Vertex::xy(1.5, 11.5), Vertex::xy(6.5, 11.5)];
    for &s in STRATEGIES.iter() {
        let mut counter = Counter::new(8, 13);
        for t in [[0, 1, 2], [0, 2, 3], [1, 4, 5], [1, 5, 2]].iter() {
            let mut tri = Triangle::with_strategy(*t, 8, 13, s);
            tri.draw(&mut counter, &v, Rgb8::white());
        }
        // Left and top edges of the outline are in, right and bottom out
        for y in 0 .. 13 {
            for x in 0 .. 8 {
                let want = (1 ..= 5).contains(&x) && (1 ..= 10).contains(&y);
                assert_eq!(counter.at(x, y), want as u8, "{} ({},{})", s, x, y);
            }
        }
    }
}

#[test]
fn fan_around_sub_pixel_center() {
    let (cx, cy, r) = (31.3, 27.7, 20.6);
    let n = 9;
    let mut v = vec![Vertex::xy(cx, cy)];
    for i in 0 .. n {
        let a = (i as f64 * 360.0 / n as f64 + 11.0).to_radians();
        v.push(Vertex::xy(cx + r * a.cos(), cy + r * a.sin()));
    }
    // Decreasing angle is counter-clockwise in y down screen space
    let tris : Vec<[usize; 3]> = (0 .. n).map(|i| [0, 1 + (i + 1) % n, 1 + i]).collect();
    let outline : Vec<usize> = (0 .. n).rev().map(|i| 1 + i).collect();
    for &s in STRATEGIES.iter() {
        check_cover(s, &v, &tris, &outline, 64, 56);
    }
}

#[test]
fn clipped_shared_edge() {
    // Quad hanging off the top-left corner of the target
    let v = rotate(&quad(), 110.0, 70.0, 200.0);
    let v : Vec<_> = v.iter().map(|p| Vertex::xy(p.x - 100.0, p.y - 60.0)).collect();
    for &s in STRATEGIES.iter() {
        check_cover(s, &v, &[GREEN_INDICES, BLUE_INDICES], &[0, 1, 2, 3], 40, 30);
    }
}
