//! Scanline edge walker
//!
//! Each non-horizontal edge is walked from its upper to its lower vertex
//! with an integer Bresenham accumulator, recording one column per row into
//! the start (left edges) or end (right edges) table of a [SpanTable].  The
//! rows between the top and bottom vertex are then filled span by span.
//!
//! Columns are sampled at pixel centers.  The table holds, for each row,
//! the last column whose center lies strictly left of the edge; a left edge
//! therefore starts its span one column later, which is the top-left rule
//! in x.  Rows follow the same rule in y.
//!
//! [SpanTable]: ../scan/struct.SpanTable.html

use crate::color::Rgba8;
use crate::edge::EdgeKind;
use crate::fixed::last_center_before;
use crate::fixed::pixel_center;
use crate::fixed::FixedVector;
use crate::scan::SpanTable;
use crate::Rasterize;
use crate::Target;
use crate::SUBPIXEL_HALF;
use crate::SUBPIXEL_SCALE;

/// Scanline rasterizer with per-row span tables
#[derive(Debug,Default,Clone)]
pub struct EdgeWalker {
    spans: SpanTable,
}

/// Axis stepped one whole pixel per iteration
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Major {
    X,
    Y,
}

impl Major {
    /// Major axis of an edge with deltas `dx`, `dy`; ties go to y
    pub fn of(dx: i64, dy: i64) -> Self {
        if dx.abs() > dy.abs() { Major::X } else { Major::Y }
    }
}

/// Scan convert the edge `start -> end` into `column`
///
/// `start` must be strictly above `end`.  Rows whose centers lie in
/// `[start.y, end.y)` are written, clamped to the rows of `column`.  The
/// walk begins directly at the first visible row; the accumulator is set
/// up exactly there from the fractional position of `start`.
pub fn scan(start: &FixedVector, end: &FixedVector, column: &mut [i32]) {
    let (sx, sy) = (i64::from(start.x), i64::from(start.y));
    let dx = i64::from(end.x) - sx;
    let dy = i64::from(end.y) - sy;
    debug_assert!(dy > 0, "edge must be walked top down");

    let rows = column.len() as i32;
    let first = (last_center_before(start.y) + 1).max(0);
    let last = last_center_before(end.y).min(rows - 1);
    if first > last {
        return;
    }

    let scale = i64::from(SUBPIXEL_SCALE);
    // One row down moves the edge dx / dy pixels; as a fraction with
    // denominator `major` that is `minor` per row
    let major = dy * scale;
    let (step, minor) = if dx < 0 { (-1, -dx * scale) } else { (1, dx * scale) };

    // Last column strictly left of the edge at the center of row `first`:
    //   floor(((start.x - half) * dy + dx * (center - start.y) - 1) / major)
    let below = i64::from(pixel_center(first)) - sy;
    let num = (sx - i64::from(SUBPIXEL_HALF)) * dy + dx * below - 1;
    let mut x = num.div_euclid(major);
    let rem = num.rem_euclid(major);
    // Distance to the next column change in the direction of travel
    let mut err = if step < 0 { major - 1 - rem } else { rem };

    match Major::of(dx, dy) {
        Major::Y => {
            for y in first ..= last {
                column[y as usize] = x as i32;
                err += minor;
                if err >= major {
                    x += step;
                    err -= major;
                }
            }
        },
        Major::X => {
            // Run-sliced: whole pixels per row, plus one on overflow
            let run = (minor / major) * step;
            let frac = minor % major;
            for y in first ..= last {
                column[y as usize] = x as i32;
                x += run;
                err += frac;
                if err >= major {
                    x += step;
                    err -= major;
                }
            }
        },
    }
}

impl EdgeWalker {
    /// Create a walker for targets `height` rows tall
    pub fn new(height: usize) -> Self {
        Self { spans: SpanTable::new(height) }
    }
    /// Reallocate the span tables for a new target height
    pub fn resize(&mut self, height: usize) {
        self.spans.resize(height);
    }
    /// Span tables from the last draw
    pub fn spans(&self) -> &SpanTable {
        &self.spans
    }
    /// Scan the edge `a -> b` into the table for its side
    fn find_edge(&mut self, a: &FixedVector, b: &FixedVector) {
        match EdgeKind::classify(a, b) {
            EdgeKind::Left => scan(a, b, &mut self.spans.start),
            EdgeKind::Right => scan(b, a, &mut self.spans.end),
            EdgeKind::Horizontal => {},
        }
    }
}

impl Rasterize for EdgeWalker {
    fn rasterize<T: Target>(&mut self, v: &[FixedVector; 3], target: &mut T, color: Rgba8) {
        self.find_edge(&v[0], &v[1]);
        self.find_edge(&v[1], &v[2]);
        self.find_edge(&v[2], &v[0]);

        let top = v[0].y.min(v[1].y).min(v[2].y);
        let bottom = v[0].y.max(v[1].y).max(v[2].y);
        let ymin = last_center_before(top);
        let ymax = last_center_before(bottom);

        let rows = self.spans.len().min(target.height()) as i32;
        let max_x = target.width() as i32 - 1;
        let (first, last) = ((ymin + 1).max(0), ymax.min(rows - 1));
        log::trace!("walker rows {} ..= {} (clamped {} ..= {})", ymin + 1, ymax, first, last);

        for y in first ..= last {
            let y = y as usize;
            if let Some((x1, x2)) = self.spans.span(y, max_x) {
                target.copy_hline(x1, x2, y, color);
            }
        }
    }
}
