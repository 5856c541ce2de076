//! Span tables
//!
//! Per row column bounds written by the edge walker.  Storage is sized once
//! to the target height and overwritten on every draw.

/// Column bounds of a triangle's interior, indexed by row
///
/// `start[y]` is the last column left of the interior, `end[y]` the last
/// column inside it, so row `y` covers `start[y]+1 ..= end[y]`.  Entries
/// outside the rows of the triangle being drawn hold stale values.
#[derive(Debug,Default,Clone)]
pub struct SpanTable {
    pub start: Vec<i32>,
    pub end: Vec<i32>,
}

impl SpanTable {
    /// Allocate a table for `height` rows
    pub fn new(height: usize) -> Self {
        Self { start: vec![0; height], end: vec![0; height] }
    }
    /// Number of rows
    pub fn len(&self) -> usize {
        self.start.len()
    }
    pub fn is_empty(&self) -> bool {
        self.start.is_empty()
    }
    /// Reallocate for `height` rows
    ///
    /// Only called on an explicit resize, never while drawing
    pub fn resize(&mut self, height: usize) {
        self.start = vec![0; height];
        self.end = vec![0; height];
    }
    /// Columns covered in row `y`, clamped to `0 ..= max_x`
    ///
    /// None if the clamped span is empty
    ///
    ///     use trifill::SpanTable;
    ///
    ///     let mut t = SpanTable::new(2);
    ///     t.start[0] = -4; t.end[0] = 3;
    ///     t.start[1] = 6;  t.end[1] = 6;
    ///     assert_eq!(t.span(0, 9), Some((0, 3)));
    ///     assert_eq!(t.span(1, 9), None);
    ///
    pub fn span(&self, y: usize, max_x: i32) -> Option<(usize, usize)> {
        let x1 = (self.start[y] + 1).max(0);
        let x2 = self.end[y].min(max_x);
        if x1 <= x2 {
            Some((x1 as usize, x2 as usize))
        } else {
            None
        }
    }
}
