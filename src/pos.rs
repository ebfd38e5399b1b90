use std::{cmp::Ordering, ops::Range};

/// A `(row, col)` coordinate inside a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos2 {
    pub row: usize,
    pub col: usize,
}
impl Pos2 {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
    #[inline]
    pub fn zero() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Row and column ranges of the 3x3 block centered on this position,
    /// clipped to a `width` x `height` grid
    ///
    /// The center itself is part of the block.
    pub fn neighborhood(self, width: usize, height: usize) -> (Range<usize>, Range<usize>) {
        let rows = self.row.saturating_sub(1)..self.row.saturating_add(2).min(height);
        let cols = self.col.saturating_sub(1)..self.col.saturating_add(2).min(width);
        (rows, cols)
    }
}
impl Default for Pos2 {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}
impl PartialOrd for Pos2 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Pos2 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // row-major: compare rows first, then columns
        Ord::cmp(&self.row, &other.row).then(Ord::cmp(&self.col, &other.col))
    }
}
