use super::{Rule, index, window::GridView};
use crate::{GridError, Pattern, Pos2, pattern};
use rand::Rng;
use std::fmt;

/// A fixed-size matrix of alive/dead cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates a `width` x `height` grid with every cell dead
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0)
            .ok_or(GridError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, pos: Pos2) -> usize {
        debug_assert!(pos.row < self.height && pos.col < self.width);
        pos.row * self.width + pos.col
    }

    /// The state of the cell at `(row, col)`, or [`None`] outside the grid
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.height && col < self.width {
            Some(self.cells[self.index(Pos2 { row, col })])
        } else {
            None
        }
    }

    /// Stamps `pattern` into the center of the grid
    ///
    /// The pattern's top-left corner lands on
    /// `((height - rows) / 2, (width - cols) / 2)`. Cells outside the stamped
    /// region keep their state. Fails with [`GridError::SizeMismatch`] without
    /// touching the grid if the pattern is larger in either dimension.
    pub fn seed_with_pattern(&mut self, pattern: &Pattern) -> Result<(), GridError> {
        if pattern.rows() > self.height || pattern.cols() > self.width {
            return Err(GridError::SizeMismatch {
                pattern_rows: pattern.rows(),
                pattern_cols: pattern.cols(),
                height: self.height,
                width: self.width,
            });
        }

        let offset = Pos2 {
            row: (self.height - pattern.rows()) / 2,
            col: (self.width - pattern.cols()) / 2,
        };
        for r in 0..pattern.rows() {
            let start = self.index(Pos2 {
                row: offset.row + r,
                col: offset.col,
            });
            self.cells[start..start + pattern.cols()].copy_from_slice(pattern.row(r));
        }
        Ok(())
    }

    /// Sets every cell alive or dead with equal probability
    ///
    /// Deterministic for a seeded `rng`.
    pub fn seed_random<R: Rng>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = rng.random_bool(0.5);
        }
    }

    /// Counts the alive cells in the 3x3 block centered on `(row, col)`
    ///
    /// The block is clipped to the grid (no wraparound) and the center cell is
    /// counted too when alive, so the result lies in `0..=9`. A position
    /// outside the grid only counts the part of its block that overlaps it.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let (rows, cols) = Pos2 { row, col }.neighborhood(self.width, self.height);
        if cols.is_empty() {
            return 0;
        }
        let mut count = 0;
        for r in rows {
            let start = r * self.width;
            count += self.cells[start + cols.start..start + cols.end]
                .iter()
                .filter(|&&alive| alive)
                .count() as u8;
        }
        count
    }

    /// Computes the next generation under `rule`
    ///
    /// Every cell of the result depends only on `self`; the receiver is never
    /// modified.
    pub fn advance(&self, rule: Rule) -> Grid {
        let table = index::get_transition_table(rule);
        let mut cells = Vec::with_capacity(self.cells.len());
        for row in 0..self.height {
            for col in 0..self.width {
                let alive = self.cells[self.index(Pos2 { row, col })];
                let count = self.count_live_neighbors(row, col);
                cells.push(table[usize::from(alive)][usize::from(count)]);
            }
        }
        Grid {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Positions of the alive cells, in row-major order
    pub fn alive(&self) -> impl Iterator<Item = Pos2> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| Pos2 {
                row: i / width,
                col: i % width,
            })
    }

    /// The rows of the grid, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }

    pub fn window(&self, top_left: Pos2, bottom_right: Pos2) -> GridView<'_> {
        GridView::new(self, top_left, bottom_right)
    }
}

/// Prints the grid in the seed alphabet, one line per row
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &alive in row {
                let marker = if alive { pattern::ALIVE } else { pattern::DEAD };
                write!(f, "{}", marker)?;
            }
        }
        Ok(())
    }
}
