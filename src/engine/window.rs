use super::Grid;
use crate::Pos2;

/// A read-only rectangular window over a [`Grid`]
///
/// `bottom_right` is exclusive and clamped to the grid.
pub struct GridView<'a> {
    tl: Pos2,
    br: Pos2,
    grid: &'a Grid,
}
impl<'a> GridView<'a> {
    pub fn new(grid: &'a Grid, top_left: Pos2, bottom_right: Pos2) -> Self {
        Self {
            tl: top_left,
            br: Pos2 {
                row: bottom_right.row.min(grid.height()),
                col: bottom_right.col.min(grid.width()),
            },
            grid,
        }
    }

    /// Alive cells inside the window, in row-major order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Pos2> + '_ {
        let rows = self.tl.row..self.br.row;
        let cols = self.tl.col..self.br.col;
        self.grid
            .alive()
            .filter(move |pos| rows.contains(&pos.row) && cols.contains(&pos.col))
    }
}

/// Draws alive cells as `█` and dead cells as spaces
impl<'a> std::fmt::Display for GridView<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut last = Pos2 {
            row: self.tl.row,
            col: self.tl.col,
        };
        for alive in self.iter() {
            // determine the number of lines to print
            let lines = alive.row - last.row;
            // determine the number of padding spaces to print
            let padding = match lines {
                0 => alive.col - last.col,
                _ => alive.col - self.tl.col,
            };
            write!(f, "{0:\n<1$}{0: <2$}█", "", lines, padding)?;
            last = Pos2 {
                row: alive.row,
                col: alive.col + 1,
            };
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: usize, height: usize, rows: &str) -> Grid {
        let mut grid = Grid::new(width, height).expect("valid dimensions");
        grid.seed_with_pattern(&rows.parse().expect("valid pattern"))
            .expect("pattern fits");
        grid
    }

    #[test]
    fn iter_filters_to_window() {
        let grid = grid(4, 4, "X--X\n-X--\n--X-\nX--X");
        let view = grid.window(Pos2::new(1, 1), Pos2::new(3, 3));

        assert_eq!(
            view.iter().collect::<Vec<_>>(),
            vec![Pos2::new(1, 1), Pos2::new(2, 2)]
        );
    }

    #[test]
    fn bottom_right_is_clamped() {
        let grid = grid(3, 3, "--X\n---\nX--");
        let view = grid.window(Pos2::zero(), Pos2::new(100, 100));

        assert_eq!(view.iter().count(), 2);
    }

    #[test]
    fn display_draws_blocks() {
        let grid = grid(3, 3, "X-X\n---\n-X-");
        let view = grid.window(Pos2::zero(), Pos2::new(3, 3));

        assert_eq!(view.to_string(), "█ █\n\n █");
    }

    #[test]
    fn display_is_relative_to_window() {
        let grid = grid(4, 4, "----\n--X-\n---X\n----");
        let view = grid.window(Pos2::new(1, 2), Pos2::new(4, 4));

        assert_eq!(view.to_string(), "█\n █");
    }
}
