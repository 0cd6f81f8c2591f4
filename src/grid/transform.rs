//! Rotations and reflections of a grid
use crate::grid::{Coord, Grid, Shape};

impl Grid {
    // Builds a grid of `shape`, every cell is copied from the coordinate `source(dest)`.
    fn remap(&self, shape: Shape, source: impl Fn(Coord) -> Coord) -> Grid {
        let cells = shape
            .coords()
            .map(|dest| self.cells[self.shape.index_of(source(dest))])
            .collect();
        Grid::from_parts(shape, cells)
    }

    /// Swaps rows and columns, the first line becomes the first column.
    pub fn transpose(&self) -> Grid {
        self.remap(self.shape.transposed(), |c| Coord::new(c.col, c.row))
    }

    /// Rotates by a quarter turn clockwise, the first line becomes the last column.
    pub fn rotate_clockwise(&self) -> Grid {
        let rows = self.rows();
        self.remap(self.shape.transposed(), |c| Coord::new(rows - 1 - c.col, c.row))
    }

    /// Rotates by a quarter turn counterclockwise,
    /// the first line becomes the first column read bottom up.
    pub fn rotate_counterclockwise(&self) -> Grid {
        let cols = self.cols();
        self.remap(self.shape.transposed(), |c| Coord::new(c.col, cols - 1 - c.row))
    }

    /// Reverses every line, left becomes right.
    pub fn mirror_rows(&self) -> Grid {
        let cols = self.cols();
        self.remap(self.shape, |c| Coord::new(c.row, cols - 1 - c.col))
    }

    /// Reverses every column, top becomes bottom.
    pub fn mirror_cols(&self) -> Grid {
        let rows = self.rows();
        self.remap(self.shape, |c| Coord::new(rows - 1 - c.row, c.col))
    }

    /// Rotates by a half turn.
    pub fn flip(&self) -> Grid {
        let cells = self.cells.iter().rev().copied().collect();
        Grid::from_parts(self.shape, cells)
    }
}
