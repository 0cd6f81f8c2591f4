use crate::errors::IndexError;
use crate::grid::Coord;

/// Dimensions of a grid. Cells are laid out row-major: row stride is `cols`, column stride is 1.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    /// Constructs a new `Shape`.
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Shape { rows, cols }
    }

    /// Number of cells, `rows * cols`, saturating at `usize::MAX`.
    #[inline]
    pub const fn len(self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Returns `true` if the shape holds no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `coord` lies inside this shape.
    #[inline]
    pub const fn contains(self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Shape with rows and columns swapped.
    #[inline]
    pub const fn transposed(self) -> Self {
        Shape {
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Converts a linear cell index into its coordinate.
    ///
    /// Fails if `idx >= rows * cols`.
    #[inline]
    pub fn index_to_coord(self, idx: usize) -> Result<Coord, IndexError> {
        if idx >= self.len() {
            return Err(IndexError::Index {
                index: idx,
                len: self.len(),
            });
        }
        Ok(Coord {
            row: idx / self.cols,
            col: idx % self.cols,
        })
    }

    /// Converts a coordinate into its linear cell index, `row * cols + col`.
    ///
    /// Fails if the coordinate lies outside this shape.
    #[inline]
    pub fn coord_to_index(self, coord: Coord) -> Result<usize, IndexError> {
        if !self.contains(coord) {
            return Err(IndexError::Coord {
                row: coord.row,
                col: coord.col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.index_of(coord))
    }

    // caller guarantees `self.contains(coord)`
    #[inline(always)]
    pub(crate) fn index_of(self, coord: Coord) -> usize {
        debug_assert!(self.contains(coord));
        coord.row * self.cols + coord.col
    }

    /// Returns an iterator over all coordinates, going from left to right, top to bottom.
    pub fn coords(self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Coord { row, col }))
    }
}
