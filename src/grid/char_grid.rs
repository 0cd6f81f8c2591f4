use crate::errors::{FormatError, IndexError};
use crate::grid::{Coord, Shape};

use std::fmt::{self, Write};
use std::ops::Index;
use std::str::FromStr;

/// A rectangular block of characters, stored densely in row-major order.
///
/// Built once from newline-delimited text and not mutated afterwards.
/// The transformations in this crate return new grids.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    pub(crate) shape: Shape,
    pub(crate) cells: Vec<char>,
}

impl Grid {
    /// Builds a grid from newline-delimited text.
    ///
    /// The first line determines the number of columns, the number of lines the number of rows.
    /// Line terminators (`\n` or `\r\n`) are not stored,
    /// a terminator after the last line is optional.
    ///
    /// Every line must be as long as the first one, otherwise [`FormatError::RaggedLine`]
    /// is returned. Input without a single character on its first line is [`FormatError::Empty`].
    /// A `\r` that is not part of a line terminator is [`FormatError::LineBreakInCell`],
    /// so that [`Display`](fmt::Display) output always parses back into the same grid.
    ///
    /// ```
    /// use gridscan::{Coord, Grid};
    ///
    /// let grid = Grid::build("ab.\n#c.\n").unwrap();
    /// assert_eq!((grid.rows(), grid.cols()), (2, 3));
    /// assert_eq!(grid.cells()[3], '#');
    /// assert_eq!(grid.index_to_coord(4), Ok(Coord::new(1, 1)));
    /// ```
    pub fn build(text: &str) -> Result<Grid, FormatError> {
        let cols = match text.lines().next() {
            Some(first) => first.chars().count(),
            None => 0,
        };
        if cols == 0 {
            return Err(FormatError::Empty);
        }
        let rows = text.lines().count();

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in text.lines().enumerate() {
            if let Some(col) = line.chars().position(|ch| ch == '\r') {
                return Err(FormatError::LineBreakInCell { row, col });
            }
            let start = cells.len();
            cells.extend(line.chars());
            let found = cells.len() - start;
            if found != cols {
                return Err(FormatError::RaggedLine {
                    row,
                    expected: cols,
                    found,
                });
            }
        }

        tracing::debug!(rows, cols, "built grid");
        Ok(Grid::from_parts(Shape { rows, cols }, cells))
    }

    // caller guarantees a positive shape with `cells.len() == shape.len()`
    pub(crate) fn from_parts(shape: Shape, cells: Vec<char>) -> Grid {
        debug_assert!(!shape.is_empty());
        debug_assert_eq!(cells.len(), shape.len());
        Grid { shape, cells }
    }

    /// Number of lines
    #[inline]
    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    /// Number of characters per line
    #[inline]
    pub fn cols(&self) -> usize {
        self.shape.cols
    }

    /// Rows and columns
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of cells, `rows * cols`. Never 0.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`, empty input is rejected by [`Grid::build`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells, going from left to right, top to bottom.
    #[inline]
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Converts a linear cell index into `(row, col)`. See [`Shape::index_to_coord`].
    #[inline]
    pub fn index_to_coord(&self, idx: usize) -> Result<Coord, IndexError> {
        self.shape.index_to_coord(idx)
    }

    /// Converts `(row, col)` into a linear cell index. See [`Shape::coord_to_index`].
    #[inline]
    pub fn coord_to_index(&self, coord: Coord) -> Result<usize, IndexError> {
        self.shape.coord_to_index(coord)
    }

    /// Returns the character at `coord` or `None` if it lies outside the grid.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<char> {
        if !self.shape.contains(coord) {
            return None;
        }
        Some(self.cells[self.shape.index_of(coord)])
    }

    /// Returns the character at a linear index or `None` if it lies outside the grid.
    #[inline]
    pub fn get_index(&self, idx: usize) -> Option<char> {
        self.cells.get(idx).copied()
    }

    /// Returns one line of the grid or `None` if `row >= rows`.
    pub fn row(&self, row: usize) -> Option<&[char]> {
        if row >= self.rows() {
            return None;
        }
        let start = row * self.cols();
        Some(&self.cells[start..start + self.cols()])
    }

    /// Returns an iterator over the lines of the grid, top to bottom.
    pub fn rows_iter(&self) -> impl ExactSizeIterator<Item = &[char]> + '_ {
        self.cells.chunks_exact(self.cols())
    }

    /// Returns an iterator over one column, top to bottom, or `None` if `col >= cols`.
    pub fn col(&self, col: usize) -> Option<impl Iterator<Item = char> + '_> {
        if col >= self.cols() {
            return None;
        }
        Some(self.cells[col..].iter().step_by(self.cols()).copied())
    }

    /// Returns an iterator over all cells with their coordinates,
    /// going from left to right, top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.shape.coords().zip(self.cells.iter().copied())
    }
}

impl FromStr for Grid {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::build(s)
    }
}

impl Index<Coord> for Grid {
    type Output = char;

    /// # Panics
    ///
    /// Panics if `coord` lies outside the grid.
    fn index(&self, coord: Coord) -> &char {
        match self.shape.coord_to_index(coord) {
            Ok(idx) => &self.cells[idx],
            Err(err) => panic!("{}", err),
        }
    }
}

// Lines are separated, not terminated, by '\n' so that the output parses back into the same grid.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (nr, line) in self.rows_iter().enumerate() {
            if nr != 0 {
                f.write_char('\n')?;
            }
            for &ch in line {
                f.write_char(ch)?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Grid::build(&text).map_err(serde::de::Error::custom)
    }
}
