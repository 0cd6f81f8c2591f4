use crate::grid::Shape;

/// A `(row, col)` position in a grid. Row 0 is the topmost line, column 0 the leftmost character.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Constructs a new `Coord`. No bounds are implied, see [`Shape::contains`].
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Returns the up to 8 coordinates surrounding this one that lie inside `shape`,
    /// in row-major order.
    pub fn neighbours(self, shape: Shape) -> impl Iterator<Item = Coord> {
        let rows = self.row.saturating_sub(1)..self.row.saturating_add(2).min(shape.rows);
        let cols = self.col.saturating_sub(1)..self.col.saturating_add(2).min(shape.cols);
        rows.flat_map(move |row| cols.clone().map(move |col| Coord { row, col }))
            .filter(move |&neighbour| neighbour != self)
    }
}

impl From<(usize, usize)> for Coord {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}
