//! Errors that may be encountered when building, reading or scanning a grid
use std::io;
use std::path::PathBuf;

use crate::grid::Coord;
#[cfg(doc)]
use crate::{grid::Grid, schematic::Schematic};

/// Error for [`Grid::build`]
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[allow(missing_docs)]
pub enum FormatError {
    /// Input has no lines or its first line has no characters
    #[error("grid input is empty")]
    Empty,
    /// A line's length differs from the first line's.
    /// `row` counts from 0, topmost line is 0.
    #[error("line {row} has {found} characters, expected {expected}")]
    RaggedLine {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A carriage return that does not end a line.
    /// `row` and `col` count from 0.
    #[error("line {row} has a carriage return at column {col}")]
    LineBreakInCell { row: usize, col: usize },
}

/// Error for out-of-range accesses through [`Grid::index_to_coord`] and [`Grid::coord_to_index`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[allow(missing_docs)]
pub enum IndexError {
    /// Linear index is not below `rows * cols`
    #[error("index {index} out of range for grid with {len} cells")]
    Index { index: usize, len: usize },
    /// Row or column lies outside the grid
    #[error("coordinate ({row}, {col}) out of range for {rows}x{cols} grid")]
    Coord {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Error for [`Grid::from_file`]
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened or read
    #[error("cannot read {}", .path.display())]
    Io {
        /// Path that was passed to the loader
        path: PathBuf,
        #[allow(missing_docs)]
        #[source]
        source: io::Error,
    },
    /// The file was read but is not a rectangular grid
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Error for [`Schematic::new`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("number starting at ({}, {}) does not fit in 64 bits", .coord.row, .coord.col)]
pub struct NumberOverflow {
    /// First digit of the offending run
    pub coord: Coord,
}
