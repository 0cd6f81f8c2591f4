#![warn(missing_docs)]
//! Dense character grids for text-based grid puzzles
//!
//! ## Overview
//!
//! Grid puzzles come as a block of equally long lines. This crate loads such a block
//! into a row-major buffer, converts between linear cell indices and `(row, col)` coordinates
//! and scans grids for numbers and the symbols next to them.
//!
//! Every conversion is checked: out-of-range indices, ragged lines and unreadable files
//! are reported as errors, never as wrong data.
//!
//! ## Example
//!
//! ```
//! use gridscan::{Coord, Grid};
//! use gridscan::schematic::Schematic;
//!
//! let grid = Grid::build(
//! "467..114..
//! ...*......
//! ..35..633.
//! ......#...
//! 617*......
//! .....+.58.
//! ..592.....
//! ......755.
//! ...$.*....
//! .664.598..
//! ").unwrap();
//!
//! assert_eq!((grid.rows(), grid.cols()), (10, 10));
//! assert_eq!(grid.index_to_coord(13), Ok(Coord::new(1, 3)));
//! assert_eq!(grid.coord_to_index(Coord::new(1, 3)), Ok(13));
//! assert!(grid.index_to_coord(100).is_err());
//!
//! // grids can also be read from disk
//! // let grid = Grid::from_file("input.txt")?;
//!
//! let schematic = Schematic::new(grid).unwrap();
//! assert_eq!(schematic.part_number_sum(), 4361);
//! assert_eq!(schematic.gear_ratio_sum(), 467835);
//! ```
mod errors;
pub mod generator;
pub mod grid;
mod loader;
pub mod schematic;

pub use crate::grid::{Coord, Grid, Shape};
pub use crate::loader::read_input;

/// Errors for building, loading and scanning grids
pub mod error {
    pub use crate::errors::{FormatError, IndexError, LoadError, NumberOverflow};
}
