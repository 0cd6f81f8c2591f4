//! Scanning a grid for numbers and the symbols around them
//!
//! A *number* is a maximal run of ASCII digits within one line,
//! runs never continue onto the next line.
//! A *symbol* is every character that is neither an ASCII digit nor `.`.
//! A number touches a cell if the cell is one of the 8 neighbours of any of its digits.
//!
//! ```
//! use gridscan::{Grid, schematic::Schematic};
//!
//! let grid = Grid::build("467..114..\n...*......\n..35..633.").unwrap();
//! let schematic = Schematic::new(grid).unwrap();
//! assert_eq!(schematic.part_number_sum(), 467 + 35);
//! assert_eq!(schematic.gear_ratio_sum(), 467 * 35);
//! ```
use crate::errors::NumberOverflow;
use crate::grid::{Coord, Grid};

/// A run of digits and its value
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Number {
    /// Position of the first digit
    pub start: Coord,
    /// Number of digits
    pub len: usize,
    #[allow(missing_docs)]
    pub value: u64,
}

impl Number {
    /// Column one past the last digit
    #[inline]
    pub fn end_col(self) -> usize {
        self.start.col.saturating_add(self.len)
    }

    /// Returns `true` if `coord` is next to (or on) one of this number's digits.
    #[inline]
    pub fn is_adjacent_to(self, coord: Coord) -> bool {
        coord.row.abs_diff(self.start.row) <= 1
            && coord.col.saturating_add(1) >= self.start.col
            && coord.col <= self.end_col()
    }
}

/// A `*` touching exactly two numbers
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Gear {
    #[allow(missing_docs)]
    pub coord: Coord,
    /// Product of the two numbers, saturating at `u64::MAX`
    pub ratio: u64,
}

/// A grid together with the numbers and symbols found on it
#[derive(Clone, Debug)]
pub struct Schematic {
    grid: Grid,
    // sorted by (row, col) because the scan is row-major
    numbers: Vec<Number>,
    symbols: Vec<Coord>,
}

#[inline]
fn is_symbol(ch: char) -> bool {
    !ch.is_ascii_digit() && ch != '.'
}

fn scan_numbers(grid: &Grid) -> Result<Vec<Number>, NumberOverflow> {
    let mut numbers = vec![];
    for (row, line) in grid.rows_iter().enumerate() {
        let mut col = 0;
        while col < line.len() {
            if !line[col].is_ascii_digit() {
                col += 1;
                continue;
            }

            let start = Coord::new(row, col);
            let mut value = 0u64;
            while let Some(digit) = line.get(col).and_then(|ch| ch.to_digit(10)) {
                value = value
                    .checked_mul(10)
                    .and_then(|value| value.checked_add(u64::from(digit)))
                    .ok_or(NumberOverflow { coord: start })?;
                col += 1;
            }
            numbers.push(Number {
                start,
                len: col - start.col,
                value,
            });
        }
    }
    Ok(numbers)
}

impl Schematic {
    /// Scans `grid` for numbers and symbols.
    ///
    /// Fails if a run of digits is too long to fit in a `u64`.
    pub fn new(grid: Grid) -> Result<Schematic, NumberOverflow> {
        let numbers = scan_numbers(&grid)?;
        let symbols: Vec<_> = grid
            .iter()
            .filter(|&(_, ch)| is_symbol(ch))
            .map(|(coord, _)| coord)
            .collect();
        tracing::trace!(numbers = numbers.len(), symbols = symbols.len(), "scanned schematic");

        Ok(Schematic {
            grid,
            numbers,
            symbols,
        })
    }

    /// The scanned grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// All numbers, going from left to right, top to bottom
    pub fn numbers(&self) -> &[Number] {
        &self.numbers
    }

    /// Positions of all symbols, going from left to right, top to bottom
    pub fn symbols(&self) -> &[Coord] {
        &self.symbols
    }

    /// Returns the numbers touching `coord`.
    pub fn adjacent_numbers(&self, coord: Coord) -> impl Iterator<Item = Number> + '_ {
        // only numbers on the row above, on or below `coord` can touch it
        let lo = self.numbers.partition_point(|n| n.start.row + 1 < coord.row);
        let hi = self
            .numbers
            .partition_point(|n| n.start.row <= coord.row.saturating_add(1));
        self.numbers[lo..hi]
            .iter()
            .copied()
            .filter(move |n| n.is_adjacent_to(coord))
    }

    fn touches_symbol(&self, number: Number) -> bool {
        let shape = self.grid.shape();
        let row_end = number.start.row.saturating_add(2).min(shape.rows);
        let col_end = number.end_col().saturating_add(1).min(shape.cols);
        let rows = number.start.row.saturating_sub(1)..row_end;
        let cols = number.start.col.saturating_sub(1)..col_end;
        rows.flat_map(|row| cols.clone().map(move |col| Coord::new(row, col)))
            .any(|coord| self.grid.get(coord).map_or(false, is_symbol))
    }

    /// Numbers touching at least one symbol
    pub fn part_numbers(&self) -> impl Iterator<Item = Number> + '_ {
        self.numbers
            .iter()
            .copied()
            .filter(move |&n| self.touches_symbol(n))
    }

    /// Sum of all [part numbers](Schematic::part_numbers), saturating at `u64::MAX`
    pub fn part_number_sum(&self) -> u64 {
        self.part_numbers()
            .fold(0, |sum, n| sum.saturating_add(n.value))
    }

    /// All `*` symbols that touch exactly two numbers
    pub fn gears(&self) -> Vec<Gear> {
        self.symbols
            .iter()
            .copied()
            .filter(|&coord| self.grid[coord] == '*')
            .filter_map(|coord| {
                let mut adjacent = self.adjacent_numbers(coord);
                match (adjacent.next(), adjacent.next(), adjacent.next()) {
                    (Some(a), Some(b), None) => Some(Gear {
                        coord,
                        ratio: a.value.saturating_mul(b.value),
                    }),
                    _ => None,
                }
            })
            .collect()
    }

    /// Sum of the ratios of all [gears](Schematic::gears), saturating at `u64::MAX`
    pub fn gear_ratio_sum(&self) -> u64 {
        self.gears()
            .iter()
            .fold(0, |sum, gear| sum.saturating_add(gear.ratio))
    }
}
