//! Random grids for benchmarks and tests
use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{Grid, Shape};

const SYMBOLS: &[char] = &['*', '#', '+', '$', '/', '=', '%', '@', '&', '-'];

fn assert_positive(shape: Shape) {
    assert!(
        !shape.is_empty(),
        "cannot generate a grid with {} rows and {} columns",
        shape.rows,
        shape.cols
    );
}

/// Fills a grid of `shape` with characters drawn uniformly from `alphabet`.
///
/// # Panics
///
/// Panics if `shape` holds no cells, if `alphabet` is empty or if it contains a line break.
pub fn random_grid<R: Rng + ?Sized>(rng: &mut R, shape: Shape, alphabet: &[char]) -> Grid {
    assert_positive(shape);
    assert!(!alphabet.is_empty(), "alphabet is empty");
    assert!(
        !alphabet.iter().any(|&ch| ch == '\n' || ch == '\r'),
        "alphabet contains a line break"
    );

    let cells = (0..shape.len())
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect();
    Grid::from_parts(shape, cells)
}

/// Generates a grid that looks like an engine schematic: mostly `.`,
/// with runs of up to 3 digits and sparse symbols in between.
///
/// # Panics
///
/// Panics if `shape` holds no cells.
pub fn random_schematic<R: Rng + ?Sized>(rng: &mut R, shape: Shape) -> Grid {
    assert_positive(shape);

    let mut cells = Vec::with_capacity(shape.len());
    for _ in 0..shape.rows {
        let mut line = Vec::with_capacity(shape.cols);
        while line.len() < shape.cols {
            match rng.gen_range(0..10) {
                0..=1 => {
                    let run = rng.gen_range(1..=3).min(shape.cols - line.len());
                    line.extend((0..run).map(|_| digit(rng)));
                }
                2 => line.push(*SYMBOLS.choose(rng).unwrap_or(&'*')),
                _ => line.push('.'),
            }
            // keep runs separated so that they don't merge into longer numbers
            if line.last().map_or(false, char::is_ascii_digit) && line.len() < shape.cols {
                line.push('.');
            }
        }
        cells.extend(line);
    }
    Grid::from_parts(shape, cells)
}

fn digit<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'0' + rng.gen_range(0..10u8))
}
