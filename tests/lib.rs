use gridscan::error::{FormatError, IndexError, LoadError};
use gridscan::generator::{random_grid, random_schematic};
use gridscan::schematic::Schematic;
use gridscan::{read_input, Coord, Grid, Shape};

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SCHEMATIC: &str = include_str!("../grids/schematic_sample.txt");
const SYMBOLS: &str = include_str!("../grids/symbols.txt");
const PATTERN: &str = include_str!("../grids/pattern.txt");

fn grid(s: &str) -> Grid {
    Grid::build(s).unwrap_or_else(|err| panic!("{:?}", err))
}

#[test]
fn sample_dimensions() {
    let grid = grid(SCHEMATIC);
    assert_eq!(grid.shape(), Shape::new(10, 10));
    assert_eq!(grid.len(), 100);
    assert_eq!(grid.row(4).unwrap().iter().collect::<String>(), "617*......");

    let grid = self::grid(PATTERN);
    assert_eq!(grid.shape(), Shape::new(7, 9));
}

#[test]
fn symbols_sample() {
    let grid = grid(SYMBOLS);
    assert_eq!((grid.rows(), grid.cols()), (2, 3));
    assert_eq!(grid.cells()[3], '#');
    assert_eq!(grid.index_to_coord(3), Ok(Coord::new(1, 0)));
}

#[test]
fn boundaries() {
    let grid = grid(PATTERN);
    assert_eq!(grid.index_to_coord(0), Ok(Coord::new(0, 0)));
    assert_eq!(
        grid.index_to_coord(grid.len() - 1),
        Ok(Coord::new(grid.rows() - 1, grid.cols() - 1))
    );
    assert_eq!(
        grid.index_to_coord(grid.len()),
        Err(IndexError::Index { index: 63, len: 63 })
    );
}

#[test]
fn build_is_idempotent() {
    let first = grid(SCHEMATIC);
    let second = grid(SCHEMATIC);
    assert_eq!(first, second);
    assert_eq!(first.cells(), second.cells());
}

#[test]
fn ragged_input_is_rejected() {
    let mut text = String::from(SCHEMATIC);
    text.push_str("..\n");
    assert_eq!(
        Grid::build(&text),
        Err(FormatError::RaggedLine {
            row: 10,
            expected: 10,
            found: 2,
        })
    );
}

#[test]
fn missing_file() {
    match read_input("grids/does_not_exist.txt") {
        Err(LoadError::Io { source, .. }) => {
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
        }
        other => panic!("expected io error, got {:?}", other),
    }
}

#[test]
fn from_file_matches_build() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/grids/schematic_sample.txt");
    assert_eq!(Grid::from_file(path).unwrap(), grid(SCHEMATIC));
}

#[test]
fn schematic_sample() {
    let schematic = Schematic::new(grid(SCHEMATIC)).unwrap();
    assert_eq!(schematic.part_number_sum(), 4361);
    assert_eq!(schematic.gear_ratio_sum(), 467835);
}

// quarter turns, mirrors and transposes relate to each other
#[test]
fn transformations_compose() {
    let grid = grid(PATTERN);
    assert_eq!(grid.rotate_clockwise(), grid.transpose().mirror_rows());
    assert_eq!(grid.rotate_counterclockwise(), grid.transpose().mirror_cols());
    assert_eq!(grid.flip(), grid.mirror_rows().mirror_cols());

    let mut turned = grid.clone();
    for _ in 0..4 {
        turned = turned.rotate_clockwise();
    }
    assert_eq!(turned, grid);
}

// the generator is seeded, so failures can be reproduced
#[test]
fn generated_schematics_roundtrip_through_text() {
    let mut rng = StdRng::seed_from_u64(2023);
    for _ in 0..200 {
        let grid = random_schematic(&mut rng, Shape::new(20, 31));
        let reparsed = Grid::build(&grid.to_string()).unwrap();
        assert_eq!(reparsed, grid);

        let schematic = Schematic::new(grid).unwrap();
        let parts = schematic.part_numbers().count();
        assert!(parts <= schematic.numbers().len());
    }
}

fn text_strategy() -> impl Strategy<Value = (usize, usize, String)> {
    (1..12usize, 1..12usize).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(proptest::char::range('!', '~'), rows * cols).prop_map(
            move |cells| {
                let mut text = String::new();
                for line in cells.chunks(cols) {
                    text.extend(line);
                    text.push('\n');
                }
                (rows, cols, text)
            },
        )
    })
}

proptest! {
    #[test]
    fn build_yields_dimensions((rows, cols, text) in text_strategy()) {
        let grid = Grid::build(&text).unwrap();
        prop_assert_eq!(grid.rows(), rows);
        prop_assert_eq!(grid.cols(), cols);
        prop_assert_eq!(grid.cells().len(), rows * cols);
        prop_assert_eq!(grid.cells().iter().collect::<String>(), text.replace('\n', ""));
    }

    #[test]
    fn index_roundtrip((_rows, _cols, text) in text_strategy(), seed in any::<u64>()) {
        let grid = Grid::build(&text).unwrap();
        let idx = (seed % grid.len() as u64) as usize;
        let coord = grid.index_to_coord(idx).unwrap();
        prop_assert_eq!(grid.coord_to_index(coord), Ok(idx));
        prop_assert_eq!(grid[coord], grid.cells()[idx]);
    }

    #[test]
    fn coord_roundtrip(
        rows in 1..50usize,
        cols in 1..50usize,
        row_seed in any::<usize>(),
        col_seed in any::<usize>()
    ) {
        let shape = Shape::new(rows, cols);
        let coord = Coord::new(row_seed % rows, col_seed % cols);
        let idx = shape.coord_to_index(coord).unwrap();
        prop_assert_eq!(shape.index_to_coord(idx), Ok(coord));
    }

    #[test]
    fn out_of_range_is_an_error(rows in 1..50usize, cols in 1..50usize, past in 0..100usize) {
        let shape = Shape::new(rows, cols);
        prop_assert!(shape.index_to_coord(shape.len() + past).is_err());
        prop_assert!(shape.coord_to_index(Coord::new(rows + past, 0)).is_err());
        prop_assert!(shape.coord_to_index(Coord::new(0, cols + past)).is_err());
    }

    #[test]
    fn transpose_is_an_involution(seed in any::<u64>(), rows in 1..20usize, cols in 1..20usize) {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = random_grid(&mut rng, Shape::new(rows, cols), &['.', '#', 'O']);
        prop_assert_eq!(grid.transpose().transpose(), grid.clone());
        prop_assert_eq!(grid.rotate_clockwise().rotate_counterclockwise(), grid);
    }
}
