//! Grids, their shapes and the coordinates of their cells
mod char_grid;
mod coord;
mod shape;
mod transform;

#[rustfmt::skip]
pub use self::{
    char_grid::Grid,
    coord::Coord,
    shape::Shape,
};
