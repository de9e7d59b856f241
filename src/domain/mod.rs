mod cell;
mod grid;

pub use cell::{Cell, CellFate};
pub use grid::Grid;
