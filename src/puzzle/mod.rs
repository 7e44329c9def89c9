pub mod grid;
pub mod model;
pub mod slot;

pub use grid::Grid;
pub use model::Puzzle;
pub use slot::{Direction, Slot};
