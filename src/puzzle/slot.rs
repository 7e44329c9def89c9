use std::fmt;

use serde::Serialize;

/// Direction of a slot within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// The `(row, col)` offset between consecutive cells of a slot facing
    /// this direction.
    pub fn step(self) -> (usize, usize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A puzzle variable: a maximal run of open cells in one direction, with a
/// fixed start position and length.
///
/// Two slots are equal iff all four fields match. The derived ordering
/// (row, then column, then direction, then length) is the stable order used
/// whenever a deterministic traversal of slots is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Slot {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Slot {
    pub fn new(row: usize, col: usize, direction: Direction, length: usize) -> Slot {
        Slot {
            row,
            col,
            direction,
            length,
        }
    }

    /// Iterates over the `(row, col)` coordinates covered by this slot, in
    /// word order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (dr, dc) = self.direction.step();
        (0..self.length).map(move |k| (self.row + k * dr, self.col + k * dc))
    }

    /// The index within this slot's word of the given cell, if the slot
    /// covers it.
    pub fn index_of_cell(&self, row: usize, col: usize) -> Option<usize> {
        self.cells().position(|cell| cell == (row, col))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {}, length {}",
            self.row, self.col, self.direction, self.length
        )
    }
}
