use std::collections::HashMap;

use crate::error::Result;
use crate::puzzle::grid::Grid;
use crate::puzzle::slot::{Direction, Slot};

/// Immutable crossword geometry: the open/block grid, the slots derived from
/// it, and the precomputed overlap and adjacency tables.
///
/// Slots are the maximal runs of open cells of length ≥ 2, scanned across
/// (row-major) and then down (column-major); [`Puzzle::slots`] preserves that
/// scan order, which is the stable order heuristics fall back on for
/// tie-breaking.
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    slots: Vec<Slot>,
    /// Keyed by ordered pair; both directions are present and
    /// index-consistent: `overlaps[(a, b)] == (ia, ib)` iff
    /// `overlaps[(b, a)] == (ib, ia)`.
    overlaps: HashMap<(Slot, Slot), (usize, usize)>,
    /// Sorted by the slot ordering, for deterministic traversal.
    neighbors: HashMap<Slot, Vec<Slot>>,
}

impl Puzzle {
    /// Derives slots, overlaps and neighbor lists from the given grid.
    pub fn new(grid: Grid) -> Puzzle {
        let slots = scan_slots(&grid);

        let mut overlaps = HashMap::new();
        let mut neighbors: HashMap<Slot, Vec<Slot>> =
            slots.iter().map(|slot| (*slot, Vec::new())).collect();

        for (i, &a) in slots.iter().enumerate() {
            for &b in &slots[i + 1..] {
                if let Some((ia, ib)) = intersection(&a, &b) {
                    overlaps.insert((a, b), (ia, ib));
                    overlaps.insert((b, a), (ib, ia));
                    neighbors.get_mut(&a).unwrap().push(b);
                    neighbors.get_mut(&b).unwrap().push(a);
                }
            }
        }
        for list in neighbors.values_mut() {
            list.sort_unstable();
        }

        // Overlap asymmetry would be a construction bug, not a property of
        // any particular grid.
        debug_assert!(overlaps
            .iter()
            .all(|(&(a, b), &(ia, ib))| overlaps.get(&(b, a)) == Some(&(ib, ia))));

        Puzzle {
            grid,
            slots,
            overlaps,
            neighbors,
        }
    }

    /// Parses structure text (see [`Grid::parse`]) and derives the puzzle
    /// from it.
    pub fn parse(text: &str) -> Result<Puzzle> {
        Ok(Puzzle::new(Grid::parse(text)?))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Whether the cell at `(row, col)` is open.
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.grid.is_open(row, col)
    }

    /// All slots, in scan order (across first, then down).
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The cell shared by `a` and `b`, as the index of that cell within
    /// each slot's word, or `None` if the slots do not intersect.
    pub fn overlap(&self, a: &Slot, b: &Slot) -> Option<(usize, usize)> {
        self.overlaps.get(&(*a, *b)).copied()
    }

    /// Every slot other than `a` that shares a cell with `a`, sorted.
    pub fn neighbors(&self, a: &Slot) -> &[Slot] {
        self.neighbors.get(a).map_or(&[], Vec::as_slice)
    }

    /// Number of slots overlapping `a` — the degree used by slot-selection
    /// tie-breaking.
    pub fn degree(&self, a: &Slot) -> usize {
        self.neighbors(a).len()
    }
}

/// Collects maximal runs of open cells of length ≥ 2, across then down.
fn scan_slots(grid: &Grid) -> Vec<Slot> {
    let mut slots = Vec::new();

    for row in 0..grid.height() {
        let mut col = 0;
        while col < grid.width() {
            if grid.is_open(row, col) {
                let start = col;
                while col < grid.width() && grid.is_open(row, col) {
                    col += 1;
                }
                let length = col - start;
                if length >= 2 {
                    slots.push(Slot::new(row, start, Direction::Across, length));
                }
            } else {
                col += 1;
            }
        }
    }

    for col in 0..grid.width() {
        let mut row = 0;
        while row < grid.height() {
            if grid.is_open(row, col) {
                let start = row;
                while row < grid.height() && grid.is_open(row, col) {
                    row += 1;
                }
                let length = row - start;
                if length >= 2 {
                    slots.push(Slot::new(start, col, Direction::Down, length));
                }
            } else {
                row += 1;
            }
        }
    }

    slots
}

/// The single cell two slots share, if any, as word indices `(ia, ib)`.
/// Perpendicular slots cross in at most one cell and parallel slots are
/// disjoint by maximality, so the first shared cell is the only one.
fn intersection(a: &Slot, b: &Slot) -> Option<(usize, usize)> {
    a.cells()
        .enumerate()
        .find_map(|(ia, (row, col))| b.index_of_cell(row, col).map(|ib| (ia, ib)))
}
