//! Presentation of a filled (or partially filled) puzzle.

use std::fmt;

use crate::puzzle::Puzzle;
use crate::solver::Assignment;

/// The glyph used for blocked cells in the text rendering.
const BLOCK: char = '█';

/// The letters an assignment contributes to each cell, as a
/// `height × width` array. Blocked cells and open cells not covered by any
/// assigned slot are `None`.
///
/// Slots never disagree on a shared cell once an assignment has passed the
/// consistency check, so the last writer is as good as any.
pub fn letter_grid(puzzle: &Puzzle, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
    let mut letters = vec![vec![None; puzzle.width()]; puzzle.height()];
    for (slot, word) in assignment.iter() {
        for (k, (row, col)) in slot.cells().enumerate() {
            letters[row][col] = word.as_bytes().get(k).map(|&b| b as char);
        }
    }
    letters
}

/// Displays a puzzle with an assignment laid into it: a letter per filled
/// cell, a space per open-but-unfilled cell, and a solid block elsewhere.
pub struct FilledGrid<'a> {
    puzzle: &'a Puzzle,
    assignment: &'a Assignment,
}

impl<'a> FilledGrid<'a> {
    pub fn new(puzzle: &'a Puzzle, assignment: &'a Assignment) -> Self {
        Self { puzzle, assignment }
    }
}

impl fmt::Display for FilledGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = letter_grid(self.puzzle, self.assignment);
        for row in 0..self.puzzle.height() {
            for col in 0..self.puzzle.width() {
                if self.puzzle.is_open(row, col) {
                    write!(f, "{}", letters[row][col].unwrap_or(' '))?;
                } else {
                    write!(f, "{BLOCK}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{letter_grid, FilledGrid};
    use crate::puzzle::{Direction, Puzzle, Slot};
    use crate::solver::Assignment;

    fn filled_crossing() -> (Puzzle, Assignment) {
        let puzzle = Puzzle::parse("___\n##_\n##_").unwrap();
        let assignment = Assignment::new()
            .assign(Slot::new(0, 0, Direction::Across, 3), "CAT".into())
            .assign(Slot::new(0, 2, Direction::Down, 3), "TIE".into());
        (puzzle, assignment)
    }

    #[test]
    fn letters_land_on_the_cells_their_slots_cover() {
        let (puzzle, assignment) = filled_crossing();
        let letters = letter_grid(&puzzle, &assignment);

        assert_eq!(Some('C'), letters[0][0]);
        assert_eq!(Some('A'), letters[0][1]);
        // The shared cell gets the same letter from both slots.
        assert_eq!(Some('T'), letters[0][2]);
        assert_eq!(Some('I'), letters[1][2]);
        assert_eq!(Some('E'), letters[2][2]);
        assert_eq!(None, letters[1][0]);
    }

    #[test]
    fn display_draws_blocks_letters_and_gaps() {
        let (puzzle, assignment) = filled_crossing();
        let rendered = FilledGrid::new(&puzzle, &assignment).to_string();
        assert_eq!("CAT\n██I\n██E\n", rendered);
    }

    #[test]
    fn unassigned_open_cells_render_as_spaces() {
        let puzzle = Puzzle::parse("___\n##_\n##_").unwrap();
        let assignment =
            Assignment::new().assign(Slot::new(0, 0, Direction::Across, 3), "CAT".into());

        let rendered = FilledGrid::new(&puzzle, &assignment).to_string();
        assert_eq!("CAT\n██ \n██ \n", rendered);
    }
}
