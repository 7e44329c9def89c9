use crate::error::{Error, Result};

/// The character marking an open (fillable) cell in structure text.
const OPEN: char = '_';

/// A rectangular matrix of open and blocked cells, the raw geometry a
/// [`Puzzle`](crate::puzzle::Puzzle) is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    /// Row-major; `true` marks an open cell.
    cells: Vec<bool>,
}

impl Grid {
    /// Builds a grid from rows of booleans, `true` marking an open cell.
    /// All rows must have the same width.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Grid> {
        let Some(first) = rows.first() else {
            return Err(Error::EmptyGrid);
        };
        let width = first.len();
        if width == 0 {
            return Err(Error::EmptyGrid);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(Error::RaggedGrid {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
        }
        Ok(Grid {
            height: rows.len(),
            width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Parses structure text: one line per row, `_` for an open cell, any
    /// other character for a block.
    ///
    /// Leading and trailing blank lines are ignored. Lines shorter than the
    /// widest one are padded with blocks, so ragged input is accepted here
    /// (unlike [`Grid::from_rows`]).
    ///
    /// ```
    /// use crossfill::puzzle::Grid;
    ///
    /// let grid = Grid::parse("__#\n___\n").unwrap();
    /// assert_eq!(2, grid.height());
    /// assert_eq!(3, grid.width());
    /// assert!(grid.is_open(0, 1));
    /// assert!(!grid.is_open(0, 2));
    /// ```
    pub fn parse(text: &str) -> Result<Grid> {
        let lines: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect();

        let start = lines
            .iter()
            .position(|line| !line.trim().is_empty())
            .ok_or(Error::EmptyGrid)?;
        let end = lines.iter().rposition(|line| !line.trim().is_empty()).unwrap() + 1;
        let lines = &lines[start..end];

        let width = lines.iter().map(|line| line.chars().count()).max().unwrap();

        let rows = lines
            .iter()
            .map(|line| {
                let mut row: Vec<bool> = line.chars().map(|c| c == OPEN).collect();
                row.resize(width, false);
                row
            })
            .collect();

        Grid::from_rows(rows)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the cell at `(row, col)` is open.
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.width + col]
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;
    use crate::error::Error;

    #[test]
    fn parse_reads_open_and_blocked_cells() {
        let grid = Grid::parse("_#_\n___").unwrap();
        assert_eq!(2, grid.height());
        assert_eq!(3, grid.width());
        assert!(grid.is_open(0, 0));
        assert!(!grid.is_open(0, 1));
        assert!(grid.is_open(1, 2));
    }

    #[test]
    fn parse_pads_short_lines_with_blocks() {
        let grid = Grid::parse("____\n__").unwrap();
        assert_eq!(4, grid.width());
        assert!(grid.is_open(1, 1));
        assert!(!grid.is_open(1, 2));
        assert!(!grid.is_open(1, 3));
    }

    #[test]
    fn parse_ignores_surrounding_blank_lines() {
        let grid = Grid::parse("\n\n___\n\n").unwrap();
        assert_eq!(1, grid.height());
        assert_eq!(3, grid.width());
    }

    #[test]
    fn parse_rejects_blank_input() {
        assert!(matches!(Grid::parse(""), Err(Error::EmptyGrid)));
        assert!(matches!(Grid::parse("\n  \n"), Err(Error::EmptyGrid)));
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = Grid::from_rows(vec![vec![true, true], vec![true]]).unwrap_err();
        assert!(matches!(
            err,
            Error::RaggedGrid {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
    }
}
