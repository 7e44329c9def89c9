//! Crossfill fills crossword grids: it assigns a word from a dictionary to
//! every slot of a grid so that lengths match, no word repeats, and crossing
//! slots agree on their shared letter.
//!
//! The fill is solved as a constraint satisfaction problem in three stages:
//! node consistency filters each slot's candidates to the right length,
//! the AC-3 algorithm propagates the crossing constraints to a fixpoint,
//! and a backtracking search over the pruned domains finds a complete
//! assignment. Slot selection defaults to minimum-remaining-values with a
//! degree tie-break, value ordering to least-constraining-value; both are
//! pluggable through the traits in [`solver::heuristics`].
//!
//! # Core Concepts
//!
//! - **[`Puzzle`](puzzle::Puzzle)**: immutable grid geometry — the slots
//!   scanned from the open cells, and the overlap and neighbor tables
//!   between them.
//! - **[`WordList`](wordlist::WordList)**: the normalized dictionary every
//!   slot's domain starts from.
//! - **[`SolverEngine`](solver::SolverEngine)**: runs the pipeline and
//!   returns a complete [`Assignment`](solver::Assignment), or `None` when
//!   the puzzle cannot be filled. An unfillable puzzle is an ordinary
//!   outcome, not an error.
//!
//! # Example
//!
//! ```
//! use crossfill::puzzle::Puzzle;
//! use crossfill::solver::SolverEngine;
//! use crossfill::wordlist::WordList;
//!
//! // One across slot of three cells crossing one down slot of two.
//! let puzzle = Puzzle::parse("___\n#_#").unwrap();
//! let words = WordList::from_words(["cat", "dog", "at", "ax"]);
//!
//! let (solution, _stats) = SolverEngine::default().solve(&puzzle, &words);
//! let assignment = solution.expect("this grid fills");
//!
//! assert!(assignment.is_complete(&puzzle));
//! assert!(assignment.is_consistent(&puzzle));
//! ```
pub mod error;
pub mod puzzle;
pub mod render;
pub mod solver;
pub mod wordlist;
