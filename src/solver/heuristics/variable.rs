//! Heuristics for selecting which slot to branch on next during the search
//! process.

use std::cmp::Reverse;

use crate::puzzle::{Puzzle, Slot};
use crate::solver::{assignment::Assignment, domains::DomainStore};

/// A trait for slot-selection heuristics.
///
/// Implementors define a strategy for choosing which unassigned slot the
/// solver should branch on next. A good heuristic can dramatically reduce
/// the number of branches explored.
pub trait SlotSelectionHeuristic {
    /// Selects the next slot to be assigned.
    ///
    /// Returns `None` only when every slot is already assigned.
    fn select_slot(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<Slot>;
}

/// A baseline heuristic that selects the first unassigned slot in the
/// puzzle's scan order.
pub struct SelectFirstHeuristic;

impl SlotSelectionHeuristic for SelectFirstHeuristic {
    fn select_slot(
        &self,
        puzzle: &Puzzle,
        _domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<Slot> {
        puzzle
            .slots()
            .iter()
            .find(|slot| !assignment.contains(slot))
            .copied()
    }
}

/// The minimum-remaining-values heuristic, the solver's default.
///
/// Picks the unassigned slot with the smallest current domain (fail-first:
/// tackle the most constrained slot while the search tree is still shallow).
/// Ties are broken by the highest degree, i.e. the slot crossing the most
/// others; remaining ties fall back to the puzzle's scan order so repeated
/// solves pick identically.
pub struct MinimumRemainingValuesHeuristic;

impl SlotSelectionHeuristic for MinimumRemainingValuesHeuristic {
    fn select_slot(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<Slot> {
        puzzle
            .slots()
            .iter()
            .enumerate()
            .filter(|(_, slot)| !assignment.contains(slot))
            .min_by_key(|(index, slot)| {
                (domains.size_of(slot), Reverse(puzzle.degree(slot)), *index)
            })
            .map(|(_, slot)| *slot)
    }
}

#[cfg(test)]
mod tests {
    use super::{MinimumRemainingValuesHeuristic, SelectFirstHeuristic, SlotSelectionHeuristic};
    use crate::puzzle::{Direction, Puzzle, Slot};
    use crate::solver::{assignment::Assignment, domains::DomainStore};
    use crate::wordlist::WordList;

    #[test]
    fn select_first_walks_scan_order() {
        let puzzle = Puzzle::parse("___\n#_#").unwrap();
        let words = WordList::from_words(["cat", "dog", "at"]);
        let domains = DomainStore::new(&puzzle, &words);

        let first = SelectFirstHeuristic
            .select_slot(&puzzle, &domains, &Assignment::new())
            .unwrap();
        assert_eq!(puzzle.slots()[0], first);

        let assignment = Assignment::new().assign(first, "CAT".into());
        let second = SelectFirstHeuristic
            .select_slot(&puzzle, &domains, &assignment)
            .unwrap();
        assert_eq!(puzzle.slots()[1], second);
    }

    #[test]
    fn mrv_prefers_the_smallest_domain() {
        // Across slot of length 3, down slot of length 2: the dictionary
        // leaves two candidates for the across slot and one for the down.
        let puzzle = Puzzle::parse("___\n#_#").unwrap();
        let words = WordList::from_words(["cat", "dog", "at"]);
        let mut domains = DomainStore::new(&puzzle, &words);
        domains.enforce_node_consistency();

        let chosen = MinimumRemainingValuesHeuristic
            .select_slot(&puzzle, &domains, &Assignment::new())
            .unwrap();
        assert_eq!(Slot::new(0, 1, Direction::Down, 2), chosen);
    }

    #[test]
    fn mrv_ties_break_on_degree() {
        // Every slot has length 3, so all domains are equal in size; the
        // down spine crosses both across slots and must win on degree even
        // though it comes last in scan order.
        let puzzle = Puzzle::parse("___#\n#_##\n#___").unwrap();
        let words = WordList::from_words(["ant", "bat", "cow"]);
        let mut domains = DomainStore::new(&puzzle, &words);
        domains.enforce_node_consistency();

        let spine = Slot::new(0, 1, Direction::Down, 3);
        assert_eq!(2, puzzle.degree(&spine));

        let chosen = MinimumRemainingValuesHeuristic
            .select_slot(&puzzle, &domains, &Assignment::new())
            .unwrap();
        assert_eq!(spine, chosen);
    }

    #[test]
    fn returns_none_once_everything_is_assigned() {
        let puzzle = Puzzle::parse("__").unwrap();
        let words = WordList::from_words(["at"]);
        let domains = DomainStore::new(&puzzle, &words);
        let assignment = Assignment::new().assign(puzzle.slots()[0], "AT".into());

        assert_eq!(
            None,
            MinimumRemainingValuesHeuristic.select_slot(&puzzle, &domains, &assignment)
        );
    }
}
