use std::collections::HashSet;
use std::time::Instant;

use im::OrdSet;
use tracing::debug;

use crate::puzzle::{Puzzle, Slot};
use crate::solver::{
    assignment::Assignment,
    domains::DomainStore,
    heuristics::{
        value::{LeastConstrainingValueHeuristic, ValueOrderingHeuristic},
        variable::{MinimumRemainingValuesHeuristic, SlotSelectionHeuristic},
    },
    stats::SearchStats,
    work_list::WorkList,
};
use crate::wordlist::{Word, WordList};

/// The engine that fills a crossword grid.
///
/// A solve runs the pipeline: seed every slot's domain with the dictionary,
/// enforce node consistency, propagate overlap constraints to a fixpoint
/// with AC-3, then backtrack over the filtered domains. Slot selection and
/// value ordering are pluggable; the defaults are minimum-remaining-values
/// and least-constraining-value.
///
/// "No solution" is an expected outcome, not an error: [`SolverEngine::solve`]
/// reports it as `None` alongside the statistics of the attempt.
pub struct SolverEngine {
    slot_heuristic: Box<dyn SlotSelectionHeuristic>,
    value_heuristic: Box<dyn ValueOrderingHeuristic>,
    propagate_during_search: bool,
}

impl SolverEngine {
    pub fn new(
        slot_heuristic: Box<dyn SlotSelectionHeuristic>,
        value_heuristic: Box<dyn ValueOrderingHeuristic>,
    ) -> Self {
        Self {
            slot_heuristic,
            value_heuristic,
            propagate_during_search: false,
        }
    }

    /// Also maintain arc consistency while searching: after each tentative
    /// assignment the slot's neighbors are re-propagated on a snapshot of
    /// the domains, and the branch is abandoned when a domain empties.
    pub fn with_search_propagation(mut self, enabled: bool) -> Self {
        self.propagate_during_search = enabled;
        self
    }

    /// Attempts to fill every slot of `puzzle` with a word from `words`.
    ///
    /// Returns the first complete consistent assignment found, or `None`
    /// when the search space is exhausted, along with the counters
    /// accumulated along the way. Given the same puzzle and word list,
    /// repeated solves return the same assignment.
    pub fn solve(&self, puzzle: &Puzzle, words: &WordList) -> (Option<Assignment>, SearchStats) {
        let mut stats = SearchStats::default();

        let mut domains = DomainStore::new(puzzle, words);
        domains.enforce_node_consistency();
        debug!(
            candidates = domains.total_candidates(),
            "domains after node consistency"
        );

        if !self.ac3(puzzle, &mut domains, None, &mut stats) {
            return (None, stats);
        }
        debug!(
            candidates = domains.total_candidates(),
            "domains after propagation"
        );

        let solution = self.backtrack(puzzle, &domains, Assignment::new(), &mut stats);
        (solution, stats)
    }

    /// Propagates overlap constraints to a fixpoint with AC-3.
    ///
    /// When `initial_arcs` is `None` the queue starts with every ordered
    /// neighbor pair of the puzzle; callers re-establishing consistency
    /// after narrowing a single slot pass just the arcs pointing at it.
    /// Whenever a revision prunes a slot, every arc into that slot (except
    /// from the partner just revised against) is re-enqueued; without that,
    /// pruning would not propagate transitively and the filter would be
    /// unsound.
    ///
    /// Returns `false` as soon as some domain is emptied, `true` when the
    /// queue drains. Expects node-consistent domains.
    pub fn ac3(
        &self,
        puzzle: &Puzzle,
        domains: &mut DomainStore,
        initial_arcs: Option<Vec<(Slot, Slot)>>,
        stats: &mut SearchStats,
    ) -> bool {
        let mut worklist = WorkList::new();
        match initial_arcs {
            Some(arcs) => {
                for (x, y) in arcs {
                    worklist.push_back(x, y);
                }
            }
            None => {
                for &x in puzzle.slots() {
                    for &y in puzzle.neighbors(&x) {
                        worklist.push_back(x, y);
                    }
                }
            }
        }

        while let Some((x, y)) = worklist.pop_front() {
            if self.revise(puzzle, domains, x, y, stats) {
                if domains.size_of(&x) == 0 {
                    debug!(slot = %x, "domain wiped out during propagation");
                    return false;
                }
                for &z in puzzle.neighbors(&x) {
                    if z != y {
                        worklist.push_back(z, x);
                    }
                }
            }
        }

        true
    }

    /// Makes `x` arc-consistent with `y`: removes from `x`'s domain every
    /// word whose letter at the shared cell matches no word left in `y`'s
    /// domain. Returns whether anything was removed.
    fn revise(
        &self,
        puzzle: &Puzzle,
        domains: &mut DomainStore,
        x: Slot,
        y: Slot,
        stats: &mut SearchStats,
    ) -> bool {
        let Some((ix, iy)) = puzzle.overlap(&x, &y) else {
            return false;
        };

        let started = Instant::now();
        stats.revise_calls += 1;

        let supported: HashSet<u8> = domains
            .words_of(&y)
            .map(|word| word.as_bytes()[iy])
            .collect();

        let before = domains.size_of(&x);
        let kept: OrdSet<Word> = domains
            .words_of(&x)
            .filter(|word| supported.contains(&word.as_bytes()[ix]))
            .cloned()
            .collect();
        let pruned = before - kept.len();

        if pruned > 0 {
            stats.words_pruned += pruned as u64;
            domains.replace(x, kept);
        }

        stats.revise_time_micros += started.elapsed().as_micros() as u64;
        pruned > 0
    }

    /// Depth-first extension of `assignment`, one slot per level. The first
    /// complete assignment found is propagated straight up; an exhausted
    /// branch returns `None` and the caller moves on to its next candidate.
    fn backtrack(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: Assignment,
        stats: &mut SearchStats,
    ) -> Option<Assignment> {
        if assignment.len() == puzzle.slot_count() {
            return Some(assignment);
        }

        stats.nodes_visited += 1;
        let slot = self
            .slot_heuristic
            .select_slot(puzzle, domains, &assignment)?;

        for word in self
            .value_heuristic
            .order_values(&slot, puzzle, domains, &assignment)
        {
            let candidate = assignment.assign(slot, word.clone());
            if !candidate.is_consistent(puzzle) {
                stats.backtracks += 1;
                continue;
            }

            if self.propagate_during_search {
                let mut snapshot = domains.clone();
                snapshot.narrow(slot, &word);
                let arcs: Vec<(Slot, Slot)> = puzzle
                    .neighbors(&slot)
                    .iter()
                    .filter(|neighbor| !candidate.contains(neighbor))
                    .map(|&neighbor| (neighbor, slot))
                    .collect();
                if !self.ac3(puzzle, &mut snapshot, Some(arcs), stats) {
                    stats.backtracks += 1;
                    continue;
                }
                if let Some(found) = self.backtrack(puzzle, &snapshot, candidate, stats) {
                    return Some(found);
                }
            } else if let Some(found) = self.backtrack(puzzle, domains, candidate, stats) {
                return Some(found);
            }

            stats.backtracks += 1;
        }

        None
    }
}

impl Default for SolverEngine {
    fn default() -> Self {
        Self::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
        )
    }
}
