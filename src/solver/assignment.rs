use std::collections::HashSet;

use im::OrdMap;

use crate::puzzle::{Puzzle, Slot};
use crate::wordlist::Word;

/// A partial or complete mapping from slots to words.
///
/// Assignments are persistent: [`Assignment::assign`] returns a new value
/// sharing structure with the old one, so each branch of the search extends
/// its own assignment without disturbing siblings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    entries: OrdMap<Slot, Word>,
}

impl Assignment {
    pub fn new() -> Assignment {
        Assignment::default()
    }

    /// Returns a copy of this assignment with `slot` mapped to `word`.
    pub fn assign(&self, slot: Slot, word: Word) -> Assignment {
        Assignment {
            entries: self.entries.update(slot, word),
        }
    }

    pub fn get(&self, slot: &Slot) -> Option<&Word> {
        self.entries.get(slot)
    }

    pub fn contains(&self, slot: &Slot) -> bool {
        self.entries.contains_key(slot)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Assigned `(slot, word)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&Slot, &Word)> {
        self.entries.iter()
    }

    /// Whether every slot of the puzzle has a word.
    pub fn is_complete(&self, puzzle: &Puzzle) -> bool {
        self.entries.len() == puzzle.slot_count()
    }

    /// The consistency check applied to every tentative extension during
    /// search: assigned words fit their slots, no word is used twice, and
    /// every pair of assigned crossing slots agrees on the shared letter.
    ///
    /// Total over any input; the empty assignment is trivially consistent.
    pub fn is_consistent(&self, puzzle: &Puzzle) -> bool {
        let mut used: HashSet<&Word> = HashSet::new();
        for (slot, word) in self.entries.iter() {
            if word.len() != slot.length {
                return false;
            }
            if !used.insert(word) {
                return false;
            }
        }

        let assigned: Vec<(&Slot, &Word)> = self.entries.iter().collect();
        for (i, &(a, word_a)) in assigned.iter().enumerate() {
            for &(b, word_b) in &assigned[i + 1..] {
                if let Some((ia, ib)) = puzzle.overlap(a, b) {
                    if word_a.as_bytes()[ia] != word_b.as_bytes()[ib] {
                        return false;
                    }
                }
            }
        }

        true
    }
}
