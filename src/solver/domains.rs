use im::{OrdMap, OrdSet};

use crate::puzzle::{Puzzle, Slot};
use crate::wordlist::{Word, WordList};

/// The mutable solver state: each slot's current set of candidate words.
///
/// Domains are seeded with the full dictionary and only ever shrink.
/// Backed by persistent ordered collections: a snapshot taken before a
/// speculative narrowing is a cheap structural-sharing clone, and iteration
/// order is deterministic across runs.
#[derive(Debug, Clone)]
pub struct DomainStore {
    domains: OrdMap<Slot, OrdSet<Word>>,
}

impl DomainStore {
    /// Seeds every slot of the puzzle with the full dictionary.
    pub fn new(puzzle: &Puzzle, words: &WordList) -> DomainStore {
        let mut domains = OrdMap::new();
        for &slot in puzzle.slots() {
            domains.insert(slot, words.words().clone());
        }
        DomainStore { domains }
    }

    pub fn get(&self, slot: &Slot) -> Option<&OrdSet<Word>> {
        self.domains.get(slot)
    }

    /// Current candidates for `slot`, in sorted order. Slots the store does
    /// not know about have an empty domain.
    pub fn words_of<'a>(&'a self, slot: &Slot) -> impl Iterator<Item = &'a Word> {
        self.domains.get(slot).into_iter().flat_map(OrdSet::iter)
    }

    pub fn size_of(&self, slot: &Slot) -> usize {
        self.domains.get(slot).map_or(0, OrdSet::len)
    }

    /// Replaces the domain of `slot` wholesale. Used by the revision step,
    /// which builds the filtered set before committing it.
    pub fn replace(&mut self, slot: Slot, words: OrdSet<Word>) {
        self.domains.insert(slot, words);
    }

    /// Narrows `slot` to the single candidate `word`, for speculative
    /// propagation of a tentative assignment.
    pub fn narrow(&mut self, slot: Slot, word: &Word) {
        self.domains.insert(slot, OrdSet::unit(word.clone()));
    }

    /// Node consistency: removes from every slot's domain the words whose
    /// length differs from the slot's. Idempotent.
    pub fn enforce_node_consistency(&mut self) {
        let slots: Vec<Slot> = self.domains.keys().copied().collect();
        for slot in slots {
            let domain = &self.domains[&slot];
            if domain.iter().any(|word| word.len() != slot.length) {
                let kept: OrdSet<Word> = domain
                    .iter()
                    .filter(|word| word.len() == slot.length)
                    .cloned()
                    .collect();
                self.domains.insert(slot, kept);
            }
        }
    }

    /// Total candidate count across all slots. Only ever decreases over the
    /// lifetime of a solve.
    pub fn total_candidates(&self) -> usize {
        self.domains.values().map(OrdSet::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Slot, &OrdSet<Word>)> {
        self.domains.iter()
    }
}
