use std::collections::{HashSet, VecDeque};

use crate::puzzle::Slot;

/// An arc waiting to be revised: `(x, y)` means "make `x` consistent with
/// `y`" by pruning from `x`'s domain every word without a compatible partner
/// in `y`'s domain.
pub type Arc = (Slot, Slot);

/// The AC-3 work queue: FIFO over arcs, with membership tracking so an arc
/// already waiting is not enqueued twice.
pub struct WorkList {
    queue: VecDeque<Arc>,
    queue_members: HashSet<Arc>,
}

impl WorkList {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queue_members: HashSet::new(),
        }
    }

    pub fn push_back(&mut self, x: Slot, y: Slot) {
        if self.queue_members.insert((x, y)) {
            self.queue.push_back((x, y));
        }
    }

    pub fn pop_front(&mut self) -> Option<Arc> {
        let arc = self.queue.pop_front()?;
        self.queue_members.remove(&arc);
        Some(arc)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

impl Default for WorkList {
    fn default() -> Self {
        Self::new()
    }
}
