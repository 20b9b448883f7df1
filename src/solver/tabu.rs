//! Short-term memory of recently vacated (variable, value) pairs.

use std::collections::VecDeque;

use crate::solver::model::{Timeslot, VariableId};

/// Default number of remembered moves, matching the reference behaviour.
pub const DEFAULT_TABU_CAPACITY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TabuEntry {
    variable: VariableId,
    value: Timeslot,
}

/// A bounded FIFO of forbidden reassignments.
///
/// After a move commits, the vacated `(variable, previous value)` pair is
/// recorded, meaning "do not revert this variable to that value right now."
/// When the list is full the oldest entry is evicted first. Whether a tabu
/// value may still be taken (the aspiration criterion) is decided by value
/// selection, not here.
#[derive(Debug, Clone)]
pub struct TabuList {
    entries: VecDeque<TabuEntry>,
    capacity: usize,
}

impl TabuList {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records a vacated pair, evicting the oldest entry at capacity.
    pub fn record(&mut self, variable: VariableId, value: Timeslot) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(TabuEntry { variable, value });
    }

    /// Exact pair membership.
    pub fn contains(&self, variable: VariableId, value: Timeslot) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.variable == variable && entry.value == value)
    }

    /// Forgets everything; called once at the start of every try.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for TabuList {
    fn default() -> Self {
        Self::new(DEFAULT_TABU_CAPACITY)
    }
}
