//! Bounded record of recent transitions, fed as a position subscriber

use std::collections::VecDeque;

use parking_lot::Mutex;
use sg_core::{PositionSubscriber, VisibilityWindow};

/// One observed transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionEntry {
    pub index: usize,
    pub window: Vec<usize>,
}

/// Keeps the last `capacity` transitions for display
pub struct TransitionLog {
    entries: Mutex<VecDeque<TransitionEntry>>,
    capacity: usize,
}

impl TransitionLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity: capacity.max(1),
        }
    }

    /// Most recent transition
    pub fn latest(&self) -> Option<TransitionEntry> {
        self.entries.lock().back().cloned()
    }

    /// All retained transitions, oldest first
    pub fn entries(&self) -> Vec<TransitionEntry> {
        self.entries.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Default for TransitionLog {
    fn default() -> Self {
        Self::new(16)
    }
}

impl PositionSubscriber for TransitionLog {
    fn on_position_change(&self, index: usize, window: &VisibilityWindow) {
        let mut entries = self.entries.lock();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(TransitionEntry {
            index,
            window: window.to_vec(),
        });
    }
}
