//! Current position within the circular collection

mod controller;
mod subscriber;

pub use controller::{ChangeCallback, PositionController};
pub use subscriber::PositionSubscriber;

/// Current index, kept valid for the collection it belongs to
///
/// `None` while the collection is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PositionState {
    current_index: Option<usize>,
}

impl PositionState {
    /// Initial state for a collection of `total` items
    pub fn for_collection(total: usize) -> Self {
        Self {
            current_index: (total > 0).then_some(0),
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub(crate) fn set(&mut self, index: usize) {
        self.current_index = Some(index);
    }

    /// Bring the index back into range after the collection size changed
    pub fn rewrap(&mut self, total: usize) {
        self.current_index = if total == 0 {
            None
        } else {
            Some(self.current_index.map_or(0, |index| index % total))
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert_eq!(PositionState::for_collection(5).current_index(), Some(0));
        assert_eq!(PositionState::for_collection(0).current_index(), None);
    }

    #[test]
    fn test_rewrap() {
        let mut state = PositionState::for_collection(10);
        state.set(7);
        state.rewrap(5);
        assert_eq!(state.current_index(), Some(2));
        state.rewrap(0);
        assert_eq!(state.current_index(), None);
        state.rewrap(3);
        assert_eq!(state.current_index(), Some(0));
    }
}
