//! Continuous drag offset for buffer mode

/// Drag offset a renderer applies to visible items while a gesture is active
///
/// The offset is the raw signed delta from the gesture origin, with the same
/// sign convention as the interpreter. It is neutral (`0.0`) outside a gesture.
/// A disabled tracker never exposes an offset at all.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferTracker {
    enabled: bool,
    offset: f32,
}

impl BufferTracker {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, offset: 0.0 }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Follow the latest gesture delta
    pub fn track(&mut self, delta: f32) {
        if self.enabled {
            self.offset = delta;
        }
    }

    /// Snap back to neutral
    pub fn reset(&mut self) {
        self.offset = 0.0;
    }

    /// Current offset, or `None` when buffer mode is off
    pub fn offset(&self) -> Option<f32> {
        self.enabled.then_some(self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_and_resets() {
        let mut tracker = BufferTracker::new(true);
        assert_eq!(tracker.offset(), Some(0.0));
        tracker.track(-50.0);
        assert_eq!(tracker.offset(), Some(-50.0));
        tracker.track(-1250.5);
        assert_eq!(tracker.offset(), Some(-1250.5));
        tracker.reset();
        assert_eq!(tracker.offset(), Some(0.0));
    }

    #[test]
    fn test_disabled_is_inert() {
        let mut tracker = BufferTracker::new(false);
        tracker.track(-50.0);
        assert_eq!(tracker.offset(), None);
        assert!(!tracker.is_enabled());
    }
}
