//! Position subscriber trait

use crate::window::VisibilityWindow;

/// Trait for components that need to respond to position changes
pub trait PositionSubscriber: Send + Sync {
    /// Called once per discrete transition with the new index and window
    fn on_position_change(&self, index: usize, window: &VisibilityWindow);
}
