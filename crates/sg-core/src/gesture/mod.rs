//! Drag/swipe gesture handling
//!
//! A gesture is a stream of pointer samples tagged Start, Move* and End. The
//! [`GestureInterpreter`] turns that stream into at most one discrete
//! [`Direction`]; the [`BufferTracker`] follows the same stream to expose a
//! continuous drag offset for visual feedback.

use serde::{Deserialize, Serialize};

mod buffer;
mod interpreter;

pub use buffer::BufferTracker;
pub use interpreter::{GestureInterpreter, GestureSession};

/// A pointer/touch coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Position of a sample within a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Start,
    Move,
    End,
}

/// Discrete transition direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Advance to the next item
    Forward,
    /// Retreat to the previous item
    Backward,
}

/// Decision emitted when a gesture ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    Transition(Direction),
    /// Drag too short to count (a tap or jitter)
    NoTransition,
}

impl GestureOutcome {
    pub fn direction(self) -> Option<Direction> {
        match self {
            GestureOutcome::Transition(direction) => Some(direction),
            GestureOutcome::NoTransition => None,
        }
    }
}
