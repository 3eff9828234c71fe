//! Core functionality for the swipe gallery
//!
//! This crate provides the position/gesture engine: circular index arithmetic,
//! the visibility window, the drag gesture state machine, the buffer-mode drag
//! offset and the controller that composes them. It knows nothing about
//! rendering; a renderer drives it through plain function calls.

pub mod circular;
pub mod config;
pub mod error;
pub mod gesture;
pub mod position;
pub mod window;

// Re-export commonly used types
pub use config::{CollectionSpec, GalleryConfig, Orientation};
pub use error::{GalleryError, Result};
pub use gesture::{
    BufferTracker, Direction, GestureInterpreter, GestureOutcome, GesturePhase,
    GestureSession, PointerSample,
};
pub use position::{PositionController, PositionState, PositionSubscriber};
pub use window::{RenderSlot, VisibilityWindow};
