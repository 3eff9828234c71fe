//! User interface components for the swipe gallery
//!
//! This crate renders a [`sg_core::PositionController`] with egui and turns
//! egui pointer input into gesture samples.

pub mod gallery_view;
pub mod layout;
pub mod theme;
pub mod transition_log;

/// Re-export commonly used types
pub use gallery_view::{GalleryView, GalleryViewConfig};
pub use layout::{slot_positions, slot_rect};
pub use theme::{Theme, apply_theme};
pub use transition_log::{TransitionEntry, TransitionLog};

// Common icon definitions
pub mod icons {
    pub const PREVIOUS_HORIZONTAL: &str = "◀";
    pub const NEXT_HORIZONTAL: &str = "▶";
    pub const PREVIOUS_VERTICAL: &str = "▲";
    pub const NEXT_VERTICAL: &str = "▼";
}
