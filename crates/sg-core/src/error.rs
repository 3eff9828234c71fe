//! Error types for the gallery engine

use thiserror::Error;

use crate::gesture::GesturePhase;

/// Errors that can occur inside the gallery engine
///
/// `DegenerateCollection` and `MalformedGestureSequence` never leave the
/// [`PositionController`](crate::PositionController): it absorbs them as
/// no-ops. The remaining variants come from configuration loading.
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("operation requires a non-empty collection")]
    DegenerateCollection,

    #[error("{phase:?} sample received with no open gesture session")]
    MalformedGestureSequence { phase: GesturePhase },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
