//! Gallery configuration
//!
//! Every option is enumerated and defaulted here. A configuration is validated
//! once, when a controller is built from it, and never consulted ad hoc.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GalleryError, Result};
use crate::gesture::PointerSample;

/// Axis along which items are laid out and gestures are read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Items side by side, gestures read the X coordinate
    #[default]
    Horizontal,
    /// Items stacked, gestures read the Y coordinate
    Vertical,
}

impl Orientation {
    /// Coordinate of `sample` along this axis
    pub fn coordinate(self, sample: PointerSample) -> f32 {
        match self {
            Orientation::Horizontal => sample.x,
            Orientation::Vertical => sample.y,
        }
    }
}

/// Size of the collection and how much of it is shown at once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSpec {
    total_count: usize,
    max_visible: usize,
}

impl CollectionSpec {
    /// Create a collection spec, rejecting `max_visible == 0`
    pub fn new(total_count: usize, max_visible: usize) -> Result<Self> {
        if max_visible == 0 {
            return Err(GalleryError::InvalidConfig(
                "max_visible must be at least 1".to_string(),
            ));
        }
        Ok(Self { total_count, max_visible })
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// Number of items actually displayed
    pub fn visible_count(&self) -> usize {
        self.max_visible.min(self.total_count)
    }

    /// Same `max_visible`, different number of items
    pub fn with_total_count(self, total_count: usize) -> Self {
        Self { total_count, ..self }
    }
}

/// Configuration for a gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Maximum number of items shown at once
    pub max_visible: usize,

    /// Layout and gesture axis
    pub orientation: Orientation,

    /// Expose a continuous drag offset while a gesture is in progress
    pub buffer: bool,

    /// Minimum drag distance (in pointer units) that counts as a swipe
    pub min_swipe_distance: f32,

    /// Never show the previous/next controls
    pub hide_controls: bool,

    /// Hide the controls when the collection cannot fill the window
    pub hide_controls_when_small: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            max_visible: 1,
            orientation: Orientation::Horizontal,
            buffer: false,
            min_swipe_distance: 50.0,
            hide_controls: false,
            hide_controls_when_small: true,
        }
    }
}

impl GalleryConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GalleryConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Reject values that would violate the engine's contracts
    pub fn validate(&self) -> Result<()> {
        if self.max_visible == 0 {
            return Err(GalleryError::InvalidConfig(
                "max_visible must be at least 1".to_string(),
            ));
        }
        if !self.min_swipe_distance.is_finite() || self.min_swipe_distance <= 0.0 {
            return Err(GalleryError::InvalidConfig(format!(
                "min_swipe_distance must be a positive number, got {}",
                self.min_swipe_distance
            )));
        }
        Ok(())
    }

    /// Collection spec for `total_count` items under this configuration
    pub fn collection(&self, total_count: usize) -> Result<CollectionSpec> {
        CollectionSpec::new(total_count, self.max_visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GalleryConfig::default();
        assert_eq!(config.max_visible, 1);
        assert_eq!(config.orientation, Orientation::Horizontal);
        assert!(!config.buffer);
        assert!(!config.hide_controls);
        assert!(config.hide_controls_when_small);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GalleryConfig::from_json_str(
            r#"{ "max_visible": 3, "orientation": "vertical", "buffer": true }"#,
        )
        .unwrap();
        assert_eq!(config.max_visible, 3);
        assert_eq!(config.orientation, Orientation::Vertical);
        assert!(config.buffer);
        assert_eq!(config.min_swipe_distance, 50.0);
    }

    #[test]
    fn test_rejects_zero_max_visible() {
        let result = GalleryConfig::from_json_str(r#"{ "max_visible": 0 }"#);
        assert!(matches!(result, Err(GalleryError::InvalidConfig(_))));
        assert!(CollectionSpec::new(5, 0).is_err());
    }

    #[test]
    fn test_rejects_bad_swipe_distance() {
        let mut config = GalleryConfig::default();
        config.min_swipe_distance = 0.0;
        assert!(config.validate().is_err());
        config.min_swipe_distance = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let result = GalleryConfig::from_json_str("{ max_visible: ");
        assert!(matches!(result, Err(GalleryError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = GalleryConfig::load("/nonexistent/gallery.json");
        assert!(matches!(result, Err(GalleryError::Io(_))));
    }

    #[test]
    fn test_visible_count_is_bounded_by_total() {
        assert_eq!(CollectionSpec::new(5, 3).unwrap().visible_count(), 3);
        assert_eq!(CollectionSpec::new(1, 3).unwrap().visible_count(), 1);
        assert_eq!(CollectionSpec::new(0, 3).unwrap().visible_count(), 0);
    }

    #[test]
    fn test_orientation_reads_axis() {
        let sample = PointerSample::new(10.0, 20.0);
        assert_eq!(Orientation::Horizontal.coordinate(sample), 10.0);
        assert_eq!(Orientation::Vertical.coordinate(sample), 20.0);
    }
}
