//! Side panel for editing the gallery configuration

use eframe::egui::{self, Color32, Ui};
use sg_core::{GalleryConfig, Orientation};

const MAX_ITEMS: usize = 24;

/// What the user asked for this frame
#[derive(Debug, Default)]
pub struct SettingsAction {
    /// New item count, applied to the running gallery without a rebuild
    pub item_count_changed: Option<usize>,
    /// Rebuild the gallery from the pending configuration
    pub apply: bool,
}

/// Pending configuration edited in the side panel
pub struct SettingsPanel {
    config: GalleryConfig,
    item_count: usize,
    error: Option<String>,
}

impl SettingsPanel {
    pub fn new(config: GalleryConfig, item_count: usize) -> Self {
        Self {
            config,
            item_count,
            error: None,
        }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn ui(&mut self, ui: &mut Ui) -> SettingsAction {
        let mut action = SettingsAction::default();

        ui.heading("Collection");
        let count_response = ui.add(egui::Slider::new(&mut self.item_count, 0..=MAX_ITEMS).text("items"));
        if count_response.changed() {
            action.item_count_changed = Some(self.item_count);
        }

        ui.separator();
        ui.heading("Gallery");

        ui.add(egui::Slider::new(&mut self.config.max_visible, 1..=8).text("max visible"));

        ui.horizontal(|ui| {
            ui.radio_value(&mut self.config.orientation, Orientation::Horizontal, "Horizontal");
            ui.radio_value(&mut self.config.orientation, Orientation::Vertical, "Vertical");
        });

        ui.checkbox(&mut self.config.buffer, "Buffer mode (drag feedback)");
        ui.add(
            egui::Slider::new(&mut self.config.min_swipe_distance, 5.0..=300.0)
                .text("min swipe distance"),
        );
        ui.checkbox(&mut self.config.hide_controls, "Hide controls");
        ui.checkbox(&mut self.config.hide_controls_when_small, "Hide controls when too few items");

        ui.add_space(8.0);
        if ui.button("Apply").clicked() {
            action.apply = true;
        }

        if let Some(error) = &self.error {
            ui.colored_label(Color32::from_rgb(230, 80, 80), error);
        }

        action
    }
}
