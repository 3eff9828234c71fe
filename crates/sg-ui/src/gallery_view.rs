//! Gallery widget: lays out the render plan and feeds pointer drags to the
//! position controller

use std::hash::Hash;

use egui::{Align, Align2, Color32, Context, FontId, Id, Key, Layout, Pos2, Rect, Response, Rounding, Sense, Ui, Vec2};
use sg_core::{GesturePhase, Orientation, PointerSample, PositionController};

use crate::icons;
use crate::layout::{slot_positions, slot_rect};

/// Gallery view configuration
#[derive(Debug, Clone)]
pub struct GalleryViewConfig {
    /// Size across the orientation axis (height when horizontal)
    pub cross_extent: f32,

    /// Size along the orientation axis; fills the available space when `None`
    pub main_extent: Option<f32>,

    /// Side length of the previous/next buttons
    pub control_size: f32,

    /// Gap between neighboring items
    pub item_spacing: f32,

    /// Viewport background
    pub background: Color32,
}

impl Default for GalleryViewConfig {
    fn default() -> Self {
        Self {
            cross_extent: 180.0,
            main_extent: None,
            control_size: 32.0,
            item_spacing: 8.0,
            background: Color32::from_rgb(23, 23, 23),
        }
    }
}

/// Gallery widget
pub struct GalleryView {
    id: Id,
    controller: PositionController,
    config: GalleryViewConfig,
}

impl GalleryView {
    /// Create a new gallery view around `controller`
    pub fn new(id_source: impl Hash, controller: PositionController) -> Self {
        Self {
            id: Id::new(id_source),
            controller,
            config: GalleryViewConfig::default(),
        }
    }

    /// Set configuration
    pub fn with_config(mut self, config: GalleryViewConfig) -> Self {
        self.config = config;
        self
    }

    pub fn controller(&self) -> &PositionController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PositionController {
        &mut self.controller
    }

    /// Map arrow keys to previous/next along the gallery's axis
    pub fn handle_keys(&mut self, ctx: &Context) {
        let (previous, next) = match self.controller.orientation() {
            Orientation::Horizontal => (Key::ArrowLeft, Key::ArrowRight),
            Orientation::Vertical => (Key::ArrowUp, Key::ArrowDown),
        };
        let (go_previous, go_next) = ctx.input(|i| (i.key_pressed(previous), i.key_pressed(next)));
        if go_previous {
            self.controller.go_backward();
        }
        if go_next {
            self.controller.go_forward();
        }
    }

    /// Show the gallery; `paint_item` draws the item with the given index
    /// into the given rect
    pub fn ui(&mut self, ui: &mut Ui, mut paint_item: impl FnMut(&mut Ui, Rect, usize)) -> Response {
        let orientation = self.controller.orientation();
        let show_controls = self.controller.controls_visible();
        let layout = match orientation {
            Orientation::Horizontal => Layout::left_to_right(Align::Center),
            Orientation::Vertical => Layout::top_down(Align::Center),
        };

        ui.with_layout(layout, |ui| {
            if show_controls && self.control_button(ui, false).clicked() {
                self.controller.go_backward();
            }

            let size = self.viewport_size(ui, show_controls);
            let (viewport, response) = ui.allocate_exact_size(size, Sense::drag());
            self.handle_drag(ui, &response);
            self.paint_slots(ui, viewport, &mut paint_item);

            if show_controls && self.control_button(ui, true).clicked() {
                self.controller.go_forward();
            }

            if self.controller.is_dragging() {
                ui.ctx().request_repaint();
            }
            response
        })
        .inner
    }

    /// Called after the previous button is placed, so only the next button
    /// still needs room
    fn viewport_size(&self, ui: &Ui, show_controls: bool) -> Vec2 {
        let spacing = ui.spacing().item_spacing;
        let reserve = |gap: f32| if show_controls { self.config.control_size + gap } else { 0.0 };
        match self.controller.orientation() {
            Orientation::Horizontal => {
                let width = self
                    .config
                    .main_extent
                    .unwrap_or_else(|| ui.available_width() - reserve(spacing.x));
                Vec2::new(width.max(0.0), self.config.cross_extent)
            }
            Orientation::Vertical => {
                let height = self
                    .config
                    .main_extent
                    .unwrap_or_else(|| ui.available_height() - reserve(spacing.y));
                Vec2::new(self.config.cross_extent, height.max(0.0))
            }
        }
    }

    fn control_button(&self, ui: &mut Ui, next: bool) -> Response {
        let icon = match (self.controller.orientation(), next) {
            (Orientation::Horizontal, false) => icons::PREVIOUS_HORIZONTAL,
            (Orientation::Horizontal, true) => icons::NEXT_HORIZONTAL,
            (Orientation::Vertical, false) => icons::PREVIOUS_VERTICAL,
            (Orientation::Vertical, true) => icons::NEXT_VERTICAL,
        };
        let hover_text = if next { "Next" } else { "Previous" };
        let size = self.config.control_size;

        ui.push_id(self.id.with(hover_text), |ui| {
            ui.add_sized(
                [size, size],
                egui::Button::new(egui::RichText::new(icon).size(16.0)).fill(Color32::from_gray(40)),
            )
            .on_hover_text(hover_text)
        })
        .inner
    }

    /// Translate egui drag state into gesture samples
    fn handle_drag(&mut self, ui: &Ui, response: &Response) {
        if response.drag_started() {
            if let Some(pos) = ui.input(|i| i.pointer.press_origin()) {
                self.controller.on_gesture_sample(to_sample(pos), GesturePhase::Start);
            }
        }

        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.controller.on_gesture_sample(to_sample(pos), GesturePhase::Move);
            }
        }

        if response.drag_released() {
            match ui.input(|i| i.pointer.latest_pos()) {
                Some(pos) => {
                    if let Some(index) = self.controller.on_gesture_sample(to_sample(pos), GesturePhase::End) {
                        tracing::debug!("Swiped to item {}", index);
                    }
                }
                None => {
                    self.controller.cancel_gesture();
                }
            }
        }
    }

    fn paint_slots(&self, ui: &mut Ui, viewport: Rect, paint_item: &mut impl FnMut(&mut Ui, Rect, usize)) {
        ui.painter_at(viewport)
            .rect_filled(viewport, Rounding::same(4.0), self.config.background);

        let plan = self.controller.render_plan();
        if plan.is_empty() {
            ui.painter_at(viewport).text(
                viewport.center(),
                Align2::CENTER_CENTER,
                "No items",
                FontId::proportional(14.0),
                Color32::from_gray(160),
            );
            return;
        }

        let orientation = self.controller.orientation();
        let offset = self.controller.drag_offset().unwrap_or(0.0);
        let visible_len = plan.iter().filter(|slot| slot.visible).count();

        for (position, slot) in slot_positions(&plan) {
            let rect = slot_rect(
                viewport,
                orientation,
                position,
                visible_len,
                offset,
                self.config.item_spacing,
            );
            if !rect.intersects(viewport) {
                continue;
            }
            let mut child = ui.child_ui(rect, Layout::top_down(Align::Center));
            child.set_clip_rect(viewport.intersect(ui.clip_rect()));
            paint_item(&mut child, rect, slot.index);
        }
    }
}

fn to_sample(pos: Pos2) -> PointerSample {
    PointerSample::new(pos.x, pos.y)
}
