//! Slot geometry for the gallery viewport

use egui::{Pos2, Rect, Vec2};
use sg_core::{Orientation, RenderSlot};

/// Pair every slot with its position relative to the first visible slot
///
/// Hidden leading neighbors get negative positions, trailing ones land past
/// the last visible slot.
pub fn slot_positions(plan: &[RenderSlot]) -> Vec<(f32, RenderSlot)> {
    let first_visible = plan.iter().position(|slot| slot.visible).unwrap_or(0);
    plan.iter()
        .enumerate()
        .map(|(i, slot)| (i as f32 - first_visible as f32, *slot))
        .collect()
}

/// Rect for the slot at `position` when `visible_len` slots share `viewport`
///
/// `offset` shifts the slot along the orientation axis (the buffer-mode drag
/// offset); `spacing` is left between neighboring slots.
pub fn slot_rect(
    viewport: Rect,
    orientation: Orientation,
    position: f32,
    visible_len: usize,
    offset: f32,
    spacing: f32,
) -> Rect {
    let count = visible_len.max(1) as f32;
    match orientation {
        Orientation::Horizontal => {
            let extent = viewport.width() / count;
            let left = viewport.left() + position * extent + offset;
            Rect::from_min_size(
                Pos2::new(left + spacing * 0.5, viewport.top()),
                Vec2::new((extent - spacing).max(0.0), viewport.height()),
            )
        }
        Orientation::Vertical => {
            let extent = viewport.height() / count;
            let top = viewport.top() + position * extent + offset;
            Rect::from_min_size(
                Pos2::new(viewport.left(), top + spacing * 0.5),
                Vec2::new(viewport.width(), (extent - spacing).max(0.0)),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::new(300.0, 120.0))
    }

    #[test]
    fn test_horizontal_slots_split_width() {
        let rect = slot_rect(viewport(), Orientation::Horizontal, 1.0, 3, 0.0, 0.0);
        assert_eq!(rect.left(), 200.0);
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 120.0);
    }

    #[test]
    fn test_vertical_slots_split_height() {
        let rect = slot_rect(viewport(), Orientation::Vertical, 2.0, 3, 0.0, 0.0);
        assert_eq!(rect.top(), 130.0);
        assert_eq!(rect.height(), 40.0);
        assert_eq!(rect.width(), 300.0);
    }

    #[test]
    fn test_offset_and_spacing() {
        let rect = slot_rect(viewport(), Orientation::Horizontal, 0.0, 3, -50.0, 10.0);
        assert_eq!(rect.left(), 55.0);
        assert_eq!(rect.width(), 90.0);
    }

    #[test]
    fn test_leading_slot_sits_before_viewport() {
        let rect = slot_rect(viewport(), Orientation::Horizontal, -1.0, 3, 0.0, 0.0);
        assert_eq!(rect.right(), viewport().left());
    }

    #[test]
    fn test_slot_positions_relative_to_first_visible() {
        let plan = vec![
            RenderSlot { index: 4, visible: false },
            RenderSlot { index: 0, visible: true },
            RenderSlot { index: 1, visible: true },
            RenderSlot { index: 2, visible: false },
        ];
        let positions: Vec<f32> = slot_positions(&plan).iter().map(|(p, _)| *p).collect();
        assert_eq!(positions, vec![-1.0, 0.0, 1.0, 2.0]);
    }
}
