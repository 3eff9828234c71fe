//! Gallery theme

use egui::{Color32, Context, Rounding, Stroke, Visuals};

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub dark_mode: bool,
    pub accent: Color32,
    /// Item colors, cycled by item index
    pub palette: Vec<Color32>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            dark_mode: true,
            accent: Color32::from_rgb(100, 150, 250),
            palette: vec![
                Color32::from_rgb(76, 175, 80),
                Color32::from_rgb(100, 150, 250),
                Color32::from_rgb(230, 180, 80),
                Color32::from_rgb(220, 80, 80),
                Color32::from_rgb(150, 110, 220),
                Color32::from_rgb(80, 200, 200),
            ],
        }
    }
}

impl Theme {
    /// Fill color for the item at `index`
    pub fn item_color(&self, index: usize) -> Color32 {
        if self.palette.is_empty() {
            return self.accent;
        }
        self.palette[index % self.palette.len()]
    }
}

/// Apply the application theme
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut visuals = if theme.dark_mode { Visuals::dark() } else { Visuals::light() };

    if theme.dark_mode {
        let panel_bg = Color32::from_rgb(31, 31, 31);
        let widget_bg = Color32::from_rgb(40, 40, 40);
        let text_color = Color32::from_rgb(220, 220, 220);

        visuals.window_fill = panel_bg;
        visuals.panel_fill = panel_bg;
        visuals.extreme_bg_color = Color32::from_rgb(23, 23, 23);

        visuals.widgets.inactive.bg_fill = widget_bg;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
        visuals.widgets.hovered.bg_fill = Color32::from_rgb(50, 50, 50);
        visuals.widgets.active.bg_fill = Color32::from_rgb(60, 60, 60);
    }

    visuals.widgets.inactive.rounding = Rounding::same(4.0);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);
    visuals.widgets.active.rounding = Rounding::same(4.0);
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, theme.accent);
    visuals.selection.bg_fill = theme.accent.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, theme.accent);
    visuals.hyperlink_color = theme.accent;

    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_color_cycles() {
        let theme = Theme::default();
        let n = theme.palette.len();
        assert_eq!(theme.item_color(0), theme.item_color(n));
        assert_ne!(theme.item_color(0), theme.item_color(1));
    }

    #[test]
    fn test_empty_palette_uses_accent() {
        let theme = Theme {
            palette: Vec::new(),
            ..Theme::default()
        };
        assert_eq!(theme.item_color(3), theme.accent);
    }
}
