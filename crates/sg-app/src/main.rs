//! Main application entry point

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use eframe::egui::{self, Align2, Color32, FontId, Rounding};
use tracing::{error, info};

use sg_core::{GalleryConfig, PositionController};
use sg_ui::{GalleryView, GalleryViewConfig, Theme, TransitionLog};

mod settings_panel;

use settings_panel::SettingsPanel;

const DEFAULT_ITEM_COUNT: usize = 5;

/// Command line arguments: `swipe-gallery [config.json] [item_count]`
#[derive(Debug, Default)]
struct Args {
    config_path: Option<PathBuf>,
    item_count: Option<usize>,
}

impl Args {
    fn parse(args: impl Iterator<Item = String>) -> Self {
        let mut parsed = Args::default();
        for arg in args {
            if let Ok(count) = arg.parse::<usize>() {
                parsed.item_count = Some(count);
            } else {
                parsed.config_path = Some(PathBuf::from(arg));
            }
        }
        parsed
    }

    fn load_config(&self) -> Result<GalleryConfig> {
        match &self.config_path {
            Some(path) => GalleryConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display())),
            None => Ok(GalleryConfig {
                max_visible: 3,
                ..GalleryConfig::default()
            }),
        }
    }
}

/// Build a gallery view wired to the transition log
fn build_gallery(config: GalleryConfig, item_count: usize, log: &Arc<TransitionLog>) -> Result<GalleryView> {
    let mut controller = PositionController::new(config, item_count)?.with_on_change(|index, window| {
        info!("Moved to item {} showing {:?}", index, window.indices());
    });
    controller.add_subscriber(log.clone());

    Ok(GalleryView::new("swipe_gallery", controller).with_config(GalleryViewConfig::default()))
}

/// Main application state
struct SwipeGalleryApp {
    /// The gallery being shown
    gallery: GalleryView,

    /// Recent transitions, fed by the gallery's controller
    log: Arc<TransitionLog>,

    /// Side panel with the pending configuration
    settings: SettingsPanel,

    /// Current theme
    theme: Theme,
}

impl SwipeGalleryApp {
    fn new(cc: &eframe::CreationContext<'_>, config: GalleryConfig, item_count: usize) -> Result<Self> {
        let theme = Theme::default();
        sg_ui::apply_theme(&cc.egui_ctx, &theme);

        let log = Arc::new(TransitionLog::default());
        let gallery = build_gallery(config.clone(), item_count, &log)?;

        Ok(Self {
            gallery,
            log,
            settings: SettingsPanel::new(config, item_count),
            theme,
        })
    }

    /// Rebuild the gallery from the pending settings
    fn rebuild(&mut self) {
        let config = self.settings.config().clone();
        match build_gallery(config, self.settings.item_count(), &self.log) {
            Ok(gallery) => {
                info!("Rebuilt gallery with {:?}", self.settings.config());
                self.gallery = gallery;
                self.log.clear();
                self.settings.clear_error();
            }
            Err(e) => {
                error!("Failed to rebuild gallery: {}", e);
                self.settings.set_error(e.to_string());
            }
        }
    }

    fn show_status_bar(&self, ui: &mut egui::Ui) {
        let controller = self.gallery.controller();
        ui.horizontal(|ui| {
            match controller.current_index() {
                Some(index) => ui.label(
                    egui::RichText::new(format!(
                        "Item {} of {}",
                        index + 1,
                        controller.collection().total_count()
                    ))
                    .strong(),
                ),
                None => ui.label(egui::RichText::new("Empty collection").strong()),
            };

            ui.separator();
            ui.label(format!("Window: {:?}", controller.visibility_window().indices()));

            if let Some(offset) = controller.drag_offset() {
                ui.separator();
                ui.label(format!("Drag offset: {:.0}", offset));
            }

            if let Some(latest) = self.log.latest() {
                ui.separator();
                ui.label(format!("Last transition: {} {:?}", latest.index, latest.window));
            }
        });
    }
}

impl eframe::App for SwipeGalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.gallery.handle_keys(ctx);

        egui::SidePanel::left("settings_panel")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                let action = self.settings.ui(ui);
                if let Some(count) = action.item_count_changed {
                    info!("Item count changed to {}", count);
                    self.gallery.controller_mut().set_total_count(count);
                }
                if action.apply {
                    self.rebuild();
                }
            });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.show_status_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let theme = &self.theme;
            self.gallery.ui(ui, |ui, rect, index| {
                let painter = ui.painter();
                painter.rect_filled(rect, Rounding::same(8.0), theme.item_color(index));
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    index.to_string(),
                    FontId::proportional(32.0),
                    Color32::WHITE,
                );
            });
        });
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse(std::env::args().skip(1));
    let config = args.load_config()?;
    let item_count = args.item_count.unwrap_or(DEFAULT_ITEM_COUNT);

    info!("Starting swipe gallery with {} items", item_count);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 480.0])
            .with_min_inner_size([480.0, 320.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    // Fail before opening a window if the configuration is unusable
    config.validate()?;

    eframe::run_native(
        "Swipe Gallery",
        options,
        Box::new(move |cc| {
            let app: Box<dyn eframe::App> = match SwipeGalleryApp::new(cc, config, item_count) {
                Ok(app) => Box::new(app),
                Err(e) => {
                    error!("Failed to create gallery: {}", e);
                    Box::new(FailedApp { message: e.to_string() })
                }
            };
            app
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}

/// Shown when the gallery could not be created
struct FailedApp {
    message: String,
}

impl eframe::App for FailedApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.colored_label(Color32::from_rgb(230, 80, 80), &self.message);
        });
    }
}
