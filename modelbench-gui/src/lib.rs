//! egui backend for modelbench: renders an [`InteractiveWindow`] as a
//! desktop app and feeds widget change events back into it.
//!
//! Layout: the plot area on top, the tab bar with the active model's
//! control grid below it.

use eframe::egui;
use modelbench_core::{InteractiveModel, InteractiveWindow};

mod ui;

#[derive(Debug, Clone)]
pub struct GuiConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            title: "modelbench".to_string(),
            width: 960.0,
            height: 600.0,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GuiError {
    #[error("gui error: {0}")]
    Gui(String),
    #[error(transparent)]
    Config(#[from] modelbench_core::ConfigError),
}

/// Shows an already-built window and blocks until it is closed.
pub fn run_gui(window: InteractiveWindow, config: GuiConfig) -> Result<(), GuiError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width, config.height]),
        ..Default::default()
    };

    log::info!("showing {} tab(s)", window.tabs().len());
    eframe::run_native(
        &config.title,
        options,
        Box::new(move |_cc| Box::new(BenchApp::new(window))),
    )
    .map_err(|err| GuiError::Gui(err.to_string()))
}

/// Convenience for the one-model case: builds the window, lays out its
/// controls, and shows it.
pub fn run_model(model: Box<dyn InteractiveModel>, config: GuiConfig) -> Result<(), GuiError> {
    let mut window = InteractiveWindow::new(vec![model])?;
    window.interact()?;
    run_gui(window, config)
}

struct BenchApp {
    window: InteractiveWindow,
}

impl BenchApp {
    fn new(window: InteractiveWindow) -> Self {
        Self { window }
    }
}

impl eframe::App for BenchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("bench_controls")
            .resizable(true)
            .show(ctx, |ui| {
                ui::tab_bar(ui, &mut self.window);
                ui.separator();
                ui::control_grid(ui, &mut self.window);
            });
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::plot_area(ui, self.window.figure());
        });
    }
}
