use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use modelbench_core::{Axes, Figure};

/// Renders the figure's retained scene: one plot per axes, laid out on the
/// figure's subplot grid.
pub(crate) fn plot_area(ui: &mut egui::Ui, fig: &Figure) {
    let (rows, cols) = fig.grid();
    if fig.axes().is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("nothing to plot");
        });
        return;
    }

    // The figsize governs each plot's aspect; the grid never exceeds the
    // panel.
    let size = fig.options().size;
    let aspect = (size.0 / size.1).max(0.1);
    let available = ui.available_size();
    let cell_w = available.x / cols as f32;
    let cell_h = (available.y / rows as f32).min(cell_w / aspect);
    let cell = egui::vec2(cell_w, cell_h);

    for row in 0..rows {
        ui.horizontal(|ui| {
            for col in 0..cols {
                let index = row * cols + col;
                if let Some(axes) = fig.axes().get(index) {
                    ui.allocate_ui(cell, |ui| {
                        draw_axes(ui, axes, index, cell);
                    });
                }
            }
        });
    }
}

fn draw_axes(ui: &mut egui::Ui, axes: &Axes, index: usize, cell: egui::Vec2) {
    ui.vertical(|ui| {
        if !axes.title().is_empty() {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(axes.title()).strong());
            });
        }

        let mut plot = Plot::new(("bench_axes", index))
            .legend(Legend::default())
            .show_grid(axes.grid())
            .width(cell.x - 8.0)
            .height((cell.y - 28.0).max(64.0));
        if !axes.x_label().is_empty() {
            plot = plot.x_axis_label(axes.x_label());
        }
        if !axes.y_label().is_empty() {
            plot = plot.y_axis_label(axes.y_label());
        }

        plot.show(ui, |plot_ui| {
            for (i, series) in axes.lines().iter().enumerate() {
                if series.points.is_empty() {
                    continue;
                }
                let points: PlotPoints = series.points.iter().copied().collect();
                plot_ui.line(
                    Line::new(points)
                        .color(palette_color(i))
                        .name(&series.name),
                );
            }
        });
    });
}

/// Ten-color cycle, assigned to series by index.
fn palette_color(idx: usize) -> egui::Color32 {
    const COLORS: [egui::Color32; 10] = [
        egui::Color32::from_rgb(31, 119, 180),
        egui::Color32::from_rgb(255, 127, 14),
        egui::Color32::from_rgb(44, 160, 44),
        egui::Color32::from_rgb(214, 39, 40),
        egui::Color32::from_rgb(148, 103, 189),
        egui::Color32::from_rgb(140, 86, 75),
        egui::Color32::from_rgb(227, 119, 194),
        egui::Color32::from_rgb(127, 127, 127),
        egui::Color32::from_rgb(188, 189, 34),
        egui::Color32::from_rgb(23, 190, 207),
    ];
    COLORS[idx % COLORS.len()]
}
