use eframe::egui;
use modelbench_core::InteractiveWindow;

mod controls;
mod plots;

pub(crate) use controls::control_grid;
pub(crate) use plots::plot_area;

/// One selectable label per tab; clicking drives the window's tab switch,
/// which clears and rebuilds the plot area.
pub(crate) fn tab_bar(ui: &mut egui::Ui, window: &mut InteractiveWindow) {
    let selected = window.selected();
    let mut clicked = None;
    ui.horizontal(|ui| {
        for (index, tab) in window.tabs().iter().enumerate() {
            if ui.selectable_label(selected == index, tab.title()).clicked() && selected != index {
                clicked = Some(index);
            }
        }
    });
    if let Some(index) = clicked {
        window.change_tab(Some(index));
    }
}
