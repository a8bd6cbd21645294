use egui::{Grid, Slider, Ui};
use modelbench_core::{Control, FieldValue, InteractiveWindow, WidgetKind};

/// Renders the active tab's controls in a fixed two-column grid, in item
/// order, and funnels every change back into the window (model write +
/// synchronous redraw of that tab).
pub(crate) fn control_grid(ui: &mut Ui, window: &mut InteractiveWindow) {
    let tab_index = window.selected();
    let mut changes: Vec<(String, FieldValue)> = Vec::new();

    let Some(tab) = window.tabs_mut().get_mut(tab_index) else {
        return;
    };
    Grid::new("bench_param_grid")
        .num_columns(2)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            for (slot, control) in tab.controls_mut().iter_mut().enumerate() {
                if render_control(ui, control) {
                    changes.push((control.name.clone(), control.value.clone()));
                }
                if slot % 2 == 1 {
                    ui.end_row();
                }
            }
        });

    for (name, value) in changes {
        window.control_changed(tab_index, &name, value);
    }
}

/// Draws one control and mutates its retained value in place. Returns
/// whether the user changed it this frame.
fn render_control(ui: &mut Ui, control: &mut Control) -> bool {
    let mut changed = false;
    match control.widget.clone() {
        WidgetKind::FloatSlider { min, max, step } => {
            let mut value = control.value.as_f64().unwrap_or(min);
            let response = ui.add(
                Slider::new(&mut value, min..=max)
                    .step_by(step)
                    .text(control.label.as_str()),
            );
            if response.changed() {
                control.value = FieldValue::Float(value);
                changed = true;
            }
        }
        WidgetKind::IntSlider { min, max, step } => {
            let mut value = control.value.as_i64().unwrap_or(min);
            let response = ui.add(
                Slider::new(&mut value, min..=max)
                    .step_by(step as f64)
                    .text(control.label.as_str()),
            );
            if response.changed() {
                control.value = FieldValue::Int(value);
                changed = true;
            }
        }
        WidgetKind::Toggle => {
            let mut value = control.value.as_bool().unwrap_or(false);
            if ui.checkbox(&mut value, control.label.as_str()).changed() {
                control.value = FieldValue::Bool(value);
                changed = true;
            }
        }
        WidgetKind::TextInput => {
            let mut value = control.value.as_text().unwrap_or("").to_string();
            ui.horizontal(|ui| {
                ui.label(control.label.as_str());
                if ui.text_edit_singleline(&mut value).changed() {
                    control.value = FieldValue::Text(value.clone());
                    changed = true;
                }
            });
        }
    }
    changed
}
