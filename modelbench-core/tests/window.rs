use modelbench_core::{
    Axes, ConfigError, FieldValue, Figure, InteractiveModel, InteractiveWindow, Item, ModelTab,
    ParamSet, View, WidgetKind,
};

/// Minimal model whose axes layout and drawn series are distinguishable per
/// instance.
struct Probe {
    name: &'static str,
    params: ParamSet,
    grid: (usize, usize),
}

impl Probe {
    fn new(name: &'static str, grid: (usize, usize)) -> Self {
        Self {
            name,
            params: ParamSet::new()
                .with("a", FieldValue::Float(1.0))
                .with("steps", FieldValue::Int(4))
                .with("enabled", FieldValue::Bool(true)),
            grid,
        }
    }
}

impl InteractiveModel for Probe {
    fn name(&self) -> &str {
        self.name
    }

    fn view(&self) -> View {
        View::new([
            Item::new("a").minmax(0.0, 10.0),
            Item::new("steps").minmax(0.0, 10.0),
            Item::new("enabled"),
        ])
    }

    fn subplots<'f>(&self, fig: &'f mut Figure) -> &'f mut [Axes] {
        fig.subplots(self.grid.0, self.grid.1)
    }

    fn update_plot(&self, axes: &mut [Axes]) {
        for ax in axes.iter_mut() {
            ax.line(format!("{}:curve", self.name), vec![[0.0, 0.0], [1.0, 1.0]]);
        }
    }

    fn get(&self, name: &str) -> Option<FieldValue> {
        self.params.get(name)
    }

    fn set(&mut self, name: &str, value: FieldValue) {
        self.params.set(name, value);
    }
}

fn two_model_window() -> InteractiveWindow {
    let mut window = InteractiveWindow::new(vec![
        Box::new(Probe::new("first", (1, 1))),
        Box::new(Probe::new("second", (2, 1))),
    ])
    .unwrap();
    window.interact().unwrap();
    window
}

#[test]
fn construction_creates_first_models_axes() {
    let window = InteractiveWindow::new(vec![Box::new(Probe::new("only", (1, 2)))]).unwrap();
    assert_eq!(window.figure().axes().len(), 2);
    assert_eq!(window.figure().grid(), (1, 2));
    assert!(!window.tabs()[0].is_laid_out());
}

#[test]
fn empty_model_list_is_rejected() {
    let err = InteractiveWindow::new(Vec::new()).unwrap_err();
    assert!(matches!(err, ConfigError::NoModels));
}

#[test]
fn interact_lays_out_one_control_per_item() {
    let window = two_model_window();
    for tab in window.tabs() {
        assert!(tab.is_laid_out());
        let names: Vec<&str> = tab.controls().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["a", "steps", "enabled"]);
    }
    let widgets: Vec<&WidgetKind> = window.tabs()[0]
        .controls()
        .iter()
        .map(|c| &c.widget)
        .collect();
    assert!(matches!(widgets[0], WidgetKind::FloatSlider { .. }));
    assert!(matches!(widgets[1], WidgetKind::IntSlider { .. }));
    assert!(matches!(widgets[2], WidgetKind::Toggle));
}

#[test]
fn change_event_mutates_model_and_redraws_once() {
    let mut window = two_model_window();
    let before = window.figure().revision();

    window.control_changed(0, "a", FieldValue::Float(5.0));

    assert_eq!(
        window.tabs()[0].model().get("a"),
        Some(FieldValue::Float(5.0))
    );
    let control = &window.tabs()[0].controls()[0];
    assert_eq!(control.value, FieldValue::Float(5.0));
    assert_eq!(window.figure().revision(), before + 1);
    assert_eq!(window.selected(), 0);
}

#[test]
fn change_event_for_unknown_name_is_dropped() {
    let mut window = two_model_window();
    let before = window.figure().revision();
    window.control_changed(0, "missing", FieldValue::Float(1.0));
    // Redraw still happens for the tab; nothing else changes.
    assert_eq!(window.figure().revision(), before + 1);
    assert_eq!(window.tabs()[0].controls().len(), 3);
}

#[test]
fn switching_tabs_rebuilds_axes_without_artifacts() {
    let mut window = two_model_window();
    assert_eq!(window.figure().axes().len(), 1);

    window.change_tab(Some(1));

    assert_eq!(window.selected(), 1);
    // Tab 1's model lays out a 2x1 grid and draws one series per axes.
    assert_eq!(window.figure().axes().len(), 2);
    for ax in window.figure().axes() {
        assert_eq!(ax.lines().len(), 1);
        assert_eq!(ax.lines()[0].name, "second:curve");
    }
}

#[test]
fn change_tab_without_selection_targets_first_tab() {
    let mut window = two_model_window();
    window.change_tab(Some(1));
    window.change_tab(None);
    assert_eq!(window.selected(), 0);
    assert_eq!(window.figure().axes().len(), 1);
    assert_eq!(window.figure().axes()[0].lines()[0].name, "first:curve");
}

#[test]
fn out_of_range_selection_is_ignored() {
    let mut window = two_model_window();
    window.change_tab(Some(7));
    assert_eq!(window.selected(), 0);
}

#[test]
fn interact_on_a_model_yields_one_titled_tab() {
    let window = Probe::new("lone", (1, 1)).interact().unwrap();
    assert_eq!(window.tabs().len(), 1);
    assert_eq!(window.tabs()[0].title(), "lone");
    assert!(window.tabs()[0].is_laid_out());
}

#[test]
fn plot_delegates_to_update_plot() {
    let model = Probe::new("alias", (1, 1));
    let mut via_plot = Figure::default();
    let mut via_update = Figure::default();
    model.plot(model.subplots(&mut via_plot));
    model.update_plot(model.subplots(&mut via_update));
    assert_eq!(via_plot.axes(), via_update.axes());
}

/// A view naming a field the model cannot answer for fails at layout time,
/// not deep inside the widget loop.
struct MisdeclaredModel;

impl InteractiveModel for MisdeclaredModel {
    fn name(&self) -> &str {
        "misdeclared"
    }

    fn view(&self) -> View {
        View::new([Item::new("ghost")])
    }

    fn update_plot(&self, _axes: &mut [Axes]) {}

    fn get(&self, _name: &str) -> Option<FieldValue> {
        None
    }

    fn set(&mut self, _name: &str, _value: FieldValue) {}
}

#[test]
fn layout_fails_fast_on_unknown_view_name() {
    let mut tab = ModelTab::new(Box::new(MisdeclaredModel), 0);
    let err = tab.widget_layout().unwrap_err();
    match err {
        ConfigError::UnknownParameter { model, name } => {
            assert_eq!(model, "misdeclared");
            assert_eq!(name, "ghost");
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// A text field with no explicit editor has no default widget.
struct UneditableModel {
    params: ParamSet,
}

impl InteractiveModel for UneditableModel {
    fn name(&self) -> &str {
        "uneditable"
    }

    fn view(&self) -> View {
        View::new([Item::new("note")])
    }

    fn update_plot(&self, _axes: &mut [Axes]) {}

    fn get(&self, name: &str) -> Option<FieldValue> {
        self.params.get(name)
    }

    fn set(&mut self, name: &str, value: FieldValue) {
        self.params.set(name, value);
    }
}

#[test]
fn layout_fails_when_no_editor_resolves() {
    let model = UneditableModel {
        params: ParamSet::new().with("note", FieldValue::Text(String::new())),
    };
    let err = InteractiveWindow::new(vec![Box::new(model)])
        .unwrap()
        .interact()
        .unwrap_err();
    assert!(matches!(err, ConfigError::NoEditor { .. }));
}
