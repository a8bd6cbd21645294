use crate::editor::Control;
use crate::error::ConfigError;
use crate::field::FieldValue;
use crate::figure::{Axes, Figure};
use crate::model::InteractiveModel;

/// Slider resolution: a float slider's step is 1/20th of its range.
const DEFAULT_N_STEPS: usize = 20;

/// Binds one model to one tab: owns the model, its realized controls, and
/// the tab position inside the owning window.
///
/// The window routes events by index, so the tab needs no reference back to
/// its owner.
pub struct ModelTab {
    index: usize,
    model: Box<dyn InteractiveModel>,
    controls: Vec<Control>,
    laid_out: bool,
    n_steps: usize,
}

impl ModelTab {
    pub fn new(model: Box<dyn InteractiveModel>, index: usize) -> Self {
        Self {
            index,
            model,
            controls: Vec::new(),
            laid_out: false,
            n_steps: DEFAULT_N_STEPS,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn title(&self) -> &str {
        self.model.name()
    }

    pub fn is_laid_out(&self) -> bool {
        self.laid_out
    }

    /// Builds one control per view item, in declaration order. Runs once;
    /// later calls return the existing controls. Tab switching never
    /// rebuilds them.
    ///
    /// Fails fast when the view names a field the model cannot answer for,
    /// or when an item resolves to no editor.
    pub fn widget_layout(&mut self) -> Result<&[Control], ConfigError> {
        if !self.laid_out {
            let view = self.model.view();
            let mut controls = Vec::with_capacity(view.len());
            for item in view.content() {
                let value =
                    self.model
                        .get(item.name())
                        .ok_or_else(|| ConfigError::UnknownParameter {
                            model: self.model.name().to_string(),
                            name: item.name().to_string(),
                        })?;
                let editor = item.build_editor(value, self.n_steps)?;
                controls.push(editor.render());
            }
            self.controls = controls;
            self.laid_out = true;
        }
        Ok(&self.controls)
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Mutable access for backends that edit control values in place.
    pub fn controls_mut(&mut self) -> &mut [Control] {
        &mut self.controls
    }

    /// Applies one widget change: writes through to the model and keeps the
    /// named control's retained value in sync. Unknown names are logged and
    /// dropped.
    pub fn apply(&mut self, name: &str, value: FieldValue) {
        match self.controls.iter_mut().find(|control| control.name == name) {
            Some(control) => control.value = value.clone(),
            None => {
                log::warn!(
                    "tab {}: change event for unknown control `{name}` ignored",
                    self.index
                );
                return;
            }
        }
        self.model.set(name, value);
    }

    pub fn subplots<'f>(&self, fig: &'f mut Figure) -> &'f mut [Axes] {
        self.model.subplots(fig)
    }

    pub fn update_plot(&self, axes: &mut [Axes]) {
        self.model.update_plot(axes);
    }

    pub fn model(&self) -> &dyn InteractiveModel {
        self.model.as_ref()
    }

    pub fn model_mut(&mut self) -> &mut dyn InteractiveModel {
        self.model.as_mut()
    }
}
