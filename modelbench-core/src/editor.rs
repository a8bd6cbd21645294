use serde::{Deserialize, Serialize};

use crate::field::{FieldKind, FieldValue};

/// Slider bounds applied when an item declares no range of its own.
pub(crate) const DEFAULT_MINMAX: (f64, f64) = (0.0, 100.0);

/// Concrete control shape an editor resolves to.
///
/// The fixed resolution table lives in [`default_widget`]: float fields get a
/// continuous slider, int fields a stepped slider, bool fields a toggle.
/// Anything else must be picked explicitly on the [`crate::Item`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WidgetKind {
    FloatSlider { min: f64, max: f64, step: f64 },
    IntSlider { min: i64, max: i64, step: i64 },
    Toggle,
    TextInput,
}

pub(crate) fn default_widget(
    kind: FieldKind,
    minmax: Option<(f64, f64)>,
    n_steps: usize,
) -> Option<WidgetKind> {
    let (min, max) = minmax.unwrap_or(DEFAULT_MINMAX);
    match kind {
        FieldKind::Float => Some(WidgetKind::FloatSlider {
            min,
            max,
            step: (max - min) / n_steps.max(1) as f64,
        }),
        FieldKind::Int => Some(WidgetKind::IntSlider {
            min: min as i64,
            max: max as i64,
            step: 1,
        }),
        FieldKind::Bool => Some(WidgetKind::Toggle),
        FieldKind::Text => None,
    }
}

/// A configured but not yet rendered control description.
#[derive(Debug, Clone, PartialEq)]
pub struct Editor {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub widget: WidgetKind,
}

impl Editor {
    /// Realizes the description into the retained control state a backend
    /// renders and mutates.
    pub fn render(self) -> Control {
        Control {
            name: self.name,
            label: self.label,
            widget: self.widget,
            value: self.value,
        }
    }
}

/// Retained state of one on-screen control.
///
/// Backends mutate `value` in place and report the change through
/// [`crate::InteractiveWindow::control_changed`].
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub name: String,
    pub label: String,
    pub widget: WidgetKind,
    pub value: FieldValue,
}
