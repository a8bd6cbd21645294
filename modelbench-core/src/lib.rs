//! Toolkit-agnostic core of modelbench: declare a model's interactive
//! parameters once, get one control per parameter, and have every control
//! change write through to the model and repaint the shared figure.
//!
//! The only extension point is the [`InteractiveModel`] trait. A GUI backend
//! (see `modelbench-gui`) renders an [`InteractiveWindow`] and feeds widget
//! change events back into it; nothing in this crate knows about a concrete
//! widget toolkit.

mod editor;
mod error;
mod field;
mod figure;
mod model;
mod tab;
mod view;
mod window;

pub use editor::{Control, Editor, WidgetKind};
pub use error::ConfigError;
pub use field::{FieldKind, FieldValue, ParamSet};
pub use figure::{Axes, Figure, FigureOptions, Series};
pub use model::InteractiveModel;
pub use tab::ModelTab;
pub use view::{Item, View};
pub use window::InteractiveWindow;
