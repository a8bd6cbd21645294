use crate::error::ConfigError;
use crate::field::FieldValue;
use crate::figure::{Axes, Figure};
use crate::view::View;
use crate::window::InteractiveWindow;

/// Capability contract every interactive model implements. This is the sole
/// extension point: new models implement it without touching the adapter.
///
/// `get`/`set` work by parameter name; embedding a [`crate::ParamSet`] is the
/// usual way to satisfy them. Values live for the lifetime of the owning
/// window and are mutated exclusively through `set`.
pub trait InteractiveModel {
    /// Display name, used as the tab title.
    fn name(&self) -> &str;

    /// Which fields are interactive, in the order their controls appear.
    fn view(&self) -> View;

    /// Creates this model's axes layout on a blank figure. The default is a
    /// single plot area.
    fn subplots<'f>(&self, fig: &'f mut Figure) -> &'f mut [Axes] {
        fig.subplots(1, 1)
    }

    /// Draws the current state onto the given axes. The caller clears the
    /// axes beforehand; implementations only add content.
    fn update_plot(&self, axes: &mut [Axes]);

    /// First-draw hook; identical to [`Self::update_plot`] unless overridden.
    fn plot(&self, axes: &mut [Axes]) {
        self.update_plot(axes);
    }

    fn get(&self, name: &str) -> Option<FieldValue>;

    fn set(&mut self, name: &str, value: FieldValue);

    /// Wraps this model in a one-model window with the control layout built
    /// and the first tab selected. Display it with the GUI backend.
    fn interact(self) -> Result<InteractiveWindow, ConfigError>
    where
        Self: Sized + 'static,
    {
        let mut window = InteractiveWindow::new(vec![Box::new(self) as Box<dyn InteractiveModel>])?;
        window.interact()?;
        Ok(window)
    }
}
