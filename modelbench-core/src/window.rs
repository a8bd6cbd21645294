use crate::error::ConfigError;
use crate::field::FieldValue;
use crate::figure::{Figure, FigureOptions};
use crate::model::InteractiveModel;
use crate::tab::ModelTab;

/// Top-level container synchronizing the interaction controls with the
/// shared plotting surface. Owns the figure and one [`ModelTab`] per model;
/// tab position equals position in the input order.
pub struct InteractiveWindow {
    fig: Figure,
    tabs: Vec<ModelTab>,
    selected: usize,
}

impl InteractiveWindow {
    pub fn new(models: Vec<Box<dyn InteractiveModel>>) -> Result<Self, ConfigError> {
        Self::with_options(models, FigureOptions::default())
    }

    /// Allocates the figure and creates the first model's axes immediately;
    /// no controls exist until [`Self::interact`] is called.
    pub fn with_options(
        models: Vec<Box<dyn InteractiveModel>>,
        options: FigureOptions,
    ) -> Result<Self, ConfigError> {
        if models.is_empty() {
            return Err(ConfigError::NoModels);
        }
        let tabs: Vec<ModelTab> = models
            .into_iter()
            .enumerate()
            .map(|(index, model)| ModelTab::new(model, index))
            .collect();
        let mut fig = Figure::new(options);
        tabs[0].subplots(&mut fig);
        Ok(Self {
            fig,
            tabs,
            selected: 0,
        })
    }

    /// Builds every tab's control layout, then performs the initial
    /// synthetic tab selection. A layout failure aborts construction of the
    /// whole UI and surfaces to the caller.
    pub fn interact(&mut self) -> Result<(), ConfigError> {
        for tab in &mut self.tabs {
            tab.widget_layout()?;
        }
        self.change_tab(None);
        Ok(())
    }

    /// Selects a tab: clears the whole figure, recreates the selected
    /// model's axes on the now-empty figure, and repaints. `None` targets
    /// the initial tab (index 0).
    pub fn change_tab(&mut self, selection: Option<usize>) {
        let index = selection.unwrap_or(0);
        if index >= self.tabs.len() {
            log::warn!("tab selection {index} out of range, ignored");
            return;
        }
        self.selected = index;
        self.fig.clear();
        let tab = &self.tabs[index];
        tab.subplots(&mut self.fig);
        self.update_plot(index);
    }

    /// Repaints the tab at `index`: clears every axes, delegates drawing to
    /// the tab's model, re-syncs the visible selection, and requests a
    /// canvas draw.
    pub fn update_plot(&mut self, index: usize) {
        if index >= self.tabs.len() {
            log::warn!("update_plot for missing tab {index} ignored");
            return;
        }
        for ax in self.fig.axes_mut() {
            ax.clear();
        }
        let tab = &self.tabs[index];
        tab.update_plot(self.fig.axes_mut());
        self.selected = index;
        self.fig.commit();
    }

    /// Entry point for widget change events: applies the new value to the
    /// tab's model, then redraws that tab synchronously.
    pub fn control_changed(&mut self, tab: usize, name: &str, value: FieldValue) {
        let Some(model_tab) = self.tabs.get_mut(tab) else {
            log::warn!("change event for missing tab {tab} ignored");
            return;
        };
        log::debug!("tab {tab}: `{name}` changed");
        model_tab.apply(name, value);
        self.update_plot(tab);
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn tabs(&self) -> &[ModelTab] {
        &self.tabs
    }

    pub fn tabs_mut(&mut self) -> &mut [ModelTab] {
        &mut self.tabs
    }

    pub fn figure(&self) -> &Figure {
        &self.fig
    }
}

impl std::fmt::Debug for InteractiveWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractiveWindow")
            .field("fig", &self.fig)
            .field("tab_count", &self.tabs.len())
            .field("selected", &self.selected)
            .finish()
    }
}
