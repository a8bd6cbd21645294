use crate::editor::{default_widget, Editor, WidgetKind};
use crate::error::ConfigError;
use crate::field::FieldValue;

/// Description of one interactive parameter: name, display label, numeric
/// range, and an optional explicit widget choice overriding the default
/// type-to-widget resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    name: String,
    label: Option<String>,
    minmax: Option<(f64, f64)>,
    editor: Option<WidgetKind>,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            minmax: None,
            editor: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Bounds for the resolved slider. Callers supply `min <= max`; the
    /// bounds are passed through unvalidated.
    pub fn minmax(mut self, min: f64, max: f64) -> Self {
        self.minmax = Some((min, max));
        self
    }

    /// Forces a specific widget instead of the default for the field kind.
    pub fn editor(mut self, widget: WidgetKind) -> Self {
        self.editor = Some(widget);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display label, falling back to the parameter name.
    pub fn resolved_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    pub fn range(&self) -> Option<(f64, f64)> {
        self.minmax
    }

    /// Resolves this item against the field's current value into a configured
    /// editor. Fails when the field kind has no default widget and no
    /// explicit editor was supplied.
    pub fn build_editor(&self, value: FieldValue, n_steps: usize) -> Result<Editor, ConfigError> {
        let widget = match &self.editor {
            Some(widget) => widget.clone(),
            None => default_widget(value.kind(), self.minmax, n_steps).ok_or_else(|| {
                ConfigError::NoEditor {
                    name: self.name.clone(),
                    kind: value.kind(),
                }
            })?,
        };
        Ok(Editor {
            name: self.name.clone(),
            label: self.resolved_label().to_string(),
            value,
            widget,
        })
    }
}

/// Ordered collection of [`Item`]s belonging to one model. Names are unique
/// within a view; the view is built once at model declaration time and never
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct View {
    content: Vec<Item>,
}

impl View {
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            content: items.into_iter().collect(),
        }
    }

    pub fn content(&self) -> &[Item] {
        &self.content
    }

    /// Item names, parallel to [`Self::content`] in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.content.iter().map(|item| item.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;

    #[test]
    fn names_parallel_content() {
        let view = View::new([Item::new("a"), Item::new("b"), Item::new("c")]);
        assert_eq!(view.names(), ["a", "b", "c"]);
        for (i, name) in view.names().iter().enumerate() {
            assert_eq!(*name, view.content()[i].name());
        }
    }

    #[test]
    fn label_falls_back_to_name() {
        assert_eq!(Item::new("zeta").resolved_label(), "zeta");
        assert_eq!(Item::new("zeta").label("ζ").resolved_label(), "ζ");
    }

    #[test]
    fn explicit_editor_overrides_resolution() {
        let item = Item::new("note").editor(WidgetKind::TextInput);
        let editor = item
            .build_editor(FieldValue::Text("hi".to_string()), 20)
            .unwrap();
        assert_eq!(editor.widget, WidgetKind::TextInput);
    }

    #[test]
    fn text_without_editor_is_a_config_error() {
        let err = Item::new("note")
            .build_editor(FieldValue::Text(String::new()), 20)
            .unwrap_err();
        match err {
            ConfigError::NoEditor { name, kind } => {
                assert_eq!(name, "note");
                assert_eq!(kind, FieldKind::Text);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
