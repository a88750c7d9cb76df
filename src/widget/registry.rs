//! The widget registry: named widgets plus a theme, composed per invocation.

use std::collections::HashMap;

use crate::style::pipeline::{compose, StyleInputs};
use crate::style::record::StyleRecord;
use crate::style::theme::Theme;
use crate::widget::traits::Widget;

/// Errors from registry-driven composition.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    /// Composing against a widget name with no registered defaults is a
    /// programmer error and fails loudly instead of silently falling back.
    #[error("unknown widget: {0}")]
    UnknownWidget(String),
}

/// A set of registered widgets and the theme their defaults resolve against.
pub struct Engine {
    widgets: HashMap<&'static str, Box<dyn Widget>>,
    theme: Theme,
}

impl Engine {
    /// An engine with every built-in widget registered.
    pub fn new(theme: Theme) -> Self {
        let mut engine = Self::empty(theme);
        for widget in crate::widgets::built_in() {
            engine.register(widget);
        }
        engine
    }

    /// An engine with no widgets registered.
    pub fn empty(theme: Theme) -> Self {
        Self {
            widgets: HashMap::new(),
            theme,
        }
    }

    /// Register a widget under its own name. Replaces any previous
    /// registration of that name.
    pub fn register(&mut self, widget: Box<dyn Widget>) {
        self.widgets.insert(widget.name(), widget);
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Look up a registered widget.
    pub fn widget(&self, name: &str) -> Result<&dyn Widget, ComposeError> {
        self.widgets
            .get(name)
            .map(|widget| &**widget)
            .ok_or_else(|| ComposeError::UnknownWidget(name.to_string()))
    }

    /// Compose one widget invocation through the merge pipeline.
    pub fn compose(&self, name: &str, inputs: &StyleInputs) -> Result<StyleRecord, ComposeError> {
        let widget = self.widget(name)?;
        Ok(compose(widget, &self.theme, inputs))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
