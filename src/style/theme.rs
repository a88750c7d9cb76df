//! Theme configuration threaded through widget-default resolution.
//!
//! Widget default tables read their colors and radii from an explicit
//! [`Theme`] value instead of module-scope constants, so a site can construct
//! one at startup (or deserialize it from configuration) and pass it to the
//! engine.

use serde::{Deserialize, Serialize};

/// Color and sizing constants consumed by widget default tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Primary accent, the default Button fill and LinkHref text color.
    pub primary: String,
    /// Default body text color.
    pub text: String,
    /// Default Button label color.
    pub button_text: String,
    /// Default Divider color.
    pub divider: String,
    /// Fill applied to disabled interactive widgets.
    pub disabled_fill: String,
    /// Text color applied to disabled interactive widgets.
    pub disabled_text: String,
    /// Default corner radius for the Border widget.
    pub radius: f64,
    /// Default corner radius for Button.
    pub button_radius: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#5b94f0".into(),
            text: "#414243".into(),
            button_text: "#fbfbfb".into(),
            divider: "#e9e9e9".into(),
            disabled_fill: "#f0f0f0".into(),
            disabled_text: "#aaa".into(),
            radius: 16.0,
            button_radius: 15.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette() {
        let theme = Theme::default();
        assert_eq!(theme.primary, "#5b94f0");
        assert_eq!(theme.text, "#414243");
        assert_eq!(theme.button_radius, 15.0);
        assert_eq!(theme.radius, 16.0);
    }

    #[test]
    fn partial_deserialization_fills_defaults() {
        let theme: Theme = serde_json::from_str(r##"{"primary": "#ff0000"}"##).unwrap();
        assert_eq!(theme.primary, "#ff0000");
        assert_eq!(theme.divider, "#e9e9e9");
    }

    #[test]
    fn round_trips_through_json() {
        let theme = Theme::default();
        let json = serde_json::to_string(&theme).unwrap();
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }
}
