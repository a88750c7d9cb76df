//! Element-agnostic base styles shared by every widget.

use crate::style::record::StyleRecord;
use crate::style::scalar::fmt_number;

/// A transition spec: duration in seconds and an easing keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub duration: f64,
    pub easing: Option<String>,
}

impl Transition {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            easing: None,
        }
    }

    pub fn with_easing(duration: f64, easing: impl Into<String>) -> Self {
        Self {
            duration,
            easing: Some(easing.into()),
        }
    }
}

/// Inputs of the base style builder: everything that is not a semantic style
/// property but still shapes the base layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseProps {
    pub transition: Option<Transition>,
    pub z_index: Option<i32>,
    pub cursor: Option<String>,
    pub user_select: Option<String>,
    /// Whether the invocation has a click handler attached.
    pub has_click: bool,
    /// Whether the invocation has a hover handler attached.
    pub has_hover: bool,
    /// Disabled invocations force `cursor: default` over everything else.
    pub disabled: bool,
}

impl BaseProps {
    /// Merge caller props over widget base defaults: caller-set options win,
    /// handler flags come from the caller alone.
    pub fn merge_over(&self, defaults: &BaseProps) -> BaseProps {
        BaseProps {
            transition: self.transition.clone().or_else(|| defaults.transition.clone()),
            z_index: self.z_index.or(defaults.z_index),
            cursor: self.cursor.clone().or_else(|| defaults.cursor.clone()),
            user_select: self
                .user_select
                .clone()
                .or_else(|| defaults.user_select.clone()),
            has_click: self.has_click,
            has_hover: self.has_hover,
            disabled: self.disabled,
        }
    }
}

/// Build the base style layer.
///
/// - `cursor` defaults to `pointer` only when unset and a click or hover
///   handler is present; `disabled` forces `default` regardless.
/// - `transition` is emitted only for a positive duration, as
///   `all {duration}s {easing}` with `ease-in-out` as the easing fallback.
/// - List style, outline, and border width are always reset.
pub fn base_styles(props: &BaseProps) -> StyleRecord {
    let mut record = StyleRecord::new();

    if let Some(z_index) = props.z_index {
        record.set_num("z-index", f64::from(z_index));
    }
    if let Some(user_select) = &props.user_select {
        record.set_str("user-select", user_select.clone());
    }

    if props.disabled {
        record.set_str("cursor", "default");
    } else if let Some(cursor) = &props.cursor {
        record.set_str("cursor", cursor.clone());
    } else if props.has_click || props.has_hover {
        record.set_str("cursor", "pointer");
    }

    if let Some(transition) = &props.transition {
        if transition.duration > 0.0 {
            let easing = transition.easing.as_deref().unwrap_or("ease-in-out");
            record.set_str(
                "transition",
                format!("all {}s {easing}", fmt_number(transition.duration)),
            );
        }
    }

    record.set_str("list-style", "none");
    record.set_str("outline", "none");
    record.set_num("border-width", 0.0);
    record
}
