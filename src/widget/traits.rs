//! The widget trait: per-widget defaults, concern composition, and state
//! fallbacks.

use crate::style::base::BaseProps;
use crate::style::overlay::InteractionState;
use crate::style::props::PropertyBag;
use crate::style::record::StyleRecord;
use crate::style::theme::Theme;

/// Attributes every widget may forward to its rendered element.
pub const GLOBAL_ATTRS: &[&str] = &[
    "id",
    "class",
    "title",
    "role",
    "tabindex",
    "aria-label",
    "aria-hidden",
    "data-testid",
];

/// One style-engine consumer: a named widget with its own default table.
///
/// A widget registers which concerns apply (via [`extended`](Widget::extended)),
/// its default values, any cross-field derived defaults, and its
/// interaction-state fallbacks. All methods are pure: calling them repeatedly
/// with structurally equal inputs yields structurally equal outputs, which is
/// what lets the responsive and state resolvers reuse the same builder.
pub trait Widget {
    /// The widget's registry name (`"Button"`, `"Layer"`, ...).
    fn name(&self) -> &'static str;

    /// The widget's default table. Applied only to fields the caller left
    /// unset; never overrides an explicit value.
    fn defaults(&self, theme: &Theme) -> PropertyBag;

    /// Cross-field derived defaults, applied after the default merge (e.g.
    /// Layer's rule that `flex == 1` without an explicit height defaults the
    /// height to `100%`).
    fn finalize_bag(&self, bag: PropertyBag) -> PropertyBag {
        bag
    }

    /// The `display` mode the widget's base layer emits, if any.
    fn display(&self) -> Option<&'static str> {
        Some("flex")
    }

    /// The `position` reset the widget's base layer emits, if any.
    fn position_reset(&self) -> Option<&'static str> {
        Some("relative")
    }

    /// Whether the widget contributes a base layer at all.
    fn uses_base(&self) -> bool {
        true
    }

    /// Per-widget base-prop defaults (transition, user-select). Caller base
    /// props win field by field.
    fn base_defaults(&self) -> BaseProps {
        BaseProps::default()
    }

    /// The extended style builder: compose the widget's concerns from a
    /// (defaulted or partial) property bag into one record.
    fn extended(&self, bag: &PropertyBag) -> StyleRecord;

    /// Whether the widget is interactive (emits built-in state feedback and
    /// the disabled cursor rule).
    fn interactive(&self) -> bool {
        false
    }

    /// The style block for one interaction state, or `None` for no block.
    ///
    /// The default emits a block only for an explicitly supplied overlay,
    /// with no state-specific fallbacks: the structural-widget behavior.
    /// Interactive widgets override this with their documented defaults.
    fn state_style(
        &self,
        _state: InteractionState,
        overlay: Option<&PropertyBag>,
        _theme: &Theme,
    ) -> Option<StyleRecord> {
        overlay.map(|bag| self.extended(bag))
    }

    /// The allow-list of attributes forwarded to the rendered element.
    /// Anything not listed here is dropped instead of leaking through.
    fn forwarded_attrs(&self) -> &'static [&'static str] {
        GLOBAL_ATTRS
    }
}

/// Filter caller-supplied attributes down to the widget's allow-list,
/// preserving input order.
pub fn filter_forwarded<'a>(
    widget: &dyn Widget,
    attrs: &'a [(&'a str, &'a str)],
) -> Vec<(&'a str, &'a str)> {
    attrs
        .iter()
        .copied()
        .filter(|(name, _)| widget.forwarded_attrs().contains(name))
        .collect()
}
