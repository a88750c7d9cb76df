//! Responsive and interaction-state overlays.
//!
//! Overlays are partial property bags applied conditionally: by breakpoint
//! (media query blocks) or by interaction state (pseudo-selector blocks).
//! Both reuse the widget's extended style builder with the overlay bag as
//! input; breakpoint bags are *not* filled with widget defaults, so only
//! explicitly set fields are styled.

use std::collections::BTreeMap;

use crate::style::props::PropertyBag;
use crate::style::record::StyleRecord;

/// Breakpoint overlays: pixel threshold → partial property bag.
///
/// A `BTreeMap` keeps thresholds in ascending order, which fixes the emission
/// order of media blocks and makes output reproducible.
pub type BreakpointOverlay = BTreeMap<u32, PropertyBag>;

/// The media-query selector for a breakpoint threshold.
///
/// Numeric breakpoint keys are max-width thresholds (desktop-first): styles
/// under key `768` apply at viewports up to 768px wide.
pub fn media_query(threshold: u32) -> String {
    format!("@media (max-width: {threshold}px)")
}

/// Resolve breakpoint overlays into media-query blocks, each computed by the
/// widget's extended style builder. An empty overlay contributes nothing.
pub fn media_styles(
    overlay: &BreakpointOverlay,
    extended: impl Fn(&PropertyBag) -> StyleRecord,
) -> StyleRecord {
    let mut record = StyleRecord::new();
    for (threshold, bag) in overlay {
        record.set_block(media_query(*threshold), extended(bag));
    }
    record
}

/// One interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Hover,
    Focus,
    Active,
    Disabled,
}

impl InteractionState {
    /// All states in emission order.
    pub const ALL: [Self; 4] = [Self::Hover, Self::Focus, Self::Active, Self::Disabled];

    /// The nested-selector key for this state.
    pub fn selector(self) -> &'static str {
        match self {
            Self::Hover => "&:hover",
            Self::Focus => "&:focus",
            Self::Active => "&:active",
            Self::Disabled => "&:disabled",
        }
    }
}

/// Partial bags for the four interaction states.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateOverlays {
    pub hover: Option<PropertyBag>,
    pub focus: Option<PropertyBag>,
    pub active: Option<PropertyBag>,
    pub disabled: Option<PropertyBag>,
}

impl StateOverlays {
    pub fn get(&self, state: InteractionState) -> Option<&PropertyBag> {
        match state {
            InteractionState::Hover => self.hover.as_ref(),
            InteractionState::Focus => self.focus.as_ref(),
            InteractionState::Active => self.active.as_ref(),
            InteractionState::Disabled => self.disabled.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hover.is_none()
            && self.focus.is_none()
            && self.active.is_none()
            && self.disabled.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::mappers::flex_styles;
    use crate::style::props::Direction;
    use crate::style::record::StyleValue;

    fn extended(bag: &PropertyBag) -> StyleRecord {
        flex_styles(&bag.flex)
    }

    #[test]
    fn media_query_selector_is_max_width() {
        assert_eq!(media_query(768), "@media (max-width: 768px)");
    }

    #[test]
    fn empty_overlay_contributes_nothing() {
        let overlay = BreakpointOverlay::new();
        assert!(media_styles(&overlay, extended).is_empty());
    }

    #[test]
    fn one_block_per_breakpoint() {
        let mut overlay = BreakpointOverlay::new();
        overlay.insert(768, PropertyBag::new().direction(Direction::Column));
        overlay.insert(480, PropertyBag::new().gap(8));

        let record = media_styles(&overlay, extended);
        assert_eq!(record.len(), 2);
        let narrow = record.get_block("@media (max-width: 768px)").unwrap();
        assert_eq!(
            narrow.get("flex-direction"),
            Some(&StyleValue::Str("column".into()))
        );
        let phone = record.get_block("@media (max-width: 480px)").unwrap();
        assert_eq!(phone.get("gap"), Some(&StyleValue::Px(8.0)));
    }

    #[test]
    fn breakpoints_emit_in_ascending_order() {
        let mut overlay = BreakpointOverlay::new();
        overlay.insert(1024, PropertyBag::new().gap(1));
        overlay.insert(480, PropertyBag::new().gap(2));
        overlay.insert(768, PropertyBag::new().gap(3));

        let record = media_styles(&overlay, extended);
        let keys: Vec<_> = record.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(
            keys,
            vec![
                "@media (max-width: 480px)",
                "@media (max-width: 768px)",
                "@media (max-width: 1024px)",
            ]
        );
    }

    #[test]
    fn empty_breakpoint_bag_is_dropped() {
        let mut overlay = BreakpointOverlay::new();
        overlay.insert(768, PropertyBag::new());
        assert!(media_styles(&overlay, extended).is_empty());
    }

    #[test]
    fn state_selectors() {
        assert_eq!(InteractionState::Hover.selector(), "&:hover");
        assert_eq!(InteractionState::Focus.selector(), "&:focus");
        assert_eq!(InteractionState::Active.selector(), "&:active");
        assert_eq!(InteractionState::Disabled.selector(), "&:disabled");
    }

    #[test]
    fn state_overlays_lookup() {
        let overlays = StateOverlays {
            hover: Some(PropertyBag::new().opacity(0.9)),
            ..StateOverlays::default()
        };
        assert!(overlays.get(InteractionState::Hover).is_some());
        assert!(overlays.get(InteractionState::Focus).is_none());
        assert!(!overlays.is_empty());
        assert!(StateOverlays::default().is_empty());
    }
}
