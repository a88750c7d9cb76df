//! TouchableOpacity: an interactive container that dims on press.
//!
//! Focus and active feedback is built in: absent an explicit overlay, both
//! states dim to 0.75 opacity and scale to 0.98.

use crate::style::base::{BaseProps, Transition};
use crate::style::mappers::{
    background_styles, border_styles, flex_styles, gradient_styles, shadow_styles, sizing_styles,
    space_styles, transform_styles, typography_styles,
};
use crate::style::overlay::InteractionState;
use crate::style::props::{Direction, Edges, PropertyBag};
use crate::style::record::StyleRecord;
use crate::style::theme::Theme;
use crate::widget::traits::Widget;

/// The TouchableOpacity widget.
#[derive(Debug, Default)]
pub struct TouchableOpacity;

impl TouchableOpacity {
    fn pressed_bag(overlay: Option<&PropertyBag>) -> PropertyBag {
        let mut bag = overlay.cloned().unwrap_or_default();
        bag.opacity = bag.opacity.or(Some(0.75));
        bag.transform.scale = bag.transform.scale.or(Some(0.98));
        bag
    }
}

impl Widget for TouchableOpacity {
    fn name(&self) -> &'static str {
        "TouchableOpacity"
    }

    fn defaults(&self, _theme: &Theme) -> PropertyBag {
        PropertyBag::new()
            .direction(Direction::Row)
            .text_size(15)
            .white_space("nowrap")
    }

    fn base_defaults(&self) -> BaseProps {
        BaseProps {
            transition: Some(Transition::new(0.2)),
            user_select: Some("none".into()),
            ..BaseProps::default()
        }
    }

    fn extended(&self, bag: &PropertyBag) -> StyleRecord {
        let mut record = sizing_styles(&bag.sizing);
        record.merge_in(&flex_styles(&bag.flex));
        record.merge_in(&typography_styles(&bag.text));
        record.merge_in(&space_styles(&bag.padding, &Edges::default()));
        record.merge_in(&background_styles(
            bag.fill.as_deref(),
            None,
            None,
            bag.opacity,
        ));
        record.merge_in(&gradient_styles(&bag.gradient));
        record.merge_in(&border_styles(&bag.border));
        record.merge_in(&shadow_styles(&bag.shadow));
        record.merge_in(&transform_styles(&bag.transform));
        record
    }

    fn interactive(&self) -> bool {
        true
    }

    fn state_style(
        &self,
        state: InteractionState,
        overlay: Option<&PropertyBag>,
        theme: &Theme,
    ) -> Option<StyleRecord> {
        match state {
            InteractionState::Hover => overlay.map(|bag| self.extended(bag)),
            InteractionState::Focus | InteractionState::Active => {
                Some(self.extended(&Self::pressed_bag(overlay)))
            }
            InteractionState::Disabled => overlay.map(|bag| {
                let mut bag = bag.clone();
                bag.text.color = bag.text.color.or_else(|| Some(theme.disabled_text.clone()));
                self.extended(&bag)
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::pipeline::{compose, fill_defaults, StyleInputs};
    use crate::style::record::StyleValue;
    use crate::style::scalar::Scalar;

    #[test]
    fn default_table() {
        let theme = Theme::default();
        let bag = fill_defaults(&TouchableOpacity, &theme, &PropertyBag::new());
        assert_eq!(bag.flex.direction, Some(Direction::Row));
        assert_eq!(bag.text.size, Some(Scalar::Num(15.0)));
        assert_eq!(bag.text.white_space, Some("nowrap".into()));
        assert!(bag.sizing.w.is_none());
    }

    #[test]
    fn focus_and_active_have_builtin_feedback() {
        let theme = Theme::default();
        let record = compose(&TouchableOpacity, &theme, &StyleInputs::new());
        for selector in ["&:focus", "&:active"] {
            let block = record.get_block(selector).unwrap();
            assert_eq!(block.get("opacity"), Some(&StyleValue::Number(0.75)));
            assert_eq!(
                block.get("transform"),
                Some(&StyleValue::Str("scale(0.98)".into()))
            );
        }
    }

    #[test]
    fn hover_only_when_supplied() {
        let theme = Theme::default();
        let record = compose(&TouchableOpacity, &theme, &StyleInputs::new());
        assert!(record.get_block("&:hover").is_none());
    }

    #[test]
    fn explicit_active_overlay_keeps_fallback_scale() {
        let theme = Theme::default();
        let inputs = StyleInputs::new().active(PropertyBag::new().opacity(0.5));
        let record = compose(&TouchableOpacity, &theme, &inputs);
        let active = record.get_block("&:active").unwrap();
        assert_eq!(active.get("opacity"), Some(&StyleValue::Number(0.5)));
        assert_eq!(
            active.get("transform"),
            Some(&StyleValue::Str("scale(0.98)".into()))
        );
    }

    #[test]
    fn disabled_overlay_defaults_text_color() {
        let theme = Theme::default();
        let inputs = StyleInputs::new().disabled(PropertyBag::new().fill("#eee"));
        let record = compose(&TouchableOpacity, &theme, &inputs);
        let disabled = record.get_block("&:disabled").unwrap();
        assert_eq!(disabled.get("color"), Some(&StyleValue::Str("#aaa".into())));
        assert_eq!(disabled.get("cursor"), Some(&StyleValue::Str("default".into())));
    }

    #[test]
    fn disabled_without_overlay_still_fixes_cursor() {
        let theme = Theme::default();
        let record = compose(&TouchableOpacity, &theme, &StyleInputs::new());
        let disabled = record.get_block("&:disabled").unwrap();
        assert_eq!(disabled.get("cursor"), Some(&StyleValue::Str("default".into())));
    }

    #[test]
    fn disabled_invocation_forces_base_cursor() {
        let theme = Theme::default();
        let inputs = StyleInputs::new().base(BaseProps {
            cursor: Some("pointer".into()),
            has_click: true,
            disabled: true,
            ..BaseProps::default()
        });
        let record = compose(&TouchableOpacity, &theme, &inputs);
        assert_eq!(record.get("cursor"), Some(&StyleValue::Str("default".into())));
    }

    #[test]
    fn padding_applies_margin_does_not() {
        let mut bag = PropertyBag::new();
        bag.padding = Edges::uniform(12);
        bag.margin = Edges::uniform(99);
        let record = TouchableOpacity.extended(&bag);
        assert_eq!(record.get("padding-top"), Some(&StyleValue::Px(12.0)));
        assert!(record.get("margin-top").is_none());
    }
}
