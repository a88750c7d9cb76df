//! Button: the interactive call-to-action widget.
//!
//! Fully themed by default: fixed size, primary fill, rounded corners,
//! centered label. Hover and active states dim by default; the disabled
//! state swaps to the theme's disabled palette.

use crate::style::base::{BaseProps, Transition};
use crate::style::mappers::{
    background_styles, border_styles, gradient_styles, shadow_styles, sizing_styles,
    transform_styles, typography_styles,
};
use crate::style::overlay::InteractionState;
use crate::style::props::{GradientKind, PropertyBag};
use crate::style::record::StyleRecord;
use crate::style::theme::Theme;
use crate::widget::traits::Widget;

const BUTTON_ATTRS: &[&str] = &[
    "id",
    "class",
    "title",
    "role",
    "tabindex",
    "aria-label",
    "aria-hidden",
    "data-testid",
    "type",
    "name",
    "value",
    "form",
    "autofocus",
    "disabled",
];

/// The Button widget.
#[derive(Debug, Default)]
pub struct Button;

impl Widget for Button {
    fn name(&self) -> &'static str {
        "Button"
    }

    fn defaults(&self, theme: &Theme) -> PropertyBag {
        let mut bag = PropertyBag::new()
            .w(100)
            .h(48)
            .fill(theme.primary.clone())
            .radius(theme.button_radius)
            .text_size(15)
            .text_color(theme.button_text.clone())
            .text_align("center")
            .white_space("nowrap");
        bag.gradient.kind = Some(GradientKind::Linear);
        bag
    }

    fn display(&self) -> Option<&'static str> {
        Some("inline-block")
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
        record.merge_in(&typography_styles(&bag.text));
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
            InteractionState::Hover => {
                let mut bag = overlay.cloned().unwrap_or_default();
                bag.opacity = bag.opacity.or(Some(0.9));
                Some(self.extended(&bag))
            }
            InteractionState::Focus => overlay.map(|bag| self.extended(bag)),
            InteractionState::Active => {
                let mut bag = overlay.cloned().unwrap_or_default();
                bag.opacity = bag.opacity.or(Some(0.75));
                Some(self.extended(&bag))
            }
            InteractionState::Disabled => {
                let mut bag = overlay.cloned().unwrap_or_default();
                bag.fill = Some(theme.disabled_fill.clone());
                bag.text.color = bag.text.color.or_else(|| Some(theme.disabled_text.clone()));
                Some(self.extended(&bag))
            }
        }
    }

    fn forwarded_attrs(&self) -> &'static [&'static str] {
        BUTTON_ATTRS
    }
}
