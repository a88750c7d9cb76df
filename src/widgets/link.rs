//! LinkHref: an anchor-shaped interactive widget.
//!
//! Shares TouchableOpacity's press feedback; its text defaults to the
//! theme's primary color.

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

const LINK_ATTRS: &[&str] = &[
    "id",
    "class",
    "title",
    "role",
    "tabindex",
    "aria-label",
    "aria-hidden",
    "data-testid",
    "href",
    "target",
    "rel",
    "download",
    "hreflang",
];

/// The LinkHref widget.
#[derive(Debug, Default)]
pub struct LinkHref;

impl Widget for LinkHref {
    fn name(&self) -> &'static str {
        "LinkHref"
    }

    fn defaults(&self, theme: &Theme) -> PropertyBag {
        PropertyBag::new()
            .direction(Direction::Row)
            .text_size(15)
            .text_color(theme.primary.clone())
            .white_space("nowrap")
    }

    fn base_defaults(&self) -> BaseProps {
        BaseProps {
            transition: Some(Transition::new(0.2)),
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
                let mut bag = overlay.cloned().unwrap_or_default();
                bag.opacity = bag.opacity.or(Some(0.75));
                bag.transform.scale = bag.transform.scale.or(Some(0.98));
                Some(self.extended(&bag))
            }
            InteractionState::Disabled => overlay.map(|bag| {
                let mut bag = bag.clone();
                bag.text.color = bag.text.color.or_else(|| Some(theme.disabled_text.clone()));
                self.extended(&bag)
            }),
        }
    }

    fn forwarded_attrs(&self) -> &'static [&'static str] {
        LINK_ATTRS
    }
}
