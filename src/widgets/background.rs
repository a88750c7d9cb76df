//! Background: a decorated surface with fills, image fills, and filters.

use crate::style::mappers::{
    background_styles, border_styles, flex_styles, gradient_styles, shadow_styles, sizing_styles,
    transform_styles,
};
use crate::style::props::PropertyBag;
use crate::style::record::StyleRecord;
use crate::style::theme::Theme;
use crate::widget::traits::Widget;

/// The Background widget.
#[derive(Debug, Default)]
pub struct Background;

impl Widget for Background {
    fn name(&self) -> &'static str {
        "Background"
    }

    fn defaults(&self, _theme: &Theme) -> PropertyBag {
        PropertyBag::new().w("100%")
    }

    fn extended(&self, bag: &PropertyBag) -> StyleRecord {
        let mut record = sizing_styles(&bag.sizing);
        record.merge_in(&flex_styles(&bag.flex));
        record.merge_in(&background_styles(
            bag.fill.as_deref(),
            bag.image.as_ref(),
            bag.blur,
            bag.opacity,
        ));
        record.merge_in(&gradient_styles(&bag.gradient));
        record.merge_in(&border_styles(&bag.border));
        record.merge_in(&shadow_styles(&bag.shadow));
        record.merge_in(&transform_styles(&bag.transform));
        record
    }
}
