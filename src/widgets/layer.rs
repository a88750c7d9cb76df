//! Layer: the general-purpose container widget.
//!
//! Composes sizing, flex, position, spacing, background, border, shadow, and
//! transform. Defaults to full width and a column direction; a layer with
//! `flex == 1` and no explicit height defaults its height to `100%`.

use crate::style::mappers::{
    background_styles, border_styles, flex_styles, position_styles, shadow_styles, sizing_styles,
    space_styles, transform_styles,
};
use crate::style::props::{Direction, PropertyBag};
use crate::style::record::StyleRecord;
use crate::style::scalar::Scalar;
use crate::style::theme::Theme;
use crate::widget::traits::Widget;

/// The Layer widget.
#[derive(Debug, Default)]
pub struct Layer;

impl Widget for Layer {
    fn name(&self) -> &'static str {
        "Layer"
    }

    fn defaults(&self, _theme: &Theme) -> PropertyBag {
        PropertyBag::new().w("100%").direction(Direction::Column)
    }

    fn finalize_bag(&self, mut bag: PropertyBag) -> PropertyBag {
        if bag.flex.flex == Some(1.0) && bag.sizing.h.is_none() {
            bag.sizing.h = Some(Scalar::Raw("100%".into()));
        }
        bag
    }

    fn extended(&self, bag: &PropertyBag) -> StyleRecord {
        let mut record = sizing_styles(&bag.sizing);
        record.merge_in(&flex_styles(&bag.flex));
        record.merge_in(&position_styles(&bag.position));
        record.merge_in(&space_styles(&bag.padding, &bag.margin));
        record.merge_in(&background_styles(
            bag.fill.as_deref(),
            None,
            None,
            bag.opacity,
        ));
        record.merge_in(&border_styles(&bag.border));
        record.merge_in(&shadow_styles(&bag.shadow));
        record.merge_in(&transform_styles(&bag.transform));
        record
    }
}
