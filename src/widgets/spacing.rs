//! Spacing: the outer-margin counterpart of Padding.

use crate::style::mappers::{sizing_styles, space_styles};
use crate::style::props::{Edges, PropertyBag};
use crate::style::record::StyleRecord;
use crate::style::theme::Theme;
use crate::widget::traits::Widget;

/// The Spacing widget.
#[derive(Debug, Default)]
pub struct Spacing;

impl Widget for Spacing {
    fn name(&self) -> &'static str {
        "Spacing"
    }

    fn defaults(&self, _theme: &Theme) -> PropertyBag {
        PropertyBag::new()
    }

    fn display(&self) -> Option<&'static str> {
        None
    }

    fn position_reset(&self) -> Option<&'static str> {
        None
    }

    fn extended(&self, bag: &PropertyBag) -> StyleRecord {
        let mut record = sizing_styles(&bag.sizing);
        record.merge_in(&space_styles(&Edges::default(), &bag.margin));
        record
    }
}
