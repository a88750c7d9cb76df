//! Padding: a full-width wrapper whose only job is inner spacing.

use crate::style::mappers::{sizing_styles, space_styles};
use crate::style::props::{Edges, PropertyBag};
use crate::style::record::StyleRecord;
use crate::style::theme::Theme;
use crate::widget::traits::Widget;

/// The Padding widget.
#[derive(Debug, Default)]
pub struct Padding;

impl Widget for Padding {
    fn name(&self) -> &'static str {
        "Padding"
    }

    fn defaults(&self, _theme: &Theme) -> PropertyBag {
        PropertyBag::new().w("100%")
    }

    fn extended(&self, bag: &PropertyBag) -> StyleRecord {
        let mut record = sizing_styles(&bag.sizing);
        record.merge_in(&space_styles(&bag.padding, &Edges::default()));
        record
    }
}
