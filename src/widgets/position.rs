//! Position: offset placement with an optional translate.

use crate::style::mappers::{position_styles, sizing_styles, transform_styles};
use crate::style::props::PropertyBag;
use crate::style::record::StyleRecord;
use crate::style::theme::Theme;
use crate::widget::traits::Widget;

/// The Position widget.
#[derive(Debug, Default)]
pub struct Position;

impl Widget for Position {
    fn name(&self) -> &'static str {
        "Position"
    }

    fn defaults(&self, _theme: &Theme) -> PropertyBag {
        PropertyBag::new()
    }

    fn position_reset(&self) -> Option<&'static str> {
        // The positioning scheme is the widget's whole point; no reset.
        None
    }

    fn extended(&self, bag: &PropertyBag) -> StyleRecord {
        let mut record = sizing_styles(&bag.sizing);
        record.merge_in(&position_styles(&bag.position));
        record.merge_in(&transform_styles(&bag.transform));
        record
    }
}
