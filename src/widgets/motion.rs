//! MotionLayer: a Layer-shaped widget for animated content.
//!
//! Styling is identical to [`Layer`]; motion timing itself lives outside the
//! engine. Replay control flow (restarting an entrance transition on an
//! external signal) is modeled by [`crate::motion::Replay`].

use crate::style::props::PropertyBag;
use crate::style::record::StyleRecord;
use crate::style::theme::Theme;
use crate::widget::traits::Widget;
use crate::widgets::layer::Layer;

/// The MotionLayer widget.
#[derive(Debug, Default)]
pub struct MotionLayer;

impl Widget for MotionLayer {
    fn name(&self) -> &'static str {
        "MotionLayer"
    }

    fn defaults(&self, theme: &Theme) -> PropertyBag {
        Layer.defaults(theme)
    }

    fn finalize_bag(&self, bag: PropertyBag) -> PropertyBag {
        Layer.finalize_bag(bag)
    }

    fn extended(&self, bag: &PropertyBag) -> StyleRecord {
        Layer.extended(bag)
    }
}
