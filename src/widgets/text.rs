//! Text: the typography widget.
//!
//! Emits no display or position reset of its own; a text run inherits its
//! flow context. Word-wrapping defaults keep CJK-friendly line breaking.

use crate::style::base::{BaseProps, Transition};
use crate::style::mappers::{sizing_styles, space_styles, transform_styles, typography_styles};
use crate::style::props::PropertyBag;
use crate::style::record::StyleRecord;
use crate::style::theme::Theme;
use crate::widget::traits::Widget;

/// The Text widget.
#[derive(Debug, Default)]
pub struct Text;

impl Widget for Text {
    fn name(&self) -> &'static str {
        "Text"
    }

    fn defaults(&self, theme: &Theme) -> PropertyBag {
        let mut bag = PropertyBag::new()
            .text_size(15)
            .text_color(theme.text.clone())
            .text_align("start")
            .white_space("pre-line");
        bag.text.word_break = Some("keep-all".into());
        bag.text.word_wrap = Some("break-word".into());
        bag.text.overflow_wrap = Some("break-word".into());
        bag
    }

    fn display(&self) -> Option<&'static str> {
        None
    }

    fn position_reset(&self) -> Option<&'static str> {
        None
    }

    fn base_defaults(&self) -> BaseProps {
        BaseProps {
            transition: Some(Transition::new(0.25)),
            ..BaseProps::default()
        }
    }

    fn extended(&self, bag: &PropertyBag) -> StyleRecord {
        let mut record = sizing_styles(&bag.sizing);
        record.merge_in(&space_styles(&bag.padding, &bag.margin));
        record.merge_in(&typography_styles(&bag.text));
        record.merge_in(&transform_styles(&bag.transform));
        if let Some(opacity) = bag.opacity {
            record.set_num("opacity", opacity);
        }
        record
    }
}
