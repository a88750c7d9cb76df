//! Typography mapper.

use crate::style::props::Typography;
use crate::style::record::StyleRecord;

/// Map typography properties.
///
/// `ellipsis` emits the `overflow: hidden; text-overflow: ellipsis;
/// white-space: nowrap` bundle and wins over a separately requested
/// white-space.
pub fn typography_styles(text: &Typography) -> StyleRecord {
    let mut record = StyleRecord::new();
    if let Some(size) = &text.size {
        record.set("font-size", size.as_px());
    }
    if let Some(weight) = &text.weight {
        record.set("font-weight", weight.as_number());
    }
    if let Some(align) = &text.align {
        record.set_str("text-align", align.clone());
    }
    if let Some(color) = &text.color {
        record.set_str("color", color.clone());
    }
    if let Some(shadow) = &text.shadow {
        record.set_str("text-shadow", shadow.clone());
    }
    if let Some(transform) = &text.transform {
        record.set_str("text-transform", transform.clone());
    }
    if let Some(line_height) = &text.line_height {
        record.set("line-height", line_height.as_number());
    }
    if let Some(white_space) = &text.white_space {
        record.set_str("white-space", white_space.clone());
    }
    if let Some(decoration) = &text.decoration {
        record.set_str("text-decoration", decoration.clone());
    }
    if let Some(word_break) = &text.word_break {
        record.set_str("word-break", word_break.clone());
    }
    if let Some(word_wrap) = &text.word_wrap {
        record.set_str("word-wrap", word_wrap.clone());
    }
    if let Some(overflow_wrap) = &text.overflow_wrap {
        record.set_str("overflow-wrap", overflow_wrap.clone());
    }
    if text.ellipsis == Some(true) {
        record.set_str("overflow", "hidden");
        record.set_str("text-overflow", "ellipsis");
        record.set_str("white-space", "nowrap");
    }
    record
}
