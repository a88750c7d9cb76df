//! Positioning mapper: scheme and edge offsets.
//!
//! Translation offsets (`axis`) belong to the transform mapper so that
//! translate, scale, and rotate always compose into one `transform` string.

use crate::style::props::PositionProps;
use crate::style::record::StyleRecord;

/// Map position scheme and offsets.
pub fn position_styles(position: &PositionProps) -> StyleRecord {
    let mut record = StyleRecord::new();
    if let Some(kind) = position.kind {
        record.set_str("position", kind.as_css());
    }
    if let Some(top) = &position.top {
        record.set("top", top.as_px());
    }
    if let Some(right) = &position.right {
        record.set("right", right.as_px());
    }
    if let Some(bottom) = &position.bottom {
        record.set("bottom", bottom.as_px());
    }
    if let Some(left) = &position.left {
        record.set("left", left.as_px());
    }
    record
}
