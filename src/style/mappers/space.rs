//! Sizing and spacing mappers.

use crate::style::props::{Edges, Sizing};
use crate::style::record::StyleRecord;

/// Map box dimensions to width/height properties.
pub fn sizing_styles(sizing: &Sizing) -> StyleRecord {
    let mut record = StyleRecord::new();
    if let Some(w) = &sizing.w {
        record.set("width", w.as_px());
    }
    if let Some(max_w) = &sizing.max_w {
        record.set("max-width", max_w.as_px());
    }
    if let Some(min_w) = &sizing.min_w {
        record.set("min-width", min_w.as_px());
    }
    if let Some(h) = &sizing.h {
        record.set("height", h.as_px());
    }
    if let Some(max_h) = &sizing.max_h {
        record.set("max-height", max_h.as_px());
    }
    if let Some(min_h) = &sizing.min_h {
        record.set("min-height", min_h.as_px());
    }
    record
}

/// Map padding and margin edges independently, with the same resolution
/// precedence for both: edge > axis > `all`.
pub fn space_styles(padding: &Edges, margin: &Edges) -> StyleRecord {
    let mut record = StyleRecord::new();
    emit_edges(&mut record, "padding", padding);
    emit_edges(&mut record, "margin", margin);
    record
}

fn emit_edges(record: &mut StyleRecord, prefix: &str, edges: &Edges) {
    if let Some(top) = edges.resolved_top() {
        record.set(format!("{prefix}-top"), top.as_px());
    }
    if let Some(right) = edges.resolved_right() {
        record.set(format!("{prefix}-right"), right.as_px());
    }
    if let Some(bottom) = edges.resolved_bottom() {
        record.set(format!("{prefix}-bottom"), bottom.as_px());
    }
    if let Some(left) = edges.resolved_left() {
        record.set(format!("{prefix}-left"), left.as_px());
    }
}
