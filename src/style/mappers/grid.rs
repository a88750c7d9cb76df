//! Grid container mapper. Like the flex mapper, `display` is the widget's.

use crate::style::props::GridProps;
use crate::style::record::StyleRecord;

/// Map grid properties to their CSS counterparts.
pub fn grid_styles(grid: &GridProps) -> StyleRecord {
    let mut record = StyleRecord::new();
    if let Some(columns) = &grid.template_columns {
        record.set_str("grid-template-columns", columns.clone());
    }
    if let Some(rows) = &grid.template_rows {
        record.set_str("grid-template-rows", rows.clone());
    }
    if let Some(areas) = &grid.template_areas {
        record.set_str("grid-template-areas", areas.clone());
    }
    if let Some(gap) = &grid.gap {
        record.set("gap", gap.as_px());
    }
    if let Some(auto_flow) = &grid.auto_flow {
        record.set_str("grid-auto-flow", auto_flow.clone());
    }
    if let Some(auto_columns) = &grid.auto_columns {
        record.set_str("grid-auto-columns", auto_columns.clone());
    }
    if let Some(auto_rows) = &grid.auto_rows {
        record.set_str("grid-auto-rows", auto_rows.clone());
    }
    if let Some(justify_items) = &grid.justify_items {
        record.set_str("justify-items", justify_items.clone());
    }
    if let Some(align_items) = &grid.align_items {
        record.set_str("align-items", align_items.clone());
    }
    if let Some(justify_content) = &grid.justify_content {
        record.set_str("justify-content", justify_content.clone());
    }
    if let Some(align_content) = &grid.align_content {
        record.set_str("align-content", align_content.clone());
    }
    record
}
