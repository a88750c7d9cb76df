//! Border mapper: radius, stroke, edge position, and shape.
//!
//! The radius default (16) belongs to widget default tables, never to this
//! mapper.

use crate::style::props::{BorderEdges, BorderProps, BorderShape};
use crate::style::record::StyleRecord;
use crate::style::scalar::Scalar;

/// Map border properties. A `circle` shape forces `border-radius: 50%`; a
/// stroke is written to the property selected by `position` (all edges when
/// unset), always solid.
pub fn border_styles(border: &BorderProps) -> StyleRecord {
    let mut record = StyleRecord::new();

    match border.shape {
        Some(BorderShape::Circle) => record.set_str("border-radius", "50%"),
        _ => {
            if let Some(radius) = &border.radius {
                record.set("border-radius", radius.as_px());
            }
        }
    }

    if let Some(stroke) = &border.stroke {
        let edges = border.position.unwrap_or(BorderEdges::All);
        let color = border.color.as_deref().unwrap_or("currentColor");
        record.set_str(
            edges.property(),
            format!("{} solid {color}", stroke.px_string()),
        );
    } else if let Some(color) = &border.color {
        record.set_str("border-color", color.clone());
    }

    record
}

/// Returns `true` when no border field is set (the mapper would emit nothing).
pub fn is_empty(border: &BorderProps) -> bool {
    border.stroke.is_none()
        && border.color.is_none()
        && border.radius.is_none()
        && border.position.is_none()
        && border.shape.is_none()
}
