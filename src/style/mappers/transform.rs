//! Transform mapper: translate, scale, and rotate composed into one string.
//!
//! Parts join space-separated in a fixed translate → scale → rotate order,
//! and only present parts appear. Numbers take `px` (translate) or `deg`
//! (rotate); strings pass through unchanged.

use crate::style::props::TransformProps;
use crate::style::record::StyleRecord;
use crate::style::scalar::{fmt_number, Scalar};

/// Map transform parts to a single `transform` property.
pub fn transform_styles(transform: &TransformProps) -> StyleRecord {
    let mut record = StyleRecord::new();
    let mut parts: Vec<String> = Vec::new();

    if let Some(axis) = &transform.axis {
        let zero = Scalar::Raw("0".into());
        let x = axis.x.as_ref().unwrap_or(&zero);
        let y = axis.y.as_ref().unwrap_or(&zero);
        parts.push(format!("translate({}, {})", x.px_string(), y.px_string()));
    }
    if let Some(scale) = transform.scale {
        parts.push(format!("scale({})", fmt_number(scale)));
    }
    if let Some(rotate) = &transform.rotate {
        parts.push(format!("rotate({})", rotate.deg_string()));
    }

    if !parts.is_empty() {
        record.set_str("transform", parts.join(" "));
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::props::Axis;
    use crate::style::record::StyleValue;

    fn value(transform: &TransformProps) -> Option<String> {
        transform_styles(transform)
            .get("transform")
            .and_then(StyleValue::css_text)
    }

    #[test]
    fn empty_transform_emits_nothing() {
        assert!(transform_styles(&TransformProps::default()).is_empty());
    }

    #[test]
    fn translate_from_axis() {
        let transform = TransformProps {
            axis: Some(Axis {
                x: Some(Scalar::Num(10.0)),
                y: Some(Scalar::Raw("-50%".into())),
            }),
            ..TransformProps::default()
        };
        assert_eq!(value(&transform), Some("translate(10px, -50%)".into()));
    }

    #[test]
    fn missing_axis_component_defaults_to_zero() {
        let transform = TransformProps {
            axis: Some(Axis {
                x: Some(Scalar::Num(4.0)),
                y: None,
            }),
            ..TransformProps::default()
        };
        assert_eq!(value(&transform), Some("translate(4px, 0)".into()));
    }

    #[test]
    fn scale_alone() {
        let transform = TransformProps {
            scale: Some(0.98),
            ..TransformProps::default()
        };
        assert_eq!(value(&transform), Some("scale(0.98)".into()));
    }

    #[test]
    fn numeric_rotate_gets_degrees() {
        let transform = TransformProps {
            rotate: Some(Scalar::Num(45.0)),
            ..TransformProps::default()
        };
        assert_eq!(value(&transform), Some("rotate(45deg)".into()));
    }

    #[test]
    fn string_rotate_passes_through() {
        let transform = TransformProps {
            rotate: Some(Scalar::Raw("0.5turn".into())),
            ..TransformProps::default()
        };
        assert_eq!(value(&transform), Some("rotate(0.5turn)".into()));
    }

    #[test]
    fn parts_compose_in_fixed_order() {
        let transform = TransformProps {
            axis: Some(Axis {
                x: Some(Scalar::Num(1.0)),
                y: Some(Scalar::Num(2.0)),
            }),
            scale: Some(1.5),
            rotate: Some(Scalar::Num(90.0)),
        };
        assert_eq!(
            value(&transform),
            Some("translate(1px, 2px) scale(1.5) rotate(90deg)".into())
        );
    }
}
