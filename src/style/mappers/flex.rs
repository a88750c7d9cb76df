//! Flex container and item mapper.
//!
//! Does not emit `display: flex`; each widget owns its own display mode.

use crate::style::props::FlexProps;
use crate::style::record::StyleRecord;

/// Map flex properties to their CSS counterparts.
pub fn flex_styles(flex: &FlexProps) -> StyleRecord {
    let mut record = StyleRecord::new();
    if let Some(f) = flex.flex {
        record.set_num("flex", f);
    }
    if let Some(direction) = flex.direction {
        let reverse = flex.reverse.unwrap_or(false);
        record.set_str("flex-direction", direction.as_css(reverse));
    }
    if let Some(align) = &flex.align {
        record.set_str("align-items", align.clone());
    }
    if let Some(justify) = &flex.justify {
        record.set_str("justify-content", justify.clone());
    }
    if let Some(gap) = &flex.gap {
        record.set("gap", gap.as_px());
    }
    if let Some(wrap) = &flex.wrap {
        record.set_str("flex-wrap", wrap.clone());
    }
    if let Some(order) = flex.order {
        record.set_num("order", f64::from(order));
    }
    if let Some(grow) = flex.grow {
        record.set_num("flex-grow", grow);
    }
    if let Some(shrink) = flex.shrink {
        record.set_num("flex-shrink", shrink);
    }
    if let Some(basis) = &flex.basis {
        record.set("flex-basis", basis.as_px());
    }
    if let Some(align_content) = &flex.align_content {
        record.set_str("align-content", align_content.clone());
    }
    if let Some(align_self) = &flex.align_self {
        record.set_str("align-self", align_self.clone());
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::props::Direction;
    use crate::style::record::StyleValue;
    use crate::style::scalar::Scalar;

    #[test]
    fn empty_props_emit_nothing() {
        assert!(flex_styles(&FlexProps::default()).is_empty());
    }

    #[test]
    fn flex_number_is_unitless() {
        let props = FlexProps {
            flex: Some(1.0),
            ..FlexProps::default()
        };
        let record = flex_styles(&props);
        assert_eq!(record.get("flex"), Some(&StyleValue::Number(1.0)));
    }

    #[test]
    fn direction_combines_with_reverse() {
        let props = FlexProps {
            direction: Some(Direction::Row),
            reverse: Some(true),
            ..FlexProps::default()
        };
        let record = flex_styles(&props);
        assert_eq!(
            record.get("flex-direction"),
            Some(&StyleValue::Str("row-reverse".into()))
        );
    }

    #[test]
    fn reverse_alone_emits_no_direction() {
        let props = FlexProps {
            reverse: Some(true),
            ..FlexProps::default()
        };
        assert!(flex_styles(&props).get("flex-direction").is_none());
    }

    #[test]
    fn gap_takes_px() {
        let props = FlexProps {
            gap: Some(Scalar::Num(12.0)),
            ..FlexProps::default()
        };
        assert_eq!(flex_styles(&props).get("gap"), Some(&StyleValue::Px(12.0)));
    }

    #[test]
    fn item_properties() {
        let props = FlexProps {
            order: Some(2),
            grow: Some(1.0),
            shrink: Some(0.0),
            basis: Some(Scalar::Raw("auto".into())),
            align_self: Some("stretch".into()),
            ..FlexProps::default()
        };
        let record = flex_styles(&props);
        assert_eq!(record.get("order"), Some(&StyleValue::Number(2.0)));
        assert_eq!(record.get("flex-grow"), Some(&StyleValue::Number(1.0)));
        assert_eq!(record.get("flex-shrink"), Some(&StyleValue::Number(0.0)));
        assert_eq!(record.get("flex-basis"), Some(&StyleValue::Str("auto".into())));
        assert_eq!(record.get("align-self"), Some(&StyleValue::Str("stretch".into())));
    }

    #[test]
    fn container_properties() {
        let props = FlexProps {
            align: Some("center".into()),
            justify: Some("space-between".into()),
            wrap: Some("wrap".into()),
            align_content: Some("flex-start".into()),
            ..FlexProps::default()
        };
        let record = flex_styles(&props);
        assert_eq!(record.get("align-items"), Some(&StyleValue::Str("center".into())));
        assert_eq!(
            record.get("justify-content"),
            Some(&StyleValue::Str("space-between".into()))
        );
        assert_eq!(record.get("flex-wrap"), Some(&StyleValue::Str("wrap".into())));
        assert_eq!(
            record.get("align-content"),
            Some(&StyleValue::Str("flex-start".into()))
        );
    }
}
