//! Divider: a thin rule, horizontal or vertical.
//!
//! Orientation drives the derived sizing: a horizontal divider stretches to
//! full width and treats `h` as its thickness (default 1); a vertical
//! divider inverts this. The resolved dimension is pinned with matching
//! min/max values so flex layouts cannot squash the rule.

use crate::style::mappers::{border_styles, sizing_styles, space_styles};
use crate::style::props::{Direction, Edges, PropertyBag};
use crate::style::record::StyleRecord;
use crate::style::scalar::Scalar;
use crate::style::theme::Theme;
use crate::widget::traits::Widget;

/// The Divider widget.
#[derive(Debug, Default)]
pub struct Divider;

impl Widget for Divider {
    fn name(&self) -> &'static str {
        "Divider"
    }

    fn defaults(&self, theme: &Theme) -> PropertyBag {
        PropertyBag::new()
            .fill(theme.divider.clone())
            .direction(Direction::Row)
    }

    fn finalize_bag(&self, mut bag: PropertyBag) -> PropertyBag {
        let full = Scalar::Raw("100%".into());
        let thickness = Scalar::Num(1.0);
        let (w, h) = match bag.flex.direction {
            Some(Direction::Column) => (
                bag.sizing.w.clone().unwrap_or(thickness),
                bag.sizing.h.clone().unwrap_or(full),
            ),
            _ => (
                bag.sizing.w.clone().unwrap_or(full),
                bag.sizing.h.clone().unwrap_or(thickness),
            ),
        };
        bag.sizing.w = Some(w.clone());
        bag.sizing.min_w = Some(w.clone());
        bag.sizing.max_w = Some(w);
        bag.sizing.h = Some(h.clone());
        bag.sizing.min_h = Some(h.clone());
        bag.sizing.max_h = Some(h);
        bag
    }

    fn uses_base(&self) -> bool {
        false
    }

    fn extended(&self, bag: &PropertyBag) -> StyleRecord {
        let mut record = StyleRecord::new();
        if let Some(fill) = &bag.fill {
            record.set_str("background-color", fill.clone());
        }
        record.set_str("transition", "0.25s ease-in-out");
        record.merge_in(&border_styles(&bag.border));
        record.merge_in(&space_styles(&Edges::default(), &bag.margin));
        record.merge_in(&sizing_styles(&bag.sizing));
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::pipeline::{compose, fill_defaults, StyleInputs};
    use crate::style::record::StyleValue;

    #[test]
    fn horizontal_defaults() {
        let theme = Theme::default();
        let bag = fill_defaults(&Divider, &theme, &PropertyBag::new());
        assert_eq!(bag.sizing.w, Some(Scalar::Raw("100%".into())));
        assert_eq!(bag.sizing.max_w, Some(Scalar::Raw("100%".into())));
        assert_eq!(bag.sizing.h, Some(Scalar::Num(1.0)));
        assert_eq!(bag.sizing.min_h, Some(Scalar::Num(1.0)));
        assert_eq!(bag.fill, Some("#e9e9e9".into()));
    }

    #[test]
    fn vertical_divider_inverts_sizing() {
        let theme = Theme::default();
        let vertical = PropertyBag::new().direction(Direction::Column);
        let bag = fill_defaults(&Divider, &theme, &vertical);
        assert_eq!(bag.sizing.h, Some(Scalar::Raw("100%".into())));
        assert_eq!(bag.sizing.w, Some(Scalar::Num(1.0)));
        assert_eq!(bag.sizing.min_w, Some(Scalar::Num(1.0)));
        assert_eq!(bag.sizing.max_w, Some(Scalar::Num(1.0)));
    }

    #[test]
    fn explicit_thickness_is_kept() {
        let theme = Theme::default();
        let bag = fill_defaults(&Divider, &theme, &PropertyBag::new().h(4));
        assert_eq!(bag.sizing.h, Some(Scalar::Num(4.0)));
        assert_eq!(bag.sizing.max_h, Some(Scalar::Num(4.0)));
    }

    #[test]
    fn no_base_layer() {
        let theme = Theme::default();
        let record = compose(&Divider, &theme, &StyleInputs::new());
        assert!(record.get("display").is_none());
        assert!(record.get("list-style").is_none());
        assert_eq!(
            record.get("transition"),
            Some(&StyleValue::Str("0.25s ease-in-out".into()))
        );
    }

    #[test]
    fn spacing_maps_to_margins_with_edge_precedence() {
        let theme = Theme::default();
        let mut bag = PropertyBag::new();
        bag.margin = Edges {
            all: Some(Scalar::Num(10.0)),
            top: Some(Scalar::Num(5.0)),
            ..Edges::default()
        };
        let record = compose(&Divider, &theme, &StyleInputs::from_bag(bag));
        assert_eq!(record.get("margin-top"), Some(&StyleValue::Px(5.0)));
        assert_eq!(record.get("margin-bottom"), Some(&StyleValue::Px(10.0)));
    }

    #[test]
    fn radius_applies() {
        let theme = Theme::default();
        let inputs = StyleInputs::from_bag(PropertyBag::new().radius(2));
        let record = compose(&Divider, &theme, &inputs);
        assert_eq!(record.get("border-radius"), Some(&StyleValue::Px(2.0)));
    }
}
