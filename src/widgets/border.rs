//! Border: a rounded, optionally stroked frame.

use crate::style::mappers::{border_styles, sizing_styles};
use crate::style::props::PropertyBag;
use crate::style::record::StyleRecord;
use crate::style::theme::Theme;
use crate::widget::traits::Widget;

/// The Border widget.
#[derive(Debug, Default)]
pub struct Border;

impl Widget for Border {
    fn name(&self) -> &'static str {
        "Border"
    }

    fn defaults(&self, theme: &Theme) -> PropertyBag {
        PropertyBag::new().w("100%").radius(theme.radius)
    }

    fn extended(&self, bag: &PropertyBag) -> StyleRecord {
        let mut record = sizing_styles(&bag.sizing);
        record.merge_in(&border_styles(&bag.border));
        if let Some(fill) = &bag.fill {
            record.set_str("background-color", fill.clone());
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::pipeline::{compose, fill_defaults, StyleInputs};
    use crate::style::props::{BorderEdges, BorderProps, BorderShape};
    use crate::style::record::StyleValue;
    use crate::style::scalar::Scalar;

    #[test]
    fn default_radius_from_theme() {
        let theme = Theme::default();
        let bag = fill_defaults(&Border, &theme, &PropertyBag::new());
        assert_eq!(bag.border.radius, Some(Scalar::Num(16.0)));
        assert_eq!(bag.sizing.w, Some(Scalar::Raw("100%".into())));
    }

    #[test]
    fn explicit_radius_wins() {
        let theme = Theme::default();
        let bag = fill_defaults(&Border, &theme, &PropertyBag::new().radius(4));
        assert_eq!(bag.border.radius, Some(Scalar::Num(4.0)));
    }

    #[test]
    fn stroked_edge() {
        let theme = Theme::default();
        let bag = PropertyBag {
            border: BorderProps {
                stroke: Some(Scalar::Num(1.0)),
                color: Some("#e9e9e9".into()),
                position: Some(BorderEdges::Bottom),
                ..BorderProps::default()
            },
            ..PropertyBag::default()
        };
        let record = compose(&Border, &theme, &StyleInputs::from_bag(bag));
        assert_eq!(
            record.get("border-bottom"),
            Some(&StyleValue::Str("1px solid #e9e9e9".into()))
        );
    }

    #[test]
    fn circle_shape() {
        let theme = Theme::default();
        let bag = PropertyBag {
            border: BorderProps {
                shape: Some(BorderShape::Circle),
                ..BorderProps::default()
            },
            ..PropertyBag::default()
        };
        let record = compose(&Border, &theme, &StyleInputs::from_bag(bag));
        assert_eq!(
            record.get("border-radius"),
            Some(&StyleValue::Str("50%".into()))
        );
    }
}
