//! Flex: a flexbox container with the full flex property set.

use crate::style::mappers::{flex_styles, sizing_styles};
use crate::style::props::{Direction, PropertyBag};
use crate::style::record::StyleRecord;
use crate::style::theme::Theme;
use crate::widget::traits::Widget;

/// The Flex widget.
#[derive(Debug, Default)]
pub struct Flex;

impl Widget for Flex {
    fn name(&self) -> &'static str {
        "Flex"
    }

    fn defaults(&self, _theme: &Theme) -> PropertyBag {
        PropertyBag::new().w("100%").direction(Direction::Column)
    }

    fn extended(&self, bag: &PropertyBag) -> StyleRecord {
        let mut record = sizing_styles(&bag.sizing);
        record.merge_in(&flex_styles(&bag.flex));
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::pipeline::{compose, fill_defaults, StyleInputs};
    use crate::style::props::FlexProps;
    use crate::style::record::StyleValue;
    use crate::style::scalar::Scalar;

    #[test]
    fn defaults_full_width_column() {
        let theme = Theme::default();
        let bag = fill_defaults(&Flex, &theme, &PropertyBag::new());
        assert_eq!(bag.sizing.w, Some(Scalar::Raw("100%".into())));
        assert_eq!(bag.flex.direction, Some(Direction::Column));
    }

    #[test]
    fn composes_with_display_flex_in_base() {
        let theme = Theme::default();
        let record = compose(&Flex, &theme, &StyleInputs::new());
        assert_eq!(record.get("display"), Some(&StyleValue::Str("flex".into())));
        assert_eq!(
            record.get("flex-direction"),
            Some(&StyleValue::Str("column".into()))
        );
    }

    #[test]
    fn item_properties_pass_through() {
        let bag = PropertyBag {
            flex: FlexProps {
                grow: Some(1.0),
                shrink: Some(0.0),
                basis: Some(Scalar::Raw("200px".into())),
                ..FlexProps::default()
            },
            ..PropertyBag::default()
        };
        let record = Flex.extended(&bag);
        assert_eq!(record.get("flex-grow"), Some(&StyleValue::Number(1.0)));
        assert_eq!(
            record.get("flex-basis"),
            Some(&StyleValue::Str("200px".into()))
        );
    }

    #[test]
    fn no_state_blocks() {
        let theme = Theme::default();
        let record = compose(&Flex, &theme, &StyleInputs::new());
        assert!(record.get("&:hover").is_none());
        assert!(record.get("&:active").is_none());
    }
}
