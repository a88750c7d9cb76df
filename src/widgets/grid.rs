//! Grid: a CSS grid container.

use crate::style::mappers::{grid_styles, sizing_styles};
use crate::style::props::PropertyBag;
use crate::style::record::StyleRecord;
use crate::style::theme::Theme;
use crate::widget::traits::Widget;

/// The Grid widget.
#[derive(Debug, Default)]
pub struct Grid;

impl Widget for Grid {
    fn name(&self) -> &'static str {
        "Grid"
    }

    fn defaults(&self, _theme: &Theme) -> PropertyBag {
        PropertyBag::new().w("100%")
    }

    fn display(&self) -> Option<&'static str> {
        Some("grid")
    }

    fn extended(&self, bag: &PropertyBag) -> StyleRecord {
        let mut record = sizing_styles(&bag.sizing);
        record.merge_in(&grid_styles(&bag.grid));
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::pipeline::{compose, StyleInputs};
    use crate::style::props::GridProps;
    use crate::style::record::StyleValue;
    use crate::style::scalar::Scalar;

    #[test]
    fn base_display_is_grid() {
        let theme = Theme::default();
        let record = compose(&Grid, &theme, &StyleInputs::new());
        assert_eq!(record.get("display"), Some(&StyleValue::Str("grid".into())));
        assert_eq!(record.get("width"), Some(&StyleValue::Str("100%".into())));
    }

    #[test]
    fn template_and_gap() {
        let bag = PropertyBag {
            grid: GridProps {
                template_columns: Some("repeat(2, 1fr)".into()),
                gap: Some(Scalar::Num(24.0)),
                ..GridProps::default()
            },
            ..PropertyBag::default()
        };
        let record = Grid.extended(&bag);
        assert_eq!(
            record.get("grid-template-columns"),
            Some(&StyleValue::Str("repeat(2, 1fr)".into()))
        );
        assert_eq!(record.get("gap"), Some(&StyleValue::Px(24.0)));
    }

    #[test]
    fn responsive_grid_rewrites_columns() {
        let theme = Theme::default();
        let narrow = PropertyBag {
            grid: GridProps {
                template_columns: Some("1fr".into()),
                ..GridProps::default()
            },
            ..PropertyBag::default()
        };
        let inputs = StyleInputs::new().mq(768, narrow);
        let record = compose(&Grid, &theme, &inputs);
        let block = record.get_block("@media (max-width: 768px)").unwrap();
        assert_eq!(
            block.get("grid-template-columns"),
            Some(&StyleValue::Str("1fr".into()))
        );
    }
}
