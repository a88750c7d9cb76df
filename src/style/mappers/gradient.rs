//! Gradient mapper.
//!
//! An absent gradient (no kind or no stops) emits nothing. The `linear` kind
//! default is applied by widget default tables, not here.

use crate::style::props::Gradient;
use crate::style::record::StyleRecord;

/// Map a gradient to `background-image`.
pub fn gradient_styles(gradient: &Gradient) -> StyleRecord {
    let mut record = StyleRecord::new();
    let Some(kind) = gradient.kind else {
        return record;
    };
    if gradient.stops.is_empty() {
        return record;
    }

    let mut parts: Vec<String> = Vec::with_capacity(gradient.stops.len() + 1);
    if let Some(direction) = &gradient.direction {
        parts.push(direction.clone());
    }
    for stop in &gradient.stops {
        match &stop.position {
            Some(position) => parts.push(format!("{} {}", stop.color, position.px_string())),
            None => parts.push(stop.color.clone()),
        }
    }

    record.set_str(
        "background-image",
        format!("{}({})", kind.function_name(), parts.join(", ")),
    );
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::props::{GradientKind, GradientStop};
    use crate::style::record::StyleValue;
    use crate::style::scalar::Scalar;

    #[test]
    fn absent_gradient_emits_nothing() {
        assert!(gradient_styles(&Gradient::default()).is_empty());
    }

    #[test]
    fn kind_without_stops_emits_nothing() {
        let gradient = Gradient {
            kind: Some(GradientKind::Linear),
            ..Gradient::default()
        };
        assert!(gradient_styles(&gradient).is_empty());
    }

    #[test]
    fn linear_with_stops() {
        let gradient = Gradient {
            kind: Some(GradientKind::Linear),
            direction: Some("to right".into()),
            stops: vec![GradientStop::new("#5b94f0"), GradientStop::new("#fbfbfb")],
        };
        let record = gradient_styles(&gradient);
        assert_eq!(
            record.get("background-image"),
            Some(&StyleValue::Str(
                "linear-gradient(to right, #5b94f0, #fbfbfb)".into()
            ))
        );
    }

    #[test]
    fn stops_with_positions() {
        let gradient = Gradient {
            kind: Some(GradientKind::Linear),
            direction: None,
            stops: vec![
                GradientStop::at("#000", Scalar::Raw("0%".into())),
                GradientStop::at("#fff", Scalar::Raw("100%".into())),
            ],
        };
        let record = gradient_styles(&gradient);
        assert_eq!(
            record.get("background-image"),
            Some(&StyleValue::Str("linear-gradient(#000 0%, #fff 100%)".into()))
        );
    }

    #[test]
    fn radial_and_conic_function_names() {
        let mut gradient = Gradient {
            kind: Some(GradientKind::Radial),
            direction: None,
            stops: vec![GradientStop::new("red"), GradientStop::new("blue")],
        };
        assert_eq!(
            gradient_styles(&gradient).get("background-image"),
            Some(&StyleValue::Str("radial-gradient(red, blue)".into()))
        );
        gradient.kind = Some(GradientKind::Conic);
        assert_eq!(
            gradient_styles(&gradient).get("background-image"),
            Some(&StyleValue::Str("conic-gradient(red, blue)".into()))
        );
    }
}
