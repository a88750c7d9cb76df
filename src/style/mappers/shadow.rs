//! Box-shadow mapper.

use crate::style::props::ShadowProps;
use crate::style::record::StyleRecord;
use crate::style::scalar::Scalar;

/// Map a shadow to `box-shadow`. Unset offsets default to 0 within the
/// composed string; an entirely unset shadow emits nothing.
pub fn shadow_styles(shadow: &ShadowProps) -> StyleRecord {
    let mut record = StyleRecord::new();
    if shadow.is_empty() {
        return record;
    }

    let zero = Scalar::Num(0.0);
    let x = shadow.x.as_ref().unwrap_or(&zero);
    let y = shadow.y.as_ref().unwrap_or(&zero);
    let blur = shadow.blur.as_ref().unwrap_or(&zero);

    let mut value = format!(
        "{} {} {}",
        x.px_string(),
        y.px_string(),
        blur.px_string()
    );
    if let Some(spread) = &shadow.spread {
        value.push(' ');
        value.push_str(&spread.px_string());
    }
    if let Some(color) = &shadow.color {
        value.push(' ');
        value.push_str(color);
    }
    if shadow.inset == Some(true) {
        value.push_str(" inset");
    }

    record.set_str("box-shadow", value);
    record
}
