//! Background mapper: fill color, image fill, blur filter, and opacity.
//!
//! Gradients have their own mapper; widgets that support both compose the
//! two.

use crate::style::props::ImageFill;
use crate::style::record::StyleRecord;
use crate::style::scalar::fmt_number;

/// Map fill/image/blur/opacity to their CSS counterparts.
pub fn background_styles(
    fill: Option<&str>,
    image: Option<&ImageFill>,
    blur: Option<f64>,
    opacity: Option<f64>,
) -> StyleRecord {
    let mut record = StyleRecord::new();
    if let Some(fill) = fill {
        record.set_str("background-color", fill);
    }
    if let Some(image) = image {
        if let Some(url) = &image.url {
            record.set_str("background-image", format!("url({url})"));
        }
        if let Some(size) = &image.size {
            record.set_str("background-size", size.clone());
        }
        if let Some(position) = &image.position {
            record.set_str("background-position", position.clone());
        }
        if let Some(repeat) = &image.repeat {
            record.set_str("background-repeat", repeat.clone());
        }
        if let Some(clip) = &image.clip {
            record.set_str("background-clip", clip.clone());
        }
    }
    if let Some(blur) = blur {
        record.set_str("filter", format!("blur({}px)", fmt_number(blur)));
    }
    if let Some(opacity) = opacity {
        record.set_num("opacity", opacity);
    }
    record
}
