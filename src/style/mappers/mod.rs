//! Primitive style mappers: one pure function per styling concern.
//!
//! Each mapper converts one concern's sub-record into a [`StyleRecord`]
//! fragment. Absent fields produce no output keys, mappers never fail, and
//! malformed values pass through uninterpreted: validation belongs to the
//! caller, not the engine.
//!
//! [`StyleRecord`]: crate::style::record::StyleRecord

pub mod background;
pub mod border;
pub mod flex;
pub mod gradient;
pub mod grid;
pub mod position;
pub mod shadow;
pub mod space;
pub mod transform;
pub mod typography;

pub use background::background_styles;
pub use border::border_styles;
pub use flex::flex_styles;
pub use gradient::gradient_styles;
pub use grid::grid_styles;
pub use position::position_styles;
pub use shadow::shadow_styles;
pub use space::{sizing_styles, space_styles};
pub use transform::transform_styles;
pub use typography::typography_styles;
