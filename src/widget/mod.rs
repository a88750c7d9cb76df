//! Widget trait, forwarded-attribute filtering, and the widget registry.

pub mod registry;
pub mod traits;

pub use registry::{ComposeError, Engine};
pub use traits::{filter_forwarded, Widget, GLOBAL_ATTRS};
