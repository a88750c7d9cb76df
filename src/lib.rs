//! # lamina
//!
//! A declarative, responsive style-composition engine for layout widgets.
//!
//! lamina takes a flat bag of semantic style properties (sizing, flex, grid,
//! spacing, fills, borders, shadows, transforms, typography) plus optional
//! responsive-breakpoint and interaction-state overlays, and deterministically
//! produces one merged, renderer-agnostic style record (nested pseudo and
//! media blocks included) plus CSS text and JSON serializations.
//!
//! ## Core Systems
//!
//! - **[`style`]** — The engine: scalar values, property bags, primitive
//!   mappers, base styles, overlays, raw overrides, and the merge pipeline
//! - **[`widget`]** — The widget trait, forwarded-attribute allow-lists, and
//!   the registry ([`Engine`])
//! - **[`widgets`]** — Built-in widgets with their default tables: Layer,
//!   Flex, Grid, Button, Text, TouchableOpacity, LinkHref, Divider, Position,
//!   Padding, Spacing, Background, Border, MotionLayer
//! - **[`motion`]** — The animation-replay state machine (control flow only)
//!
//! ## Layering
//!
//! Styles merge in a fixed precedence order: base < extended (defaults
//! filled) < responsive overlay < state overlay < caller raw override. Later
//! layers only add or overwrite; an unset overlay field never deletes an
//! earlier value.
//!
//! ```
//! use lamina::style::pipeline::StyleInputs;
//! use lamina::style::props::PropertyBag;
//! use lamina::widget::Engine;
//!
//! let engine = Engine::default();
//! let inputs = StyleInputs::from_bag(PropertyBag::new().w(320).fill("#222"))
//!     .mq(768, PropertyBag::new().w("100%"));
//! let record = engine.compose("Layer", &inputs).unwrap();
//! assert!(record.to_css(".hero").contains("@media (max-width: 768px)"));
//! ```

// The engine
pub mod style;

// Widget system
pub mod widget;
pub mod widgets;

// Motion control flow
pub mod motion;

pub use style::base::{BaseProps, Transition};
pub use style::overlay::{BreakpointOverlay, InteractionState, StateOverlays};
pub use style::pipeline::{compose, fill_defaults, Phase, Pipeline, StyleInputs};
pub use style::props::PropertyBag;
pub use style::raw::RawStyle;
pub use style::record::{StyleRecord, StyleValue};
pub use style::scalar::Scalar;
pub use style::theme::Theme;
pub use widget::{ComposeError, Engine, Widget};
