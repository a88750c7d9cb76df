//! The property bag: typed `Option<T>` fields grouped by styling concern.
//!
//! Every leaf is an `Option`; `None` means "unset, inherit the widget
//! default". Merging is per leaf field, other-wins, and never mutates either
//! input, which is what lets widget defaults fill gaps without clobbering
//! explicit caller values.

use crate::style::scalar::Scalar;

/// Flex main-axis direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Row,
    Column,
}

impl Direction {
    /// CSS keyword, with the optional `-reverse` suffix applied.
    pub fn as_css(self, reverse: bool) -> &'static str {
        match (self, reverse) {
            (Self::Row, false) => "row",
            (Self::Row, true) => "row-reverse",
            (Self::Column, false) => "column",
            (Self::Column, true) => "column-reverse",
        }
    }
}

/// CSS positioning scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionKind {
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl PositionKind {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Relative => "relative",
            Self::Absolute => "absolute",
            Self::Fixed => "fixed",
            Self::Sticky => "sticky",
        }
    }
}

/// Gradient function family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientKind {
    Linear,
    Radial,
    Conic,
}

impl GradientKind {
    pub fn function_name(self) -> &'static str {
        match self {
            Self::Linear => "linear-gradient",
            Self::Radial => "radial-gradient",
            Self::Conic => "conic-gradient",
        }
    }
}

/// Which edges carry the border stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderEdges {
    All,
    Top,
    Right,
    Bottom,
    Left,
}

impl BorderEdges {
    /// The CSS property the stroke is written to.
    pub fn property(self) -> &'static str {
        match self {
            Self::All => "border",
            Self::Top => "border-top",
            Self::Right => "border-right",
            Self::Bottom => "border-bottom",
            Self::Left => "border-left",
        }
    }
}

/// Outline shape of a bordered box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderShape {
    Rect,
    /// Forces `border-radius: 50%` regardless of the `radius` field.
    Circle,
}

/// Box dimensions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sizing {
    pub w: Option<Scalar>,
    pub max_w: Option<Scalar>,
    pub min_w: Option<Scalar>,
    pub h: Option<Scalar>,
    pub max_h: Option<Scalar>,
    pub min_h: Option<Scalar>,
}

/// Flex container and item properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlexProps {
    pub flex: Option<f64>,
    pub direction: Option<Direction>,
    pub reverse: Option<bool>,
    pub align: Option<String>,
    pub justify: Option<String>,
    pub gap: Option<Scalar>,
    pub wrap: Option<String>,
    pub order: Option<i32>,
    pub grow: Option<f64>,
    pub shrink: Option<f64>,
    pub basis: Option<Scalar>,
    pub align_content: Option<String>,
    pub align_self: Option<String>,
}

/// Grid container properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridProps {
    pub template_columns: Option<String>,
    pub template_rows: Option<String>,
    pub template_areas: Option<String>,
    pub gap: Option<Scalar>,
    pub auto_flow: Option<String>,
    pub auto_columns: Option<String>,
    pub auto_rows: Option<String>,
    pub justify_items: Option<String>,
    pub align_items: Option<String>,
    pub justify_content: Option<String>,
    pub align_content: Option<String>,
}

/// Offset placement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionProps {
    pub kind: Option<PositionKind>,
    pub top: Option<Scalar>,
    pub right: Option<Scalar>,
    pub bottom: Option<Scalar>,
    pub left: Option<Scalar>,
}

/// A 2D translation offset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Axis {
    pub x: Option<Scalar>,
    pub y: Option<Scalar>,
}

/// Four-edge spacing input, used independently for padding and margin.
///
/// Resolution precedence is edge > axis > `all`: the most specific value
/// wins, so `{ all: 10, top: 5 }` resolves the top edge to 5.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Edges {
    pub all: Option<Scalar>,
    pub horizontal: Option<Scalar>,
    pub vertical: Option<Scalar>,
    pub top: Option<Scalar>,
    pub right: Option<Scalar>,
    pub bottom: Option<Scalar>,
    pub left: Option<Scalar>,
}

impl Edges {
    /// Spacing on all four edges.
    pub fn uniform(value: impl Into<Scalar>) -> Self {
        Self {
            all: Some(value.into()),
            ..Self::default()
        }
    }

    /// Symmetric spacing: vertical (top/bottom) and horizontal (left/right).
    pub fn symmetric(vertical: impl Into<Scalar>, horizontal: impl Into<Scalar>) -> Self {
        Self {
            vertical: Some(vertical.into()),
            horizontal: Some(horizontal.into()),
            ..Self::default()
        }
    }

    pub fn resolved_top(&self) -> Option<Scalar> {
        self.top.clone().or_else(|| self.vertical.clone()).or_else(|| self.all.clone())
    }

    pub fn resolved_bottom(&self) -> Option<Scalar> {
        self.bottom.clone().or_else(|| self.vertical.clone()).or_else(|| self.all.clone())
    }

    pub fn resolved_left(&self) -> Option<Scalar> {
        self.left.clone().or_else(|| self.horizontal.clone()).or_else(|| self.all.clone())
    }

    pub fn resolved_right(&self) -> Option<Scalar> {
        self.right.clone().or_else(|| self.horizontal.clone()).or_else(|| self.all.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_none()
            && self.horizontal.is_none()
            && self.vertical.is_none()
            && self.top.is_none()
            && self.right.is_none()
            && self.bottom.is_none()
            && self.left.is_none()
    }
}

/// Background image placement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageFill {
    pub url: Option<String>,
    pub size: Option<String>,
    pub position: Option<String>,
    pub repeat: Option<String>,
    pub clip: Option<String>,
}

/// One gradient color stop.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub color: String,
    pub position: Option<Scalar>,
}

impl GradientStop {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            position: None,
        }
    }

    pub fn at(color: impl Into<String>, position: impl Into<Scalar>) -> Self {
        Self {
            color: color.into(),
            position: Some(position.into()),
        }
    }
}

/// Gradient fill. The `linear` kind default is applied at the widget-default
/// layer, never by the mapper.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gradient {
    pub kind: Option<GradientKind>,
    pub direction: Option<String>,
    pub stops: Vec<GradientStop>,
}

/// Border stroke, radius, and shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BorderProps {
    pub stroke: Option<Scalar>,
    pub color: Option<String>,
    pub radius: Option<Scalar>,
    pub position: Option<BorderEdges>,
    pub shape: Option<BorderShape>,
}

/// Box shadow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShadowProps {
    pub x: Option<Scalar>,
    pub y: Option<Scalar>,
    pub blur: Option<Scalar>,
    pub spread: Option<Scalar>,
    pub color: Option<String>,
    pub inset: Option<bool>,
}

impl ShadowProps {
    pub fn is_empty(&self) -> bool {
        self.x.is_none()
            && self.y.is_none()
            && self.blur.is_none()
            && self.spread.is_none()
            && self.color.is_none()
            && self.inset.is_none()
    }
}

/// Translate/scale/rotate, composed into one `transform` string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformProps {
    pub axis: Option<Axis>,
    pub scale: Option<f64>,
    pub rotate: Option<Scalar>,
}

/// Typography properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Typography {
    pub size: Option<Scalar>,
    pub weight: Option<Scalar>,
    pub align: Option<String>,
    pub color: Option<String>,
    pub shadow: Option<String>,
    pub transform: Option<String>,
    pub line_height: Option<Scalar>,
    pub white_space: Option<String>,
    pub decoration: Option<String>,
    pub ellipsis: Option<bool>,
    pub word_break: Option<String>,
    pub word_wrap: Option<String>,
    pub overflow_wrap: Option<String>,
}

/// The flat bag of semantic style properties a widget invocation supplies.
///
/// Any field left `None` falls back to the widget's default table; defaults
/// never override explicit values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBag {
    pub sizing: Sizing,
    pub flex: FlexProps,
    pub grid: GridProps,
    pub position: PositionProps,
    pub padding: Edges,
    pub margin: Edges,
    pub fill: Option<String>,
    pub image: Option<ImageFill>,
    pub gradient: Gradient,
    pub border: BorderProps,
    pub shadow: ShadowProps,
    pub blur: Option<f64>,
    pub opacity: Option<f64>,
    pub transform: TransformProps,
    pub text: Typography,
}

/// Pick `other` if set, otherwise keep `base`.
fn over<T: Clone>(base: &Option<T>, other: &Option<T>) -> Option<T> {
    if other.is_some() {
        other.clone()
    } else {
        base.clone()
    }
}

impl PropertyBag {
    /// Create an empty bag (every field unset).
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `overlay` on top of `self`, per leaf field: any field the
    /// overlay sets wins, everything else is kept. Neither input is mutated.
    pub fn merge(&self, overlay: &PropertyBag) -> PropertyBag {
        PropertyBag {
            sizing: Sizing {
                w: over(&self.sizing.w, &overlay.sizing.w),
                max_w: over(&self.sizing.max_w, &overlay.sizing.max_w),
                min_w: over(&self.sizing.min_w, &overlay.sizing.min_w),
                h: over(&self.sizing.h, &overlay.sizing.h),
                max_h: over(&self.sizing.max_h, &overlay.sizing.max_h),
                min_h: over(&self.sizing.min_h, &overlay.sizing.min_h),
            },
            flex: FlexProps {
                flex: over(&self.flex.flex, &overlay.flex.flex),
                direction: over(&self.flex.direction, &overlay.flex.direction),
                reverse: over(&self.flex.reverse, &overlay.flex.reverse),
                align: over(&self.flex.align, &overlay.flex.align),
                justify: over(&self.flex.justify, &overlay.flex.justify),
                gap: over(&self.flex.gap, &overlay.flex.gap),
                wrap: over(&self.flex.wrap, &overlay.flex.wrap),
                order: over(&self.flex.order, &overlay.flex.order),
                grow: over(&self.flex.grow, &overlay.flex.grow),
                shrink: over(&self.flex.shrink, &overlay.flex.shrink),
                basis: over(&self.flex.basis, &overlay.flex.basis),
                align_content: over(&self.flex.align_content, &overlay.flex.align_content),
                align_self: over(&self.flex.align_self, &overlay.flex.align_self),
            },
            grid: GridProps {
                template_columns: over(&self.grid.template_columns, &overlay.grid.template_columns),
                template_rows: over(&self.grid.template_rows, &overlay.grid.template_rows),
                template_areas: over(&self.grid.template_areas, &overlay.grid.template_areas),
                gap: over(&self.grid.gap, &overlay.grid.gap),
                auto_flow: over(&self.grid.auto_flow, &overlay.grid.auto_flow),
                auto_columns: over(&self.grid.auto_columns, &overlay.grid.auto_columns),
                auto_rows: over(&self.grid.auto_rows, &overlay.grid.auto_rows),
                justify_items: over(&self.grid.justify_items, &overlay.grid.justify_items),
                align_items: over(&self.grid.align_items, &overlay.grid.align_items),
                justify_content: over(&self.grid.justify_content, &overlay.grid.justify_content),
                align_content: over(&self.grid.align_content, &overlay.grid.align_content),
            },
            position: PositionProps {
                kind: over(&self.position.kind, &overlay.position.kind),
                top: over(&self.position.top, &overlay.position.top),
                right: over(&self.position.right, &overlay.position.right),
                bottom: over(&self.position.bottom, &overlay.position.bottom),
                left: over(&self.position.left, &overlay.position.left),
            },
            padding: merge_edges(&self.padding, &overlay.padding),
            margin: merge_edges(&self.margin, &overlay.margin),
            fill: over(&self.fill, &overlay.fill),
            image: merge_image(&self.image, &overlay.image),
            gradient: Gradient {
                kind: over(&self.gradient.kind, &overlay.gradient.kind),
                direction: over(&self.gradient.direction, &overlay.gradient.direction),
                stops: if overlay.gradient.stops.is_empty() {
                    self.gradient.stops.clone()
                } else {
                    overlay.gradient.stops.clone()
                },
            },
            border: BorderProps {
                stroke: over(&self.border.stroke, &overlay.border.stroke),
                color: over(&self.border.color, &overlay.border.color),
                radius: over(&self.border.radius, &overlay.border.radius),
                position: over(&self.border.position, &overlay.border.position),
                shape: over(&self.border.shape, &overlay.border.shape),
            },
            shadow: ShadowProps {
                x: over(&self.shadow.x, &overlay.shadow.x),
                y: over(&self.shadow.y, &overlay.shadow.y),
                blur: over(&self.shadow.blur, &overlay.shadow.blur),
                spread: over(&self.shadow.spread, &overlay.shadow.spread),
                color: over(&self.shadow.color, &overlay.shadow.color),
                inset: over(&self.shadow.inset, &overlay.shadow.inset),
            },
            blur: over(&self.blur, &overlay.blur),
            opacity: over(&self.opacity, &overlay.opacity),
            transform: TransformProps {
                axis: over(&self.transform.axis, &overlay.transform.axis),
                scale: over(&self.transform.scale, &overlay.transform.scale),
                rotate: over(&self.transform.rotate, &overlay.transform.rotate),
            },
            text: Typography {
                size: over(&self.text.size, &overlay.text.size),
                weight: over(&self.text.weight, &overlay.text.weight),
                align: over(&self.text.align, &overlay.text.align),
                color: over(&self.text.color, &overlay.text.color),
                shadow: over(&self.text.shadow, &overlay.text.shadow),
                transform: over(&self.text.transform, &overlay.text.transform),
                line_height: over(&self.text.line_height, &overlay.text.line_height),
                white_space: over(&self.text.white_space, &overlay.text.white_space),
                decoration: over(&self.text.decoration, &overlay.text.decoration),
                ellipsis: over(&self.text.ellipsis, &overlay.text.ellipsis),
                word_break: over(&self.text.word_break, &overlay.text.word_break),
                word_wrap: over(&self.text.word_wrap, &overlay.text.word_wrap),
                overflow_wrap: over(&self.text.overflow_wrap, &overlay.text.overflow_wrap),
            },
        }
    }

    // ── builder conveniences ─────────────────────────────────────────

    pub fn w(mut self, v: impl Into<Scalar>) -> Self {
        self.sizing.w = Some(v.into());
        self
    }

    pub fn h(mut self, v: impl Into<Scalar>) -> Self {
        self.sizing.h = Some(v.into());
        self
    }

    pub fn max_w(mut self, v: impl Into<Scalar>) -> Self {
        self.sizing.max_w = Some(v.into());
        self
    }

    pub fn min_w(mut self, v: impl Into<Scalar>) -> Self {
        self.sizing.min_w = Some(v.into());
        self
    }

    pub fn max_h(mut self, v: impl Into<Scalar>) -> Self {
        self.sizing.max_h = Some(v.into());
        self
    }

    pub fn min_h(mut self, v: impl Into<Scalar>) -> Self {
        self.sizing.min_h = Some(v.into());
        self
    }

    pub fn flex(mut self, v: f64) -> Self {
        self.flex.flex = Some(v);
        self
    }

    pub fn direction(mut self, v: Direction) -> Self {
        self.flex.direction = Some(v);
        self
    }

    pub fn align(mut self, v: impl Into<String>) -> Self {
        self.flex.align = Some(v.into());
        self
    }

    pub fn justify(mut self, v: impl Into<String>) -> Self {
        self.flex.justify = Some(v.into());
        self
    }

    pub fn gap(mut self, v: impl Into<Scalar>) -> Self {
        self.flex.gap = Some(v.into());
        self
    }

    pub fn fill(mut self, v: impl Into<String>) -> Self {
        self.fill = Some(v.into());
        self
    }

    pub fn opacity(mut self, v: f64) -> Self {
        self.opacity = Some(v);
        self
    }

    pub fn blur(mut self, v: f64) -> Self {
        self.blur = Some(v);
        self
    }

    pub fn padding(mut self, v: Edges) -> Self {
        self.padding = v;
        self
    }

    pub fn margin(mut self, v: Edges) -> Self {
        self.margin = v;
        self
    }

    pub fn border(mut self, v: BorderProps) -> Self {
        self.border = v;
        self
    }

    pub fn radius(mut self, v: impl Into<Scalar>) -> Self {
        self.border.radius = Some(v.into());
        self
    }

    pub fn shadow(mut self, v: ShadowProps) -> Self {
        self.shadow = v;
        self
    }

    pub fn gradient(mut self, v: Gradient) -> Self {
        self.gradient = v;
        self
    }

    pub fn scale(mut self, v: f64) -> Self {
        self.transform.scale = Some(v);
        self
    }

    pub fn rotate(mut self, v: impl Into<Scalar>) -> Self {
        self.transform.rotate = Some(v.into());
        self
    }

    pub fn text_size(mut self, v: impl Into<Scalar>) -> Self {
        self.text.size = Some(v.into());
        self
    }

    pub fn text_color(mut self, v: impl Into<String>) -> Self {
        self.text.color = Some(v.into());
        self
    }

    pub fn text_align(mut self, v: impl Into<String>) -> Self {
        self.text.align = Some(v.into());
        self
    }

    pub fn white_space(mut self, v: impl Into<String>) -> Self {
        self.text.white_space = Some(v.into());
        self
    }

    pub fn ellipsis(mut self) -> Self {
        self.text.ellipsis = Some(true);
        self
    }
}

fn merge_edges(base: &Edges, overlay: &Edges) -> Edges {
    Edges {
        all: over(&base.all, &overlay.all),
        horizontal: over(&base.horizontal, &overlay.horizontal),
        vertical: over(&base.vertical, &overlay.vertical),
        top: over(&base.top, &overlay.top),
        right: over(&base.right, &overlay.right),
        bottom: over(&base.bottom, &overlay.bottom),
        left: over(&base.left, &overlay.left),
    }
}

fn merge_image(base: &Option<ImageFill>, overlay: &Option<ImageFill>) -> Option<ImageFill> {
    match (base, overlay) {
        (Some(b), Some(o)) => Some(ImageFill {
            url: over(&b.url, &o.url),
            size: over(&b.size, &o.size),
            position: over(&b.position, &o.position),
            repeat: over(&b.repeat, &o.repeat),
            clip: over(&b.clip, &o.clip),
        }),
        (None, Some(o)) => Some(o.clone()),
        (Some(b), None) => Some(b.clone()),
        (None, None) => None,
    }
}
