//! The style merge pipeline: fixed-precedence layering of all contributions.
//!
//! Per invocation the pipeline walks one-way through
//! `Init → DefaultsFilled → BaseComputed → ExtendedComputed →
//! ResponsiveComputed → StateComputed → Finalized` and emits a single
//! [`StyleRecord`]: base and extended keys flat (extended wins), responsive
//! and state blocks nested, the caller's raw override merged last. Later
//! layers only add or overwrite; an unset overlay field is a no-op, never a
//! deletion.

use smallvec::SmallVec;

use crate::style::base::{base_styles, BaseProps};
use crate::style::overlay::{media_styles, BreakpointOverlay, InteractionState, StateOverlays};
use crate::style::props::PropertyBag;
use crate::style::raw::{resolve_raw, RawStyle};
use crate::style::record::StyleRecord;
use crate::style::theme::Theme;
use crate::widget::traits::Widget;

/// Pipeline phases, in order. Transitions are one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Init,
    DefaultsFilled,
    BaseComputed,
    ExtendedComputed,
    ResponsiveComputed,
    StateComputed,
    Finalized,
}

/// Everything one widget invocation supplies to the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleInputs {
    /// The semantic property bag.
    pub bag: PropertyBag,
    /// Base-layer inputs (transition, z-index, cursor, handlers, disabled).
    pub base: BaseProps,
    /// Responsive overlays: breakpoint threshold → partial bag.
    pub mq: BreakpointOverlay,
    /// Interaction-state overlays.
    pub states: StateOverlays,
    /// Raw override, merged last with the highest precedence.
    pub raw: Option<RawStyle>,
}

impl StyleInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bag(bag: PropertyBag) -> Self {
        Self {
            bag,
            ..Self::default()
        }
    }

    pub fn base(mut self, base: BaseProps) -> Self {
        self.base = base;
        self
    }

    pub fn mq(mut self, threshold: u32, bag: PropertyBag) -> Self {
        self.mq.insert(threshold, bag);
        self
    }

    pub fn hover(mut self, bag: PropertyBag) -> Self {
        self.states.hover = Some(bag);
        self
    }

    pub fn focus(mut self, bag: PropertyBag) -> Self {
        self.states.focus = Some(bag);
        self
    }

    pub fn active(mut self, bag: PropertyBag) -> Self {
        self.states.active = Some(bag);
        self
    }

    pub fn disabled(mut self, bag: PropertyBag) -> Self {
        self.states.disabled = Some(bag);
        self
    }

    pub fn raw(mut self, raw: RawStyle) -> Self {
        self.raw = Some(raw);
        self
    }
}

/// Fill a widget's defaults into a caller bag and apply derived defaults.
///
/// The caller bag is never mutated; explicit fields always survive.
pub fn fill_defaults(widget: &dyn Widget, theme: &Theme, bag: &PropertyBag) -> PropertyBag {
    widget.finalize_bag(widget.defaults(theme).merge(bag))
}

/// The per-invocation merge pipeline.
pub struct Pipeline<'a> {
    widget: &'a dyn Widget,
    theme: &'a Theme,
    phase: Phase,
}

impl<'a> Pipeline<'a> {
    pub fn new(widget: &'a dyn Widget, theme: &'a Theme) -> Self {
        Self {
            widget,
            theme,
            phase: Phase::Init,
        }
    }

    /// The current phase, for observation in tests and diagnostics.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Run the pipeline once. A pipeline never runs twice: a second call
    /// returns an empty record (with a debug diagnostic) instead of branching
    /// back through the phases.
    pub fn run(&mut self, inputs: &StyleInputs) -> StyleRecord {
        if self.phase != Phase::Init {
            if cfg!(debug_assertions) {
                tracing::warn!(
                    target: "lamina::pipeline",
                    widget = self.widget.name(),
                    "pipeline already finalized; returning an empty record"
                );
            }
            return StyleRecord::new();
        }

        let mut layers: SmallVec<[StyleRecord; 6]> = SmallVec::new();

        // Defaults: widget table under the caller bag, then derived fields.
        let bag = fill_defaults(self.widget, self.theme, &inputs.bag);
        self.phase = Phase::DefaultsFilled;

        // Base layer.
        if self.widget.uses_base() {
            let mut base = StyleRecord::new();
            if let Some(position) = self.widget.position_reset() {
                base.set_str("position", position);
            }
            if let Some(display) = self.widget.display() {
                base.set_str("display", display);
            }
            let base_props = inputs.base.merge_over(&self.widget.base_defaults());
            base.merge_in(&base_styles(&base_props));
            layers.push(base);
        }
        self.phase = Phase::BaseComputed;

        // Extended layer from the defaulted bag.
        layers.push(self.widget.extended(&bag));
        self.phase = Phase::ExtendedComputed;

        // Responsive blocks from undefaulted partial bags.
        layers.push(media_styles(&inputs.mq, |partial| {
            self.widget.extended(partial)
        }));
        self.phase = Phase::ResponsiveComputed;

        // Interaction-state blocks.
        layers.push(self.state_layer(&inputs.states));
        self.phase = Phase::StateComputed;

        // Raw override, highest precedence.
        if let Some(raw) = &inputs.raw {
            layers.push(resolve_raw(raw));
        }

        let mut record = StyleRecord::new();
        for layer in &layers {
            record.merge_in(layer);
        }
        self.phase = Phase::Finalized;
        record
    }

    fn state_layer(&self, states: &StateOverlays) -> StyleRecord {
        let mut record = StyleRecord::new();
        for state in InteractionState::ALL {
            let block = self
                .widget
                .state_style(state, states.get(state), self.theme);
            let mut block = match block {
                Some(block) => block,
                None if state == InteractionState::Disabled && self.widget.interactive() => {
                    StyleRecord::new()
                }
                None => continue,
            };
            // Disabled interactive widgets never keep an interactive cursor.
            if state == InteractionState::Disabled && self.widget.interactive() {
                block.set_str("cursor", "default");
            }
            record.set_block(state.selector(), block);
        }
        record
    }
}

/// Compose a widget invocation in one call.
pub fn compose(widget: &dyn Widget, theme: &Theme, inputs: &StyleInputs) -> StyleRecord {
    Pipeline::new(widget, theme).run(inputs)
}
