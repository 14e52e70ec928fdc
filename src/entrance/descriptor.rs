use crate::{
    animation::anim::Transition,
    entrance::state::EntrancePhase,
    foundation::core::VisualState,
    transform::clamp01,
};
use serde::{Deserialize, Serialize};

/// Which layer an element belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Copy column block, faded by the content layer.
    Content,
    /// Decorative shape, moved by the parallax layer.
    Shape,
}

/// How an element's start time was specified.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delay {
    /// Stagger ordinal, multiplied by the configured delay unit.
    Index(u32),
    /// Literal delay in seconds.
    Literal(f64),
}

impl Delay {
    /// Start offset in seconds. Negative or non-finite literals start immediately.
    pub fn resolve(self, delay_unit_secs: f64) -> f64 {
        let secs = match self {
            Self::Index(i) => f64::from(i) * delay_unit_secs,
            Self::Literal(secs) => secs,
        };
        if secs.is_finite() { secs.max(0.0) } else { 0.0 }
    }
}

/// One-shot hidden-to-visible transition of a single hero element.
///
/// Built once at mount and never mutated; times are relative to the mount instant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationDescriptor {
    /// Element identifier.
    pub element: String,
    /// Layer of the element.
    pub kind: ElementKind,
    /// State before the transition starts.
    pub initial: VisualState,
    /// State once the transition completes.
    pub target: VisualState,
    /// Delay as specified.
    pub delay: Delay,
    /// Resolved start time in seconds after mount.
    pub start_secs: f64,
    /// Duration and easing.
    pub transition: Transition,
}

impl AnimationDescriptor {
    /// Time after mount at which the element reaches its target.
    pub fn end_secs(&self) -> f64 {
        self.start_secs + self.transition.duration_secs
    }

    /// Phase `elapsed_secs` after mount.
    pub fn phase_at(&self, elapsed_secs: f64) -> EntrancePhase {
        if elapsed_secs.is_nan() || elapsed_secs < self.start_secs {
            EntrancePhase::Hidden
        } else if elapsed_secs < self.end_secs() {
            EntrancePhase::Transitioning
        } else {
            EntrancePhase::Visible
        }
    }

    /// Visual state `elapsed_secs` after mount. Opacity is kept in `[0, 1]` under overshoot.
    pub fn sample(&self, elapsed_secs: f64) -> VisualState {
        let mut state =
            self.transition
                .sample(&self.initial, &self.target, elapsed_secs - self.start_secs);
        state.opacity = clamp01(state.opacity);
        state
    }
}

#[cfg(test)]
#[path = "../../tests/unit/entrance/descriptor.rs"]
mod tests;
