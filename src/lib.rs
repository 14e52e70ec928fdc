//! hero-motion drives the motion of a landing-page hero panel.
//!
//! The crate is headless: it turns a clock and an optional scroll signal into resolved visual
//! states (opacity, vertical offset, rotation) for every element of the panel. Drawing those
//! states is left to the host.
//!
//! # Pipeline overview
//!
//! 1. **Sequence**: `HeroLayout + MotionConfig -> Vec<AnimationDescriptor>` (one entrance per
//!    element, content blocks staggered by ordinal, shapes by literal delay)
//! 2. **Mount**: `EntranceTimeline::mount` fires every entrance exactly once
//! 3. **Frame**: `HeroPanel::frame(now, scroll) -> HeroFrame` advances each element's
//!    `Hidden -> Transitioning -> Visible` phase and layers the scroll mapping on top
//!
//! Scroll mapping is stateless: [`ScrollProgressMapper::map`] is a pure function of the
//! progress value, and an absent value yields the neutral frame.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: every frame is a pure function of the mount instant, `now` and the
//!   scroll value.
//! - **One-shot entrances**: phases only move forward and re-mounting is ignored.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod entrance;
mod foundation;
mod hero;
mod scroll;

/// Shared scalar helpers (interpolation, clamping, triangle waves).
pub mod transform;

pub use animation::anim::{FloatMotion, Lerp, Transition};
pub use animation::ease::{Ease, EasingProfile, SpringParams};
pub use config::{ContentMotion, MotionConfig, ShapeMotion};
pub use entrance::descriptor::{AnimationDescriptor, Delay, ElementKind};
pub use entrance::sequencer::EntranceSequencer;
pub use entrance::state::{EntrancePhase, EntranceTimeline, EntranceTrack};
pub use foundation::core::{
    Affine, Canvas, Fps, FrameIndex, Point, Size, Transform2D, Vec2, VisualState,
};
pub use foundation::error::{HeroError, HeroResult};
pub use hero::layout::{
    ContentBlock, ContentKind, HeroLayout, HorizontalEdge, Placement, ShapeSpec, VerticalEdge,
};
pub use hero::panel::{BlockFrame, HeroFrame, HeroPanel, ShapeFrame};
pub use scroll::mapper::{
    InterpolationRange, ScrollChannel, ScrollFrame, ScrollProgressMapper, normalize_progress,
};
