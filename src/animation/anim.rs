use crate::{
    animation::ease::{Ease, EasingProfile},
    foundation::core::VisualState,
    foundation::error::{HeroError, HeroResult},
    transform::{clamp01, lerp, ping_pong},
};

/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with factor `t`. `t` may leave `[0, 1]` under spring overshoot.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp(*a, *b, t)
    }
}

impl Lerp for VisualState {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: lerp(a.opacity, b.opacity, t),
            offset_y: lerp(a.offset_y, b.offset_y, t),
            rotation_deg: lerp(a.rotation_deg, b.rotation_deg, t),
        }
    }
}

/// Duration and easing of a one-shot transition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transition {
    /// Length of the transition in seconds (> 0).
    pub duration_secs: f64,
    /// Easing applied over the transition.
    pub easing: EasingProfile,
}

impl Transition {
    /// Validate duration and easing.
    pub fn validate(&self) -> HeroResult<()> {
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(HeroError::animation("transition duration must be > 0"));
        }
        self.easing.validate()
    }

    /// Eased progress `elapsed_secs` after the transition started.
    ///
    /// `0` before the start, exactly `1` from `duration_secs` on.
    pub fn progress(&self, elapsed_secs: f64) -> f64 {
        if elapsed_secs.is_nan() || elapsed_secs <= 0.0 {
            return 0.0;
        }
        if elapsed_secs >= self.duration_secs {
            return 1.0;
        }
        let t = elapsed_secs / self.duration_secs;
        self.easing.apply(t, self.duration_secs)
    }

    /// Interpolated value between `from` and `to` at `elapsed_secs`.
    pub fn sample<T: Lerp>(&self, from: &T, to: &T, elapsed_secs: f64) -> T {
        T::lerp(from, to, self.progress(elapsed_secs))
    }
}

/// Continuous vertical drift: `0 -> amplitude -> 0` once per period, forever.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FloatMotion {
    /// Peak displacement (positive is down).
    pub amplitude: f64,
    /// Length of one full cycle in seconds (> 0).
    pub period_secs: f64,
    /// Easing of each half cycle.
    pub ease: Ease,
}

impl Default for FloatMotion {
    fn default() -> Self {
        Self {
            amplitude: 15.0,
            period_secs: 12.0,
            ease: Ease::EaseInOut,
        }
    }
}

impl FloatMotion {
    /// Validate amplitude, period and curve.
    pub fn validate(&self) -> HeroResult<()> {
        if !self.amplitude.is_finite() {
            return Err(HeroError::animation("float amplitude must be finite"));
        }
        if !self.period_secs.is_finite() || self.period_secs <= 0.0 {
            return Err(HeroError::animation("float period must be > 0"));
        }
        self.ease.validate()
    }

    /// Drift `elapsed_secs` after the loop started. Zero before it starts.
    pub fn offset_at(&self, elapsed_secs: f64) -> f64 {
        if elapsed_secs.is_nan() || elapsed_secs <= 0.0 {
            return 0.0;
        }
        let phase = elapsed_secs / self.period_secs;
        self.amplitude * self.ease.apply(clamp01(ping_pong(phase)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
