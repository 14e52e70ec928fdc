use crate::{
    foundation::error::{HeroError, HeroResult},
    transform::{clamp01, inverse_lerp, lerp},
};
use serde::{Deserialize, Serialize};

/// Sanitize a raw scroll signal.
///
/// Finite values are clamped to `[0, 1]`; `None` and non-finite values mean "no signal".
pub fn normalize_progress(progress: Option<f64>) -> Option<f64> {
    progress.filter(|p| p.is_finite()).map(clamp01)
}

#[derive(Deserialize)]
struct InterpolationRangeDef {
    domain: Vec<f64>,
    range: Vec<f64>,
}

impl TryFrom<InterpolationRangeDef> for InterpolationRange {
    type Error = HeroError;

    fn try_from(def: InterpolationRangeDef) -> HeroResult<Self> {
        Self::new(def.domain, def.range)
    }
}

/// Piecewise-linear map from a domain breakpoint list to a range breakpoint list.
///
/// Inputs outside the domain clamp to the nearest endpoint's output; nothing is extrapolated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "InterpolationRangeDef")]
pub struct InterpolationRange {
    domain: Vec<f64>,
    range: Vec<f64>,
}

impl InterpolationRange {
    /// Build a validated range.
    ///
    /// Requires equal lengths, at least two breakpoints, finite values and a non-decreasing domain.
    pub fn new(domain: Vec<f64>, range: Vec<f64>) -> HeroResult<Self> {
        if domain.len() != range.len() {
            return Err(HeroError::validation(format!(
                "interpolation domain has {} breakpoints but range has {}",
                domain.len(),
                range.len()
            )));
        }
        if domain.len() < 2 {
            return Err(HeroError::validation(
                "interpolation needs at least two breakpoints",
            ));
        }
        if !domain.iter().chain(range.iter()).all(|v| v.is_finite()) {
            return Err(HeroError::validation(
                "interpolation breakpoints must be finite",
            ));
        }
        if !domain.windows(2).all(|w| w[0] <= w[1]) {
            return Err(HeroError::validation(
                "interpolation domain must be non-decreasing",
            ));
        }
        Ok(Self { domain, range })
    }

    /// Two-point shorthand: `[d0, d1] -> [r0, r1]`.
    pub fn linear(d0: f64, d1: f64, r0: f64, r1: f64) -> HeroResult<Self> {
        Self::new(vec![d0, d1], vec![r0, r1])
    }

    /// Domain breakpoints.
    pub fn domain(&self) -> &[f64] {
        &self.domain
    }

    /// Range breakpoints.
    pub fn range(&self) -> &[f64] {
        &self.range
    }

    /// Evaluate at `x`.
    pub fn sample(&self, x: f64) -> f64 {
        let last = self.domain.len() - 1;
        if x.is_nan() || x <= self.domain[0] {
            return self.range[0];
        }
        if x >= self.domain[last] {
            return self.range[last];
        }

        // First breakpoint strictly greater than x; duplicates resolve to the later segment.
        let idx = self.domain.partition_point(|d| *d <= x);
        let (a, b) = (idx - 1, idx);
        let t = inverse_lerp(self.domain[a], self.domain[b], x);
        lerp(self.range[a], self.range[b], t)
    }
}

/// One scroll-driven output: an interpolation plus its value when there is no scroll signal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrollChannel {
    /// Progress-to-output mapping.
    pub range: InterpolationRange,
    /// Output used when no scroll signal is present.
    pub neutral: f64,
}

impl ScrollChannel {
    /// Channel with an explicit neutral value.
    pub fn new(range: InterpolationRange, neutral: f64) -> Self {
        Self { range, neutral }
    }

    /// Evaluate for a raw (possibly absent) scroll signal.
    pub fn eval(&self, progress: Option<f64>) -> f64 {
        match normalize_progress(progress) {
            Some(p) => self.range.sample(p),
            None => self.neutral,
        }
    }

    pub(crate) fn validate(&self, name: &str) -> HeroResult<()> {
        if !self.neutral.is_finite() {
            return Err(HeroError::config(format!(
                "scroll channel '{name}' neutral value must be finite"
            )));
        }
        Ok(())
    }
}

/// Per-frame output of the hero's scroll mapping.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrollFrame {
    /// Sanitized progress the frame was computed from, if any.
    pub progress: Option<f64>,
    /// Parallax translation of the decorative layer.
    pub decorative_offset: f64,
    /// Opacity multiplier of the decorative layer.
    pub decorative_opacity: f64,
    /// Opacity multiplier of the content layer.
    pub content_opacity: f64,
}

impl ScrollFrame {
    /// Output when no scroll source is attached.
    pub const NEUTRAL: Self = Self {
        progress: None,
        decorative_offset: 0.0,
        decorative_opacity: 1.0,
        content_opacity: 1.0,
    };
}

/// The three scroll channels of the hero panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollProgressMapper {
    /// Decorative layer vertical offset.
    pub decorative_offset: ScrollChannel,
    /// Decorative layer opacity.
    pub decorative_opacity: ScrollChannel,
    /// Content layer opacity.
    pub content_opacity: ScrollChannel,
}

impl Default for ScrollProgressMapper {
    fn default() -> Self {
        // Two-point ranges with finite, ordered literals cannot fail validation.
        let two = |d1: f64, r0: f64, r1: f64| InterpolationRange {
            domain: vec![0.0, d1],
            range: vec![r0, r1],
        };
        Self {
            decorative_offset: ScrollChannel::new(two(1.0, 0.0, 300.0), 0.0),
            decorative_opacity: ScrollChannel::new(two(1.0, 1.0, 0.3), 1.0),
            content_opacity: ScrollChannel::new(two(0.7, 1.0, 0.0), 1.0),
        }
    }
}

impl ScrollProgressMapper {
    /// Map one scroll signal to all hero outputs. Pure; O(number of channels).
    pub fn map(&self, progress: Option<f64>) -> ScrollFrame {
        let progress = normalize_progress(progress);
        ScrollFrame {
            progress,
            decorative_offset: self.decorative_offset.eval(progress),
            decorative_opacity: self.decorative_opacity.eval(progress),
            content_opacity: self.content_opacity.eval(progress),
        }
    }

    /// Validate neutral values of every channel.
    pub fn validate(&self) -> HeroResult<()> {
        self.decorative_offset.validate("decorative_offset")?;
        self.decorative_opacity.validate("decorative_opacity")?;
        self.content_opacity.validate("content_opacity")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/mapper.rs"]
mod tests;
