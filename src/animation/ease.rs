use crate::{
    foundation::error::{HeroError, HeroResult},
    transform::{clamp01, lerp},
};
use serde::{Deserialize, Serialize};

/// Easing curves mapping normalized transition progress to eased progress.
///
/// Named curves use the CSS control points. In JSON they are written as snake_case strings
/// (`"ease_out"`) or as `{"cubic_bezier": [x1, y1, x2, y2]}`.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Identity.
    #[default]
    Linear,
    /// `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,
    /// `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,
    /// Arbitrary CSS cubic bezier.
    CubicBezier {
        /// First control point x, in `[0, 1]`.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x, in `[0, 1]`.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
}

impl<'de> Deserialize<'de> for Ease {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Points {
            List([f64; 4]),
            Obj { x1: f64, y1: f64, x2: f64, y2: f64 },
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Str(String),
            CubicBezier { cubic_bezier: Points },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Str(s) => match s.as_str() {
                "linear" => Ok(Self::Linear),
                "ease_in" => Ok(Self::EaseIn),
                "ease_out" => Ok(Self::EaseOut),
                "ease_in_out" => Ok(Self::EaseInOut),
                other => Err(serde::de::Error::custom(format!(
                    "unknown ease \"{other}\""
                ))),
            },
            Repr::CubicBezier { cubic_bezier } => {
                let [x1, y1, x2, y2] = match cubic_bezier {
                    Points::List(p) => p,
                    Points::Obj { x1, y1, x2, y2 } => [x1, y1, x2, y2],
                };
                Ok(Self::CubicBezier { x1, y1, x2, y2 })
            }
        }
    }
}

impl Ease {
    /// Apply this curve to normalized progress `t` (clamped to `[0, 1]`).
    pub fn apply(self, t: f64) -> f64 {
        let t = clamp01(t);
        match self {
            Self::Linear => t,
            Self::EaseIn => cubic_bezier_ease(t, 0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => cubic_bezier_ease(t, 0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => cubic_bezier_ease(t, 0.42, 0.0, 0.58, 1.0),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier_ease(t, x1, y1, x2, y2),
        }
    }

    /// Check that bezier control points describe a function of time.
    pub fn validate(self) -> HeroResult<()> {
        if let Self::CubicBezier { x1, y1, x2, y2 } = self {
            if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
                return Err(HeroError::animation(
                    "cubic_bezier control points must be finite",
                ));
            }
            if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
                return Err(HeroError::animation(
                    "cubic_bezier x control points must be in [0, 1]",
                ));
            }
        }
        Ok(())
    }
}

/// Damped harmonic oscillator parameters.
///
/// With the defaults (`stiffness = 80`, `damping = 10`, `mass = 1`) the damping ratio is about
/// 0.56: a light overshoot of roughly 12% followed by a quick settle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringParams {
    /// Spring constant `k`.
    pub stiffness: f64,
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Mass `m` (> 0).
    pub mass: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: 80.0,
            damping: 10.0,
            mass: 1.0,
        }
    }
}

impl SpringParams {
    /// Reject negative or non-finite constants.
    pub fn validate(self) -> HeroResult<()> {
        let all_finite = [self.stiffness, self.damping, self.mass]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(HeroError::animation("spring parameters must be finite"));
        }
        if self.stiffness <= 0.0 {
            return Err(HeroError::animation("spring stiffness must be > 0"));
        }
        if self.damping < 0.0 {
            return Err(HeroError::animation("spring damping must be >= 0"));
        }
        if self.mass <= 0.0 {
            return Err(HeroError::animation("spring mass must be > 0"));
        }
        Ok(())
    }

    /// Damping ratio `zeta = c / (2 * sqrt(k * m))`.
    pub fn damping_ratio(self) -> f64 {
        let k = self.stiffness.max(0.0);
        let m = self.mass.max(1e-9);
        self.damping.max(0.0) / (2.0 * (k * m).sqrt()).max(1e-9)
    }

    /// Step response from 0 toward 1 at `t_secs` with `x(0) = 0`, `v(0) = 0`. Zero at or before
    /// the start.
    pub fn step(self, t_secs: f64) -> f64 {
        if t_secs.is_nan() || t_secs <= 0.0 {
            return 0.0;
        }
        spring_step(t_secs, self.stiffness, self.damping, self.mass)
    }

    /// Step response over a transition of `duration_secs`, rescaled to land on exactly 1.
    ///
    /// `t` is normalized progress. Falls back to linear when the spring has not moved by the
    /// end of the transition.
    pub fn settle(self, t: f64, duration_secs: f64) -> f64 {
        let t = clamp01(t);
        let end = self.step(duration_secs);
        if !end.is_finite() || end.abs() < 1e-6 {
            return t;
        }
        self.step(t * duration_secs) / end
    }
}

/// Base curve optionally blended with a spring.
///
/// `spring_mix = 0` is the pure base curve, `1` the pure spring. Every profile maps `0 -> 0`
/// and `1 -> 1` exactly, so a finished transition always rests on its target.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EasingProfile {
    /// Base curve.
    pub ease: Ease,
    /// Optional spring blended over the base curve.
    pub spring: Option<SpringParams>,
    /// Blend weight of the spring in `[0, 1]`.
    pub spring_mix: f64,
}

impl Default for EasingProfile {
    fn default() -> Self {
        Self::from_ease(Ease::Linear)
    }
}

impl EasingProfile {
    /// Profile with no spring component.
    pub fn from_ease(ease: Ease) -> Self {
        Self {
            ease,
            spring: None,
            spring_mix: 0.0,
        }
    }

    /// Ease-out blended half-and-half with the default underdamped spring.
    pub fn spring_out() -> Self {
        Self {
            ease: Ease::EaseOut,
            spring: Some(SpringParams::default()),
            spring_mix: 0.5,
        }
    }

    /// Validate the curve, the spring and the blend weight.
    pub fn validate(&self) -> HeroResult<()> {
        self.ease.validate()?;
        if let Some(spring) = self.spring {
            spring.validate()?;
        }
        if !(0.0..=1.0).contains(&self.spring_mix) {
            return Err(HeroError::animation("spring_mix must be in [0, 1]"));
        }
        Ok(())
    }

    /// Eased progress for normalized `t` of a transition lasting `duration_secs`.
    ///
    /// The result may exceed 1 mid-transition when a spring is blended in.
    pub fn apply(&self, t: f64, duration_secs: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let base = self.ease.apply(t);
        match self.spring {
            Some(spring) if self.spring_mix > 0.0 => {
                lerp(base, spring.settle(t, duration_secs), self.spring_mix)
            }
            _ => base,
        }
    }
}

fn cubic_bezier_ease(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    // CSS cubic-bezier: given x in [0,1], solve u such that bx(u)=x, then return by(u).
    fn sample_curve(a1: f64, a2: f64, t: f64) -> f64 {
        let omt = 1.0 - t;
        3.0 * omt * omt * t * a1 + 3.0 * omt * t * t * a2 + t * t * t
    }
    fn sample_curve_derivative(a1: f64, a2: f64, t: f64) -> f64 {
        let omt = 1.0 - t;
        3.0 * omt * omt * a1 + 6.0 * omt * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    // Newton-Raphson, then bisection around the estimate.
    let mut t = x;
    for _ in 0..8 {
        let x_t = sample_curve(x1, x2, t) - x;
        let d = sample_curve_derivative(x1, x2, t);
        if d.abs() < 1e-7 {
            break;
        }
        t = (t - x_t / d).clamp(0.0, 1.0);
    }

    if (sample_curve(x1, x2, t) - x).abs() > 1e-7 {
        let mut lo = 0.0;
        let mut hi = 1.0;
        for _ in 0..32 {
            let mid = 0.5 * (lo + hi);
            if sample_curve(x1, x2, mid) < x {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        t = 0.5 * (lo + hi);
    }

    sample_curve(y1, y2, t)
}

// `t > 0`; callers handle the start.
fn spring_step(t: f64, stiffness: f64, damping: f64, mass: f64) -> f64 {
    let k = stiffness.max(0.0);
    let c = damping.max(0.0);
    let m = mass.max(1e-9);

    let w0 = (k / m).sqrt();
    if w0 == 0.0 {
        return t;
    }
    let zeta = c / (2.0 * (k * m).sqrt()).max(1e-9);

    if (zeta - 1.0).abs() < 1e-6 {
        // Critically damped.
        let e = (-w0 * t).exp();
        1.0 - e * (1.0 + w0 * t)
    } else if zeta < 1.0 {
        // Underdamped.
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let e = (-zeta * w0 * t).exp();
        let c1 = (wd * t).cos();
        let s1 = (wd * t).sin();
        let k = zeta / (1.0 - zeta * zeta).sqrt();
        1.0 - e * (c1 + k * s1)
    } else {
        // Overdamped.
        let z2 = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - z2);
        let r2 = -w0 * (zeta + z2);
        let c2 = (zeta + z2) / (2.0 * z2);
        let c1 = (zeta - z2) / (2.0 * z2);
        1.0 - (c2 * (r1 * t).exp() - c1 * (r2 * t).exp())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
