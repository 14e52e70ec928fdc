use crate::foundation::error::{HeroError, HeroResult};

pub use kurbo::{Affine, Point, Size, Vec2};

/// Absolute 0-based frame index when sampling the hero on a fixed frame grid.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Rational frame rate used to turn frame indices into wall-clock seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be > 0.
    pub den: u32,
}

impl Fps {
    /// Create a validated frame rate.
    pub fn new(num: u32, den: u32) -> HeroResult<Self> {
        if den == 0 {
            return Err(HeroError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(HeroError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Start time of `frame` in seconds.
    pub fn frame_to_secs(self, frame: FrameIndex) -> f64 {
        (frame.0 as f64) * self.frame_duration_secs()
    }

    /// Number of whole frames covering `secs` (ceil, at least one).
    pub fn frames_for_secs(self, secs: f64) -> u64 {
        if !secs.is_finite() || secs <= 0.0 {
            return 1;
        }
        ((secs * self.as_f64()).ceil() as u64).max(1)
    }
}

/// Viewport the hero panel is laid out in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in layout units.
    pub width: u32,
    /// Height in layout units.
    pub height: u32,
}

impl Canvas {
    /// Canvas extent as a kurbo size.
    pub fn size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
        }
    }
}

/// The animatable visual parameters of one hero element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualState {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Vertical offset from the resting position (positive is down).
    pub offset_y: f64,
    /// Rotation in degrees.
    pub rotation_deg: f64,
}

impl VisualState {
    /// Fully visible, untransformed resting state.
    pub const RESTING: Self = Self {
        opacity: 1.0,
        offset_y: 0.0,
        rotation_deg: 0.0,
    };

    /// Build a state from its three components.
    pub const fn new(opacity: f64, offset_y: f64, rotation_deg: f64) -> Self {
        Self {
            opacity,
            offset_y,
            rotation_deg,
        }
    }

    pub(crate) fn is_finite(self) -> bool {
        self.opacity.is_finite() && self.offset_y.is_finite() && self.rotation_deg.is_finite()
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::RESTING
    }
}

/// Placement transform for a shape: translate, then rotate about `anchor`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform2D {
    /// Translation of the shape's origin (top-left corner).
    pub translate: Vec2,
    /// Rotation in radians.
    pub rotation_rad: f64,
    /// Pivot in local space.
    pub anchor: Vec2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            rotation_rad: 0.0,
            anchor: Vec2::ZERO,
        }
    }
}

impl Transform2D {
    /// Convert to an affine matrix.
    pub fn to_affine(self) -> Affine {
        let t_translate = Affine::translate(self.translate);
        let t_anchor = Affine::translate(self.anchor);
        let t_unanchor = Affine::translate(-self.anchor);
        let t_rotate = Affine::rotate(self.rotation_rad);

        // T(translate) * T(anchor) * R(rot) * T(-anchor)
        t_translate * t_anchor * t_rotate * t_unanchor
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
