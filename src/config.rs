//! Motion configuration shared by the scroll mapper and the entrance sequencer.
//!
//! Every field has a default matching the reference hero, so an empty JSON object (`{}`) is a
//! complete configuration. Values are validated before a panel is built from them.

use crate::{
    animation::anim::{FloatMotion, Transition},
    animation::ease::{Ease, EasingProfile},
    foundation::core::VisualState,
    foundation::error::{HeroError, HeroResult},
    scroll::mapper::ScrollProgressMapper,
};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

/// Entrance timing of content blocks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentMotion {
    /// Duration and easing of each block's entrance.
    pub transition: Transition,
    /// Seconds per stagger ordinal.
    pub delay_unit_secs: f64,
    /// State before the entrance.
    pub hidden: VisualState,
    /// State after the entrance.
    pub visible: VisualState,
}

impl Default for ContentMotion {
    fn default() -> Self {
        Self {
            transition: Transition {
                duration_secs: 0.7,
                easing: EasingProfile::spring_out(),
            },
            delay_unit_secs: 1.0,
            hidden: VisualState::new(0.0, 40.0, -15.0),
            visible: VisualState::RESTING,
        }
    }
}

/// Entrance and idle motion of decorative shapes.
///
/// The hero layout only fixes each shape's delay and resting rotation. Offsets, rotation delta,
/// timing and float are tunable defaults; zero the offset, delta and float amplitude for a plain
/// fade-in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeMotion {
    /// Duration and easing of each shape's entrance.
    pub transition: Transition,
    /// Opacity before the entrance.
    pub hidden_opacity: f64,
    /// Vertical offset before the entrance.
    pub hidden_offset_y: f64,
    /// Added to the resting rotation before the entrance.
    pub hidden_rotation_delta_deg: f64,
    /// Idle drift started at mount.
    pub float: FloatMotion,
}

impl Default for ShapeMotion {
    fn default() -> Self {
        Self {
            transition: Transition {
                duration_secs: 2.4,
                easing: EasingProfile::from_ease(Ease::CubicBezier {
                    x1: 0.23,
                    y1: 0.86,
                    x2: 0.39,
                    y2: 0.96,
                }),
            },
            hidden_opacity: 0.0,
            hidden_offset_y: -150.0,
            hidden_rotation_delta_deg: -15.0,
            float: FloatMotion::default(),
        }
    }
}

/// Complete motion configuration of a hero panel.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Content block entrances.
    pub content: ContentMotion,
    /// Decorative shape entrances and float.
    pub shapes: ShapeMotion,
    /// Scroll-driven layer mapping.
    pub scroll: ScrollProgressMapper,
}

impl MotionConfig {
    /// Parse a configuration from a JSON reader. Does not validate.
    pub fn from_reader<R: std::io::Read>(r: R) -> HeroResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| HeroError::config(format!("parse motion config JSON: {e}")))
    }

    /// Parse and validate a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> HeroResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            HeroError::config(format!("open motion config '{}': {e}", path.display()))
        })?;
        let cfg = Self::from_reader(BufReader::new(f))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every timing, easing and scroll channel.
    pub fn validate(&self) -> HeroResult<()> {
        self.content.transition.validate()?;
        if !self.content.delay_unit_secs.is_finite() || self.content.delay_unit_secs < 0.0 {
            return Err(HeroError::config("content.delay_unit_secs must be >= 0"));
        }
        if !self.content.hidden.is_finite() || !self.content.visible.is_finite() {
            return Err(HeroError::config("content states must be finite"));
        }

        self.shapes.transition.validate()?;
        self.shapes.float.validate()?;
        let shape_values = [
            self.shapes.hidden_opacity,
            self.shapes.hidden_offset_y,
            self.shapes.hidden_rotation_delta_deg,
        ];
        if !shape_values.iter().all(|v| v.is_finite()) {
            return Err(HeroError::config("shape hidden state must be finite"));
        }

        self.scroll.validate()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
