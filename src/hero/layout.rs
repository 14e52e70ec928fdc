use crate::foundation::{
    core::{Point, Size},
    error::{HeroError, HeroResult},
};
use serde::{Deserialize, Serialize};

/// Role of a content block inside the hero copy column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Small pill above the headline.
    Badge,
    /// Main title.
    Headline,
    /// Supporting paragraph.
    Description,
    /// Call-to-action row.
    Actions,
}

/// One entrance-animated block of hero content. Copy and links are host-supplied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Stable identifier.
    pub id: String,
    /// Role of the block.
    pub kind: ContentKind,
    /// Stagger ordinal; `None` fires with the first block.
    #[serde(default)]
    pub delay_index: Option<u32>,
}

impl ContentBlock {
    /// Block with an explicit stagger ordinal.
    pub fn new(id: impl Into<String>, kind: ContentKind, delay_index: u32) -> Self {
        Self {
            id: id.into(),
            kind,
            delay_index: Some(delay_index),
        }
    }
}

/// Horizontal anchor, as a percentage of canvas width measured from that edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalEdge {
    /// Distance of the shape's left side from the canvas's left edge.
    Left(f64),
    /// Distance of the shape's right side from the canvas's right edge.
    Right(f64),
}

/// Vertical anchor, as a percentage of canvas height measured from that edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalEdge {
    /// Distance of the shape's top from the canvas's top edge.
    Top(f64),
    /// Distance of the shape's bottom from the canvas's bottom edge.
    Bottom(f64),
}

/// Edge-relative placement of a decorative shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Horizontal anchor.
    pub x: HorizontalEdge,
    /// Vertical anchor.
    pub y: VerticalEdge,
}

impl Placement {
    /// Resolve the top-left corner of a `shape`-sized box on a `canvas`.
    pub fn origin(self, canvas: Size, shape: Size) -> Point {
        let x = match self.x {
            HorizontalEdge::Left(pct) => canvas.width * pct / 100.0,
            HorizontalEdge::Right(pct) => canvas.width - canvas.width * pct / 100.0 - shape.width,
        };
        let y = match self.y {
            VerticalEdge::Top(pct) => canvas.height * pct / 100.0,
            VerticalEdge::Bottom(pct) => {
                canvas.height - canvas.height * pct / 100.0 - shape.height
            }
        };
        Point::new(x, y)
    }

    fn is_finite(self) -> bool {
        let x = match self.x {
            HorizontalEdge::Left(v) | HorizontalEdge::Right(v) => v,
        };
        let y = match self.y {
            VerticalEdge::Top(v) | VerticalEdge::Bottom(v) => v,
        };
        x.is_finite() && y.is_finite()
    }
}

/// Static layout of one decorative shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeSpec {
    /// Stable identifier.
    pub id: String,
    /// Box size.
    pub size: Size,
    /// Resting rotation in degrees.
    pub rotation_deg: f64,
    /// Where the box sits on the canvas.
    pub placement: Placement,
    /// Opaque gradient styling token, passed through to the renderer.
    pub gradient: String,
    /// Literal entrance delay in seconds; `None` fires on mount.
    #[serde(default)]
    pub delay_secs: Option<f64>,
}

/// Ordered content blocks plus decorative shapes of one hero panel.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct HeroLayout {
    /// Content column, top to bottom.
    pub blocks: Vec<ContentBlock>,
    /// Decorative shapes, back to front.
    pub shapes: Vec<ShapeSpec>,
}

impl HeroLayout {
    /// The reference hero: badge, headline, description and actions staggered 0..3, over five
    /// hand-tuned shapes.
    pub fn standard() -> Self {
        let blocks = vec![
            ContentBlock::new("badge", ContentKind::Badge, 0),
            ContentBlock::new("headline", ContentKind::Headline, 1),
            ContentBlock::new("description", ContentKind::Description, 2),
            ContentBlock::new("actions", ContentKind::Actions, 3),
        ];

        let shape = |id: &str,
                     (w, h): (f64, f64),
                     rotation_deg: f64,
                     x: HorizontalEdge,
                     y: VerticalEdge,
                     gradient: &str,
                     delay: f64| ShapeSpec {
            id: id.to_string(),
            size: Size::new(w, h),
            rotation_deg,
            placement: Placement { x, y },
            gradient: gradient.to_string(),
            delay_secs: Some(delay),
        };

        // Delays are per-shape tuning, not an index scheme.
        let shapes = vec![
            shape(
                "shape-0",
                (600.0, 140.0),
                12.0,
                HorizontalEdge::Left(-10.0),
                VerticalEdge::Top(15.0),
                "blue-500/0.15",
                0.3,
            ),
            shape(
                "shape-1",
                (500.0, 120.0),
                -15.0,
                HorizontalEdge::Right(-5.0),
                VerticalEdge::Top(70.0),
                "purple-500/0.15",
                0.5,
            ),
            shape(
                "shape-2",
                (300.0, 80.0),
                -8.0,
                HorizontalEdge::Left(5.0),
                VerticalEdge::Bottom(5.0),
                "cyan-500/0.15",
                0.4,
            ),
            shape(
                "shape-3",
                (200.0, 60.0),
                20.0,
                HorizontalEdge::Right(15.0),
                VerticalEdge::Top(10.0),
                "green-500/0.15",
                0.6,
            ),
            shape(
                "shape-4",
                (150.0, 40.0),
                -25.0,
                HorizontalEdge::Left(20.0),
                VerticalEdge::Top(5.0),
                "yellow-500/0.15",
                0.7,
            ),
        ];

        Self { blocks, shapes }
    }

    /// Reject duplicate ids and non-finite geometry.
    pub fn validate(&self) -> HeroResult<()> {
        let mut seen = std::collections::HashSet::new();
        let ids = self
            .blocks
            .iter()
            .map(|b| b.id.as_str())
            .chain(self.shapes.iter().map(|s| s.id.as_str()));
        for id in ids {
            if !seen.insert(id) {
                return Err(HeroError::validation(format!(
                    "duplicate hero element id '{id}'"
                )));
            }
        }

        for s in &self.shapes {
            let finite = s.size.width.is_finite()
                && s.size.height.is_finite()
                && s.rotation_deg.is_finite()
                && s.placement.is_finite();
            if !finite {
                return Err(HeroError::validation(format!(
                    "shape '{}' has non-finite geometry",
                    s.id
                )));
            }
            if s.size.width < 0.0 || s.size.height < 0.0 {
                return Err(HeroError::validation(format!(
                    "shape '{}' has negative size",
                    s.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hero/layout.rs"]
mod tests;
