use crate::{
    animation::anim::FloatMotion,
    config::MotionConfig,
    entrance::{
        descriptor::AnimationDescriptor,
        sequencer::EntranceSequencer,
        state::{EntrancePhase, EntranceTimeline},
    },
    foundation::core::{Affine, Canvas, Size, Transform2D, Vec2, VisualState},
    foundation::error::HeroResult,
    hero::layout::{ContentKind, HeroLayout, ShapeSpec},
    scroll::mapper::{ScrollFrame, ScrollProgressMapper},
};

/// Fully resolved hero state for one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct HeroFrame {
    /// Wall-clock time the frame was evaluated at.
    pub time_secs: f64,
    /// Scroll-derived layer parameters.
    pub scroll: ScrollFrame,
    /// Content blocks in layout order.
    pub blocks: Vec<BlockFrame>,
    /// Decorative shapes in layout order.
    pub shapes: Vec<ShapeFrame>,
    /// Every entrance has completed.
    pub settled: bool,
}

/// Resolved state of one content block.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BlockFrame {
    /// Block identifier.
    pub id: String,
    /// Block role.
    pub kind: ContentKind,
    /// Entrance phase.
    pub phase: EntrancePhase,
    /// Entrance state with the content layer opacity applied.
    pub state: VisualState,
}

/// Resolved state of one decorative shape.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ShapeFrame {
    /// Shape identifier.
    pub id: String,
    /// Entrance phase.
    pub phase: EntrancePhase,
    /// Entrance state plus idle float and parallax, with the layer opacity applied.
    pub state: VisualState,
    /// Idle float contribution to `state.offset_y`.
    pub float_offset: f64,
    /// Box size.
    pub size: Size,
    /// Places the shape's local box on the canvas: origin, vertical offset, rotation about center.
    pub transform: Affine,
    /// Styling token, passed through.
    pub gradient: String,
}

/// One mounted instance of the hero panel.
///
/// Owns the layout, the motion configuration and the entrance timeline. Scroll input is never
/// stored: each [`HeroPanel::frame`] call maps the value it is given.
#[derive(Debug)]
pub struct HeroPanel {
    layout: HeroLayout,
    mapper: ScrollProgressMapper,
    float: FloatMotion,
    timeline: EntranceTimeline,
    canvas: Canvas,
}

impl HeroPanel {
    /// Validate `layout` and `config` and sequence every entrance.
    pub fn new(layout: HeroLayout, config: MotionConfig) -> HeroResult<Self> {
        config.validate()?;
        layout.validate()?;
        let descriptors = EntranceSequencer::new(&config).sequence(&layout.blocks, &layout.shapes);
        Ok(Self {
            mapper: config.scroll,
            float: config.shapes.float,
            timeline: EntranceTimeline::new(descriptors),
            canvas: Canvas::default(),
            layout,
        })
    }

    /// Lay shapes out on `canvas` instead of the default viewport.
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    /// Static layout.
    pub fn layout(&self) -> &HeroLayout {
        &self.layout
    }

    /// Entrance descriptors: content blocks first, then shapes.
    pub fn descriptors(&self) -> impl Iterator<Item = &AnimationDescriptor> {
        self.timeline.tracks().iter().map(|t| t.descriptor())
    }

    /// Scroll mapping used by this panel.
    pub fn scroll_mapper(&self) -> &ScrollProgressMapper {
        &self.mapper
    }

    /// Time after mount at which the last entrance completes.
    pub fn settle_secs(&self) -> f64 {
        self.timeline.settle_secs()
    }

    /// Fire every entrance at `now`. Later calls (re-renders) are ignored.
    pub fn mount(&mut self, now: f64) -> bool {
        self.timeline.mount(now)
    }

    #[tracing::instrument(level = "trace", skip(self))]
    /// Evaluate the panel at `now` for an optional scroll signal.
    pub fn frame(&mut self, now: f64, scroll: Option<f64>) -> HeroFrame {
        let scroll = self.mapper.map(scroll);
        self.timeline.advance(now);

        let (block_tracks, shape_tracks) =
            self.timeline.tracks().split_at(self.layout.blocks.len());

        let blocks = self
            .layout
            .blocks
            .iter()
            .zip(block_tracks)
            .map(|(block, track)| {
                let mut state = track.sample(now);
                state.opacity *= scroll.content_opacity;
                BlockFrame {
                    id: block.id.clone(),
                    kind: block.kind,
                    phase: track.phase(),
                    state,
                }
            })
            .collect();

        let since_mount = self.timeline.mounted_at().map_or(0.0, |t| now - t);
        let float_offset = self.float.offset_at(since_mount);
        let canvas = self.canvas.size();

        let shapes = self
            .layout
            .shapes
            .iter()
            .zip(shape_tracks)
            .map(|(shape, track)| {
                let entrance = track.sample(now);
                let state = VisualState {
                    opacity: entrance.opacity * scroll.decorative_opacity,
                    offset_y: entrance.offset_y + float_offset + scroll.decorative_offset,
                    rotation_deg: entrance.rotation_deg,
                };
                ShapeFrame {
                    id: shape.id.clone(),
                    phase: track.phase(),
                    state,
                    float_offset,
                    size: shape.size,
                    transform: shape_transform(shape, state, canvas),
                    gradient: shape.gradient.clone(),
                }
            })
            .collect();

        HeroFrame {
            time_secs: now,
            scroll,
            blocks,
            shapes,
            settled: self.timeline.is_complete(),
        }
    }

    /// Tear the panel down. Returns how many entrances never finished.
    pub fn unmount(self) -> usize {
        self.timeline.abandon()
    }
}

fn shape_transform(shape: &ShapeSpec, state: VisualState, canvas: Size) -> Affine {
    let origin = shape.placement.origin(canvas, shape.size);
    Transform2D {
        translate: origin.to_vec2() + Vec2::new(0.0, state.offset_y),
        rotation_rad: state.rotation_deg.to_radians(),
        anchor: Vec2::new(shape.size.width / 2.0, shape.size.height / 2.0),
    }
    .to_affine()
}

#[cfg(test)]
#[path = "../../tests/unit/hero/panel.rs"]
mod tests;
