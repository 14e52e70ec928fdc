use crate::{
    config::{ContentMotion, MotionConfig, ShapeMotion},
    entrance::descriptor::{AnimationDescriptor, Delay, ElementKind},
    foundation::core::VisualState,
    hero::layout::{ContentBlock, ShapeSpec},
};

/// Builds one entrance descriptor per hero element from the motion configuration.
#[derive(Clone, Debug)]
pub struct EntranceSequencer {
    content: ContentMotion,
    shapes: ShapeMotion,
}

impl EntranceSequencer {
    /// Sequencer using the entrance settings of `config`.
    pub fn new(config: &MotionConfig) -> Self {
        Self {
            content: config.content.clone(),
            shapes: config.shapes.clone(),
        }
    }

    /// Descriptors for `blocks` followed by `shapes`, each in input order.
    pub fn sequence(
        &self,
        blocks: &[ContentBlock],
        shapes: &[ShapeSpec],
    ) -> Vec<AnimationDescriptor> {
        blocks
            .iter()
            .map(|b| self.content_descriptor(b))
            .chain(shapes.iter().map(|s| self.shape_descriptor(s)))
            .collect()
    }

    /// Descriptor for one content block; a missing ordinal fires on mount.
    pub fn content_descriptor(&self, block: &ContentBlock) -> AnimationDescriptor {
        let delay = Delay::Index(block.delay_index.unwrap_or(0));
        AnimationDescriptor {
            element: block.id.clone(),
            kind: ElementKind::Content,
            initial: self.content.hidden,
            target: self.content.visible,
            delay,
            start_secs: delay.resolve(self.content.delay_unit_secs),
            transition: self.content.transition,
        }
    }

    /// Descriptor for one shape, keeping its literal delay.
    pub fn shape_descriptor(&self, shape: &ShapeSpec) -> AnimationDescriptor {
        let delay = Delay::Literal(shape.delay_secs.unwrap_or(0.0));
        AnimationDescriptor {
            element: shape.id.clone(),
            kind: ElementKind::Shape,
            initial: VisualState::new(
                self.shapes.hidden_opacity,
                self.shapes.hidden_offset_y,
                shape.rotation_deg + self.shapes.hidden_rotation_delta_deg,
            ),
            target: VisualState::new(1.0, 0.0, shape.rotation_deg),
            delay,
            start_secs: delay.resolve(1.0),
            transition: self.shapes.transition,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/entrance/sequencer.rs"]
mod tests;
