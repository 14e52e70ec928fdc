use crate::{entrance::descriptor::AnimationDescriptor, foundation::core::VisualState};
use serde::{Deserialize, Serialize};

/// Lifecycle of one element's entrance. Only ever moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrancePhase {
    /// Waiting for mount or for the element's delay to elapse.
    Hidden,
    /// Moving from the initial state toward the target.
    Transitioning,
    /// Resting on the target. Terminal.
    Visible,
}

/// One-shot state machine driving a single [`AnimationDescriptor`].
#[derive(Clone, Debug)]
pub struct EntranceTrack {
    descriptor: AnimationDescriptor,
    mounted_at: Option<f64>,
    phase: EntrancePhase,
    // Latest clock value seen by `advance`.
    high_water: Option<f64>,
}

impl EntranceTrack {
    /// Unmounted track.
    pub fn new(descriptor: AnimationDescriptor) -> Self {
        Self {
            descriptor,
            mounted_at: None,
            phase: EntrancePhase::Hidden,
            high_water: None,
        }
    }

    /// Descriptor driving this track.
    pub fn descriptor(&self) -> &AnimationDescriptor {
        &self.descriptor
    }

    /// Latest phase reached through [`EntranceTrack::advance`].
    pub fn phase(&self) -> EntrancePhase {
        self.phase
    }

    /// Mount instant, once fired.
    pub fn mounted_at(&self) -> Option<f64> {
        self.mounted_at
    }

    /// Start the entrance clock at `now`.
    ///
    /// Returns `false` and changes nothing if the track was already mounted or `now` is not a
    /// finite time; an entrance fires at most once.
    pub fn mount(&mut self, now: f64) -> bool {
        if self.mounted_at.is_some() || !now.is_finite() {
            return false;
        }
        self.mounted_at = Some(now);
        true
    }

    /// Move the phase forward to what `now` implies. A clock that runs backwards never
    /// reverts a phase.
    pub fn advance(&mut self, now: f64) -> EntrancePhase {
        let Some(mounted_at) = self.mounted_at else {
            return self.phase;
        };
        if now.is_nan() {
            return self.phase;
        }
        let now = self.high_water.map_or(now, |hw| hw.max(now));
        self.high_water = Some(now);
        let next = self.descriptor.phase_at(now - mounted_at);
        if next > self.phase {
            tracing::trace!(
                element = %self.descriptor.element,
                from = ?self.phase,
                to = ?next,
                "entrance phase"
            );
            self.phase = next;
        }
        self.phase
    }

    /// Visual state at `now`. Unmounted tracks report their initial state; a track that has
    /// reached [`EntrancePhase::Visible`] keeps reporting its target.
    ///
    /// `now` is never earlier than the latest time passed to [`EntranceTrack::advance`], so the
    /// state cannot fall behind the phase.
    pub fn sample(&self, now: f64) -> VisualState {
        match (self.mounted_at, self.phase) {
            (None, _) => self.descriptor.initial,
            (Some(_), EntrancePhase::Visible) => self.descriptor.target,
            (Some(mounted_at), _) => {
                let now = self.high_water.map_or(now, |hw| hw.max(now));
                self.descriptor.sample(now - mounted_at)
            }
        }
    }
}

/// All entrance tracks of one hero mount.
#[derive(Clone, Debug, Default)]
pub struct EntranceTimeline {
    tracks: Vec<EntranceTrack>,
    mounted_at: Option<f64>,
}

impl EntranceTimeline {
    /// Timeline over `descriptors`, in order.
    pub fn new(descriptors: impl IntoIterator<Item = AnimationDescriptor>) -> Self {
        Self {
            tracks: descriptors.into_iter().map(EntranceTrack::new).collect(),
            mounted_at: None,
        }
    }

    /// Tracks in descriptor order.
    pub fn tracks(&self) -> &[EntranceTrack] {
        &self.tracks
    }

    /// Mount instant, once fired.
    pub fn mounted_at(&self) -> Option<f64> {
        self.mounted_at
    }

    /// Fire every track at `now`. Only the first call has an effect.
    pub fn mount(&mut self, now: f64) -> bool {
        if self.mounted_at.is_some() || !now.is_finite() {
            return false;
        }
        self.mounted_at = Some(now);
        for track in &mut self.tracks {
            track.mount(now);
        }
        tracing::debug!(tracks = self.tracks.len(), at = now, "entrance timeline mounted");
        true
    }

    /// Advance every track; returns their phases in order.
    pub fn advance(&mut self, now: f64) -> Vec<EntrancePhase> {
        self.tracks.iter_mut().map(|t| t.advance(now)).collect()
    }

    /// `true` once every track is [`EntrancePhase::Visible`].
    pub fn is_complete(&self) -> bool {
        self.tracks
            .iter()
            .all(|t| t.phase() == EntrancePhase::Visible)
    }

    /// Time after mount at which the last entrance completes.
    pub fn settle_secs(&self) -> f64 {
        self.tracks
            .iter()
            .map(|t| t.descriptor().end_secs())
            .fold(0.0, f64::max)
    }

    /// Tear the timeline down, dropping every track. Returns how many entrances were cut short.
    pub fn abandon(self) -> usize {
        let unfinished = self
            .tracks
            .iter()
            .filter(|t| t.phase() != EntrancePhase::Visible)
            .count();
        tracing::debug!(
            tracks = self.tracks.len(),
            unfinished,
            "entrance timeline abandoned"
        );
        unfinished
    }
}

#[cfg(test)]
#[path = "../../tests/unit/entrance/state.rs"]
mod tests;
