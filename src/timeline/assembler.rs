/*!
 * Timeline assembler.
 *
 * Resolves each gloss, turns each descriptor into a track, and lays the
 * tracks end to end. Between two pose tracks it inserts a short eased
 * `_TRANSITION_` track from the last pose of one sign to the first pose
 * of the next. Nothing is interpolated across a video track.
 */

use log::debug;

use crate::animation::FingerspellingExpander;
use crate::app_config::{TimelineConfig, MIN_TRANSITION_STEPS};
use crate::errors::SignError;
use crate::gloss::Dialect;
use crate::pose::{Easing, Keyframe};
use crate::resolver::{SignAnimation, SignDescriptor, SignResolver};

use super::track::{AnimationTrack, Timeline, TrackKind, TRANSITION_GLOSS};

/// Builds timelines from gloss sequences
#[derive(Debug, Clone)]
pub struct TimelineAssembler {
    transition_ms: u64,
    transition_steps: usize,
}

impl Default for TimelineAssembler {
    fn default() -> Self {
        Self::from_config(&TimelineConfig::default())
    }
}

impl TimelineAssembler {
    pub fn new(transition_ms: u64, transition_steps: usize) -> Self {
        Self {
            transition_ms,
            transition_steps: transition_steps.max(MIN_TRANSITION_STEPS),
        }
    }

    pub fn from_config(config: &TimelineConfig) -> Self {
        Self::new(config.transition_ms, config.transition_steps)
    }

    /// Resolve and assemble a gloss sequence.
    ///
    /// Fails fast if any gloss is empty; every other gloss resolves.
    pub fn assemble<S: AsRef<str>>(
        &self,
        resolver: &SignResolver,
        glosses: &[S],
        dialect: &Dialect,
        quality: &str,
    ) -> Result<Timeline, SignError> {
        let descriptors = glosses
            .iter()
            .map(|gloss| resolver.resolve(gloss.as_ref(), dialect, quality))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.assemble_descriptors(descriptors.iter().map(|descriptor| descriptor.as_ref())))
    }

    /// Assemble already resolved descriptors
    pub fn assemble_descriptors<'a>(&self, descriptors: impl IntoIterator<Item = &'a SignDescriptor>) -> Timeline {
        let mut tracks: Vec<AnimationTrack> = Vec::new();
        let mut cursor = 0u64;

        for descriptor in descriptors {
            let track = track_for(descriptor, cursor);

            if let Some(previous) = tracks.last() {
                if let Some(transition) = self.transition_between(previous, &track, cursor) {
                    cursor = transition.end_ms;
                    tracks.push(transition);
                }
            }

            let track = shift_track(track, cursor);
            cursor = track.end_ms;
            tracks.push(track);
        }

        debug!("Assembled {} tracks over {}ms", tracks.len(), cursor);

        Timeline {
            tracks,
            total_duration_ms: cursor,
        }
    }

    /// Eased bridge from the end of `from` to the start of `to`.
    ///
    /// None if either side is a video or has no pose to blend.
    fn transition_between(&self, from: &AnimationTrack, to: &AnimationTrack, start_ms: u64) -> Option<AnimationTrack> {
        if self.transition_ms == 0 || from.is_video() || to.is_video() {
            return None;
        }

        let from_pose = from.last_pose()?;
        let to_pose = to.first_pose()?;

        let duration = self.transition_ms as f64;
        let keyframes = (0..=self.transition_steps)
            .map(|step| {
                let linear = step as f32 / self.transition_steps as f32;
                let mut pose = from_pose.interpolate(to_pose, Easing::EaseInOut.apply(linear));
                // Facial states are discrete; show the target right away
                pose.face = to_pose.face.clone();
                Keyframe::new(linear as f64 * duration, pose)
            })
            .collect();

        Some(AnimationTrack {
            gloss: TRANSITION_GLOSS.to_string(),
            kind: TrackKind::Transition,
            start_ms,
            end_ms: start_ms.saturating_add(self.transition_ms),
            keyframes,
            media: None,
        })
    }
}

/// Normalize a descriptor into a track starting at `start_ms`
fn track_for(descriptor: &SignDescriptor, start_ms: u64) -> AnimationTrack {
    let (keyframes, media) = match &descriptor.animation {
        SignAnimation::Video(clip) => (Vec::new(), Some(clip.clone())),
        SignAnimation::Procedural(animation) => (animation.keyframes.clone(), None),
        SignAnimation::Fingerspelling(sequence) => (FingerspellingExpander::keyframes(sequence), None),
    };

    AnimationTrack {
        gloss: descriptor.gloss.clone(),
        kind: TrackKind::Sign {
            source: descriptor.source,
            fallback: descriptor.fallback,
        },
        start_ms,
        end_ms: start_ms.saturating_add(descriptor.duration_ms()),
        keyframes,
        media,
    }
}

fn shift_track(mut track: AnimationTrack, start_ms: u64) -> AnimationTrack {
    let duration = track.duration_ms();
    track.start_ms = start_ms;
    track.end_ms = start_ms.saturating_add(duration);
    track
}
