/*!
 * Animation tracks and the global timeline.
 *
 * Keyframe times are local to their track; `start_ms`/`end_ms` place the
 * track on the global timeline. Adjacent tracks share a boundary
 * (`next.start_ms == previous.end_ms`).
 *
 * Scrubbing is called once per render tick: it binary-searches the active
 * track, then the bracketing keyframe pair, and never extrapolates past
 * the first or last keyframe.
 */

use serde::{Deserialize, Serialize};

use crate::pose::{Keyframe, PoseFrame};
use crate::resolver::{SignSource, VideoClip};

/// Gloss label of synthetic transition tracks
pub const TRANSITION_GLOSS: &str = "_TRANSITION_";

/// What produced a track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TrackKind {
    Sign { source: SignSource, fallback: bool },
    Transition,
}

/// Time-stamped poses for one sign or transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationTrack {
    pub gloss: String,
    #[serde(flatten)]
    pub kind: TrackKind,
    pub start_ms: u64,
    pub end_ms: u64,
    /// Empty for video tracks: play the media, do not interpolate a pose
    pub keyframes: Vec<Keyframe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<VideoClip>,
}

impl AnimationTrack {
    pub fn duration_ms(&self) -> u64 {
        self.end_ms - self.start_ms
    }

    pub fn is_transition(&self) -> bool {
        self.kind == TrackKind::Transition
    }

    pub fn is_video(&self) -> bool {
        self.media.is_some()
    }

    pub fn first_pose(&self) -> Option<&PoseFrame> {
        self.keyframes.first().map(|keyframe| &keyframe.pose)
    }

    pub fn last_pose(&self) -> Option<&PoseFrame> {
        self.keyframes.last().map(|keyframe| &keyframe.pose)
    }

    /// Pose at a time local to this track, holding the first/last keyframe outside the range
    pub fn pose_at(&self, local_ms: f64) -> PoseFrame {
        let (first, last) = match (self.keyframes.first(), self.keyframes.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return PoseFrame::default(),
        };

        if local_ms <= first.time_ms {
            return first.pose.clone();
        }
        if local_ms >= last.time_ms {
            return last.pose.clone();
        }

        let upper = self.keyframes.partition_point(|keyframe| keyframe.time_ms <= local_ms);
        let a = &self.keyframes[upper - 1];
        let b = &self.keyframes[upper];

        let span = b.time_ms - a.time_ms;
        let t = if span > 0.0 { (local_ms - a.time_ms) / span } else { 1.0 };
        a.pose.interpolate(&b.pose, t as f32)
    }
}

/// Everything a renderer needs for one tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineSample<'a> {
    pub track_index: usize,
    pub gloss: &'a str,
    /// Time since the start of the active track
    pub local_ms: f64,
    /// Media to play instead of a pose, for video tracks
    pub media: Option<&'a VideoClip>,
    pub pose: PoseFrame,
}

/// Ordered, contiguous tracks for a whole sign sequence
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Timeline {
    pub tracks: Vec<AnimationTrack>,
    pub total_duration_ms: u64,
}

impl Timeline {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Glosses of the sign tracks, transitions excluded
    pub fn glosses(&self) -> Vec<&str> {
        self.tracks
            .iter()
            .filter(|track| !track.is_transition())
            .map(|track| track.gloss.as_str())
            .collect()
    }

    /// Whether tracks are ordered, gap-free and end at the total duration
    pub fn is_contiguous(&self) -> bool {
        let starts_at_zero = self.tracks.first().is_none_or(|track| track.start_ms == 0);
        let gap_free = self
            .tracks
            .windows(2)
            .all(|pair| pair[1].start_ms == pair[0].end_ms);
        let total_matches = self
            .tracks
            .last()
            .map_or(self.total_duration_ms == 0, |track| track.end_ms == self.total_duration_ms);

        starts_at_zero && gap_free && total_matches
    }

    /// Index of the track active at `time_ms`, clamped to the timeline.
    ///
    /// On a boundary shared by two tracks the later one is active.
    pub fn active_track_index(&self, time_ms: f64) -> Option<usize> {
        if self.tracks.is_empty() {
            return None;
        }

        let time = time_ms.clamp(0.0, self.total_duration_ms as f64);
        let after = self.tracks.partition_point(|track| track.start_ms as f64 <= time);
        Some(after.saturating_sub(1))
    }

    /// Pose and track details at `time_ms`
    pub fn sample(&self, time_ms: f64) -> Option<TimelineSample<'_>> {
        let track_index = self.active_track_index(time_ms)?;
        let track = &self.tracks[track_index];

        let time = time_ms.clamp(0.0, self.total_duration_ms as f64);
        let local_ms = (time - track.start_ms as f64).clamp(0.0, track.duration_ms() as f64);

        Some(TimelineSample {
            track_index,
            gloss: &track.gloss,
            local_ms,
            media: track.media.as_ref(),
            pose: track.pose_at(local_ms),
        })
    }

    /// Pose at `time_ms`; empty for an empty timeline or a video track
    pub fn scrub(&self, time_ms: f64) -> PoseFrame {
        self.sample(time_ms).map(|sample| sample.pose).unwrap_or_default()
    }
}
