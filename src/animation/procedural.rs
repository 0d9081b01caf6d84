/*!
 * Procedural animation generator.
 *
 * Expands a compact `MotionSpec` into a dense keyframe track sampled at a
 * fixed rate. Each hand moves linearly from its start to its end position
 * with its motion modifiers added on top. The facial expression is set at
 * four points only: neutral at the start, the target expression shortly
 * after the start and shortly before the end, neutral at the end.
 *
 * The explicit motion ends `settle_ms` before the sign's duration; a final
 * keyframe at the full duration returns every tracked part to neutral.
 */

use log::debug;

use crate::app_config::AnimationConfig;
use crate::library::{HandMotion, MotionSpec};
use crate::pose::frame::RELAXED_HANDSHAPE;
use crate::pose::{FacePose, HandPose, Keyframe, PoseFrame};
use crate::resolver::descriptor::ProceduralAnimation;

/// Normalized time at which the target expression is first shown
const EXPRESSION_ONSET: f32 = 0.1;

/// Normalized time at which the target expression is last shown
const EXPRESSION_RELEASE: f32 = 0.9;

/// Expands motion specs into keyframe tracks
#[derive(Debug, Clone)]
pub struct ProceduralGenerator {
    sample_rate_hz: u32,
    settle_ms: u64,
}

impl Default for ProceduralGenerator {
    fn default() -> Self {
        Self::from_config(&AnimationConfig::default())
    }
}

impl ProceduralGenerator {
    pub fn new(sample_rate_hz: u32, settle_ms: u64) -> Self {
        Self {
            sample_rate_hz: sample_rate_hz.max(1),
            settle_ms,
        }
    }

    pub fn from_config(config: &AnimationConfig) -> Self {
        Self::new(config.sample_rate_hz, config.neutral_settle_ms)
    }

    /// Expand a motion spec into a dense track ending in a neutral pose
    pub fn generate(&self, spec: &MotionSpec) -> ProceduralAnimation {
        let duration_ms = spec.duration_ms().max(1);
        let settle_ms = self.settle_ms.min(duration_ms / 4).max(1).min(duration_ms);
        let motion_ms = (duration_ms - settle_ms) as f64;

        // At least one interior frame so the target expression always shows
        let total_frames = (motion_ms * self.sample_rate_hz as f64 / 1000.0).ceil().max(2.0) as usize;
        let last_interior = total_frames - 1;
        let onset_frame = ((total_frames as f32 * EXPRESSION_ONSET).ceil() as usize).clamp(1, last_interior);
        let release_frame = ((total_frames as f32 * EXPRESSION_RELEASE).floor() as usize).clamp(1, last_interior);
        let target_face = FacePose::from_expression(&spec.expression);

        let mut keyframes = Vec::with_capacity(total_frames + 2);
        for i in 0..=total_frames {
            let t = i as f32 / total_frames as f32;

            let face = if i == 0 || i == total_frames {
                Some(FacePose::neutral())
            } else if i == onset_frame || i == release_frame {
                Some(target_face.clone())
            } else {
                None
            };

            let pose = PoseFrame {
                right_hand: spec.right_hand.as_ref().map(|hand| hand_pose_at(hand, t)),
                left_hand: spec.left_hand.as_ref().map(|hand| hand_pose_at(hand, t)),
                face,
                ..Default::default()
            };

            keyframes.push(Keyframe::new(t as f64 * motion_ms, pose));
        }

        let neutral = keyframes
            .last()
            .map(|keyframe| keyframe.pose.neutral_like())
            .unwrap_or_default();
        keyframes.push(Keyframe::new(duration_ms as f64, neutral));

        debug!(
            "Generated {} keyframes over {}ms ({} Hz)",
            keyframes.len(),
            duration_ms,
            self.sample_rate_hz
        );

        ProceduralAnimation { duration_ms, keyframes }
    }
}

/// Handshape from flags: fist > pointing > palm up > relaxed
pub fn handshape_for(motion: &HandMotion) -> &'static str {
    if motion.fist {
        "fist"
    } else if motion.pointing {
        "pointing"
    } else if motion.palm_up {
        "palm_up"
    } else {
        RELAXED_HANDSHAPE
    }
}

fn hand_pose_at(motion: &HandMotion, t: f32) -> HandPose {
    let position = motion
        .modifiers
        .iter()
        .fold(motion.start.lerp(motion.end, t), |position, modifier| position + modifier.offset(t));

    HandPose {
        position,
        rotation: motion.start_rotation.lerp(motion.end_rotation, t),
        handshape: handshape_for(motion).to_string(),
        palm_orientation: if motion.palm_up { "up" } else { "forward" }.to_string(),
        landmarks: None,
    }
}
