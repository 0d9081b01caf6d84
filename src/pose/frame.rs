/*!
 * Pose frames and keyframes.
 *
 * Every sub-structure of a `PoseFrame` is optional. A missing part means
 * "unspecified": a renderer applying the frame leaves that part alone.
 *
 * Continuous attributes (positions, rotations, lean) interpolate linearly.
 * Discrete attributes (handshape, palm orientation, facial expression)
 * switch to the later keyframe's value once `t > 0.5`.
 */

use serde::{Deserialize, Serialize};

use super::vector::{Vec2, Vec3};

/// Handshape used when nothing more specific is known
pub const RELAXED_HANDSHAPE: &str = "relaxed";

/// Expression name for a resting face
pub const NEUTRAL_EXPRESSION: &str = "neutral";

/// Pick the earlier or later value of a discrete attribute
pub fn pick_discrete<'a, T>(earlier: &'a T, later: &'a T, t: f32) -> &'a T {
    if t > 0.5 { later } else { earlier }
}

/// One hand's configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandPose {
    #[serde(default)]
    pub position: Vec3,

    #[serde(default)]
    pub rotation: Vec3,

    #[serde(default = "default_handshape")]
    pub handshape: String,

    #[serde(default = "default_palm_orientation")]
    pub palm_orientation: String,

    /// Per-finger landmarks, when captured from a tracker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmarks: Option<Vec<Vec3>>,
}

fn default_handshape() -> String {
    RELAXED_HANDSHAPE.to_string()
}

fn default_palm_orientation() -> String {
    "down".to_string()
}

impl HandPose {
    pub fn new(position: Vec3, handshape: &str) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            handshape: handshape.to_string(),
            palm_orientation: default_palm_orientation(),
            landmarks: None,
        }
    }

    /// Right hand resting beside the body
    pub fn neutral_right() -> Self {
        Self::new(Vec3::new(0.2, -0.4, 0.1), RELAXED_HANDSHAPE)
    }

    /// Left hand resting beside the body
    pub fn neutral_left() -> Self {
        Self::new(Vec3::new(-0.2, -0.4, 0.1), RELAXED_HANDSHAPE)
    }

    pub fn interpolate(&self, other: &HandPose, t: f32) -> HandPose {
        let landmarks = match (&self.landmarks, &other.landmarks) {
            (Some(a), Some(b)) if a.len() == b.len() => {
                Some(a.iter().zip(b).map(|(p, q)| p.lerp(*q, t)).collect())
            }
            (a, b) => pick_discrete(a, b, t).clone(),
        };

        HandPose {
            position: self.position.lerp(other.position, t),
            rotation: self.rotation.lerp(other.rotation, t),
            handshape: pick_discrete(&self.handshape, &other.handshape, t).clone(),
            palm_orientation: pick_discrete(&self.palm_orientation, &other.palm_orientation, t)
                .clone(),
            landmarks,
        }
    }
}

/// Head placement
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeadPose {
    #[serde(default)]
    pub position: Vec3,
    #[serde(default)]
    pub rotation: Vec3,
}

impl HeadPose {
    pub fn interpolate(&self, other: &HeadPose, t: f32) -> HeadPose {
        HeadPose {
            position: self.position.lerp(other.position, t),
            rotation: self.rotation.lerp(other.rotation, t),
        }
    }
}

/// Torso lean (sideways, forward)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TorsoPose {
    #[serde(default)]
    pub lean: Vec2,
}

impl TorsoPose {
    pub fn interpolate(&self, other: &TorsoPose, t: f32) -> TorsoPose {
        TorsoPose {
            lean: self.lean.lerp(other.lean, t),
        }
    }
}

/// Non-manual markers. Always treated as one discrete state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacePose {
    /// Named expression this face was built from
    #[serde(default = "default_expression")]
    pub expression: String,
    #[serde(default = "default_feature")]
    pub eyebrows: String,
    #[serde(default = "default_eyes")]
    pub eyes: String,
    #[serde(default = "default_feature")]
    pub mouth: String,
    #[serde(default)]
    pub head_nod: bool,
}

fn default_expression() -> String {
    NEUTRAL_EXPRESSION.to_string()
}

fn default_feature() -> String {
    "neutral".to_string()
}

fn default_eyes() -> String {
    "open".to_string()
}

impl FacePose {
    pub fn neutral() -> Self {
        Self::from_expression(NEUTRAL_EXPRESSION)
    }

    /// Build the facial features for a named expression.
    ///
    /// Unknown names keep their label but use neutral features.
    pub fn from_expression(expression: &str) -> Self {
        let name = expression.trim().to_lowercase();
        let (eyebrows, eyes, mouth, head_nod) = match name.as_str() {
            "happy" | "friendly" => ("raised", "open", "smile", false),
            "questioning" | "question" => ("raised", "wide", "neutral", false),
            "wh-question" => ("furrowed", "narrowed", "neutral", false),
            "affirmative" => ("neutral", "open", "neutral", true),
            "negative" => ("furrowed", "open", "frown", false),
            "serious" | "concerned" => ("furrowed", "narrowed", "closed", false),
            "sad" | "apologetic" => ("lowered", "soft", "frown", false),
            "surprised" => ("raised", "wide", "open", false),
            _ => ("neutral", "open", "neutral", false),
        };

        Self {
            expression: if name.is_empty() { default_expression() } else { name },
            eyebrows: eyebrows.to_string(),
            eyes: eyes.to_string(),
            mouth: mouth.to_string(),
            head_nod,
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.expression == NEUTRAL_EXPRESSION
    }
}

/// A point-in-time snapshot of the avatar
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PoseFrame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_hand: Option<HandPose>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_hand: Option<HandPose>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<HeadPose>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torso: Option<TorsoPose>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face: Option<FacePose>,
}

impl PoseFrame {
    /// True when the frame specifies nothing at all
    pub fn is_empty(&self) -> bool {
        self.right_hand.is_none()
            && self.left_hand.is_none()
            && self.head.is_none()
            && self.torso.is_none()
            && self.face.is_none()
    }

    /// Neutral stance for every part this frame specifies.
    ///
    /// Parts the frame leaves unspecified stay unspecified.
    pub fn neutral_like(&self) -> PoseFrame {
        PoseFrame {
            right_hand: self.right_hand.as_ref().map(|_| HandPose::neutral_right()),
            left_hand: self.left_hand.as_ref().map(|_| HandPose::neutral_left()),
            head: self.head.as_ref().map(|_| HeadPose::default()),
            torso: self.torso.as_ref().map(|_| TorsoPose::default()),
            face: self.face.as_ref().map(|_| FacePose::neutral()),
        }
    }

    /// Interpolate towards `other` at normalized time `t`
    pub fn interpolate(&self, other: &PoseFrame, t: f32) -> PoseFrame {
        let t = t.clamp(0.0, 1.0);
        PoseFrame {
            right_hand: blend(&self.right_hand, &other.right_hand, t, HandPose::interpolate),
            left_hand: blend(&self.left_hand, &other.left_hand, t, HandPose::interpolate),
            head: blend(&self.head, &other.head, t, HeadPose::interpolate),
            torso: blend(&self.torso, &other.torso, t, TorsoPose::interpolate),
            face: pick_discrete(&self.face, &other.face, t).clone(),
        }
    }
}

/// Interpolate two optional parts; a part present on one side only is discrete
fn blend<T: Clone>(
    earlier: &Option<T>,
    later: &Option<T>,
    t: f32,
    lerp: impl Fn(&T, &T, f32) -> T,
) -> Option<T> {
    match (earlier, later) {
        (Some(a), Some(b)) => Some(lerp(a, b, t)),
        _ => pick_discrete(earlier, later, t).clone(),
    }
}

/// A timestamped pose, relative to the start of its track
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Keyframe {
    pub time_ms: f64,
    #[serde(flatten)]
    pub pose: PoseFrame,
}

impl Keyframe {
    pub fn new(time_ms: f64, pose: PoseFrame) -> Self {
        Self { time_ms, pose }
    }
}
