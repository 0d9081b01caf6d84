/*!
 * Motion modifiers.
 *
 * Each modifier is a pure function of normalized time `t` returning an
 * offset added to the linear start→end path. A hand may carry several;
 * they are applied in declaration order.
 */

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::pose::Vec3;

/// Additive perturbation of a hand path
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionModifier {
    Wave,
    Circular,
    Nod,
    Shake,
    Tap,
}

/// Offset at normalized time `t`
pub type Perturbation = fn(f32) -> Vec3;

const PERTURBATIONS: [(MotionModifier, Perturbation); 5] = [
    (MotionModifier::Wave, wave),
    (MotionModifier::Circular, circular),
    (MotionModifier::Nod, nod),
    (MotionModifier::Shake, shake),
    (MotionModifier::Tap, tap),
];

impl MotionModifier {
    pub const ALL: [MotionModifier; 5] = [
        MotionModifier::Wave,
        MotionModifier::Circular,
        MotionModifier::Nod,
        MotionModifier::Shake,
        MotionModifier::Tap,
    ];

    pub fn perturbation(self) -> Perturbation {
        PERTURBATIONS[self as usize].1
    }

    pub fn offset(self, t: f32) -> Vec3 {
        (self.perturbation())(t)
    }
}

fn wave(t: f32) -> Vec3 {
    Vec3::new((t * 4.0 * PI).sin() * 0.05, 0.0, 0.0)
}

fn circular(t: f32) -> Vec3 {
    let angle = t * 2.0 * PI;
    Vec3::new(angle.cos() * 0.03, angle.sin() * 0.03, 0.0)
}

fn nod(t: f32) -> Vec3 {
    Vec3::new(0.0, (t * 4.0 * PI).sin() * 0.03, 0.0)
}

fn shake(t: f32) -> Vec3 {
    Vec3::new((t * 6.0 * PI).sin() * 0.04, 0.0, 0.0)
}

// Brief forward dip in the middle of the sign
fn tap(t: f32) -> Vec3 {
    if t > 0.4 && t < 0.6 {
        Vec3::new(0.0, 0.0, -0.02)
    } else {
        Vec3::ZERO
    }
}
