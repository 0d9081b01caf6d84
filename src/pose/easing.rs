/*!
 * Easing curves.
 *
 * Authored keyframes interpolate linearly; only synthetic transitions
 * between signs use the quadratic ease-in-out curve.
 */

use serde::{Deserialize, Serialize};

/// Interpolation curve applied to a normalized time `t` in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => ease_in_out_quad(t),
        }
    }
}

/// Quadratic ease-in-out: `2t²` for the first half, `1 - (-2t + 2)² / 2` after
pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
