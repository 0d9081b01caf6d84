/*!
 * Cosine similarity over flattened keyframes.
 *
 * A pose flattens to right-hand position, left-hand position, then any
 * per-finger landmarks. Missing hands contribute zeros so both sides of a
 * comparison stay aligned.
 */

use crate::pose::{HandPose, PoseFrame, Vec3};

/// Cosine similarity of two vectors, in [-1, 1].
///
/// Compares the common prefix when lengths differ. A zero-magnitude
/// vector on either side yields 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;

    for (x, y) in a.iter().zip(b) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0)
}

/// Flatten one pose into a numeric vector
pub fn flatten_pose(pose: &PoseFrame) -> Vec<f32> {
    let mut values = Vec::with_capacity(6);
    push_position(&mut values, pose.right_hand.as_ref());
    push_position(&mut values, pose.left_hand.as_ref());

    for hand in [&pose.right_hand, &pose.left_hand].into_iter().flatten() {
        if let Some(landmarks) = &hand.landmarks {
            values.extend(landmarks.iter().flat_map(|point| point.to_array()));
        }
    }

    values
}

/// Flatten two poses for comparison.
///
/// Landmarks are included only for hands where both sides carry the same
/// number of them.
pub fn flatten_pair(a: &PoseFrame, b: &PoseFrame) -> (Vec<f32>, Vec<f32>) {
    let mut left = Vec::with_capacity(6);
    let mut right = Vec::with_capacity(6);

    push_position(&mut left, a.right_hand.as_ref());
    push_position(&mut left, a.left_hand.as_ref());
    push_position(&mut right, b.right_hand.as_ref());
    push_position(&mut right, b.left_hand.as_ref());

    let pairs = [(&a.right_hand, &b.right_hand), (&a.left_hand, &b.left_hand)];
    for (hand_a, hand_b) in pairs {
        let landmarks = hand_a
            .as_ref()
            .and_then(|hand| hand.landmarks.as_ref())
            .zip(hand_b.as_ref().and_then(|hand| hand.landmarks.as_ref()));

        if let Some((points_a, points_b)) = landmarks {
            if points_a.len() == points_b.len() {
                left.extend(points_a.iter().flat_map(|point| point.to_array()));
                right.extend(points_b.iter().flat_map(|point| point.to_array()));
            }
        }
    }

    (left, right)
}

fn push_position(values: &mut Vec<f32>, hand: Option<&HandPose>) {
    let position = hand.map(|hand| hand.position).unwrap_or(Vec3::ZERO);
    values.extend(position.to_array());
}
