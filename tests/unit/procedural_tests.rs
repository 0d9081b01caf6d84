/*!
 * Tests for procedural animation generation
 */

use signweave::animation::{MotionModifier, ProceduralGenerator};
use signweave::library::{builtin_fallbacks, HandMotion, MotionSpec};
use signweave::pose::Vec3;

fn spec(hand: HandMotion, expression: &str, duration: f64) -> MotionSpec {
    MotionSpec {
        right_hand: Some(hand),
        left_hand: None,
        expression: expression.to_string(),
        duration,
    }
}

#[test]
fn test_generate_withEveryBuiltinSign_shouldMatchDurationAndEndNeutral() {
    let generator = ProceduralGenerator::default();

    for (gloss, sign) in builtin_fallbacks().unwrap() {
        let animation = generator.generate(&sign.animation);

        assert_eq!(animation.duration_ms, sign.animation.duration_ms(), "{}", gloss);
        assert!(animation.keyframes.windows(2).all(|pair| pair[0].time_ms <= pair[1].time_ms), "{}", gloss);

        let last = animation.keyframes.last().unwrap();
        assert_eq!(last.time_ms, animation.duration_ms as f64, "{}", gloss);
        if let Some(face) = &last.pose.face {
            assert!(face.is_neutral(), "{}", gloss);
        }
    }
}

#[test]
fn test_generate_withExpression_shouldSetFaceAtFourPoints() {
    let hand = HandMotion::linear(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.2, 0.0, 0.0));
    let animation = ProceduralGenerator::new(60, 100).generate(&spec(hand, "questioning", 1.0));

    let faces: Vec<_> = animation
        .keyframes
        .iter()
        .filter_map(|keyframe| keyframe.pose.face.as_ref())
        .collect();

    // neutral, target, target, neutral (motion end), neutral (settled)
    assert_eq!(faces.len(), 5);
    assert!(faces[0].is_neutral());
    assert_eq!(faces[1].expression, "questioning");
    assert_eq!(faces[2].expression, "questioning");
    assert!(faces[3].is_neutral());
    assert!(faces[4].is_neutral());
}

#[test]
fn test_generate_withFlags_shouldFollowHandshapePrecedence() {
    let mut hand = HandMotion::linear(Vec3::ZERO, Vec3::new(0.1, 0.1, 0.1));
    hand.pointing = true;
    hand.palm_up = true;
    let pointing = ProceduralGenerator::default().generate(&spec(hand.clone(), "neutral", 0.5));
    assert_eq!(pointing.keyframes[0].pose.right_hand.as_ref().unwrap().handshape, "pointing");

    hand.fist = true;
    let fist = ProceduralGenerator::default().generate(&spec(hand, "neutral", 0.5));
    assert_eq!(fist.keyframes[0].pose.right_hand.as_ref().unwrap().handshape, "fist");
}

#[test]
fn test_generate_withModifiers_shouldAddOffsetsToPath() {
    let hand = HandMotion::linear(Vec3::new(0.1, 0.2, 0.3), Vec3::new(0.3, 0.2, 0.3))
        .with_modifier(MotionModifier::Circular)
        .with_modifier(MotionModifier::Wave);
    let animation = ProceduralGenerator::new(60, 100).generate(&spec(hand, "neutral", 1.0));

    // Wave is zero at t = 0; circular starts at its rightmost point
    let first = animation.keyframes.first().unwrap().pose.right_hand.as_ref().unwrap().position;
    assert!(first.distance(Vec3::new(0.13, 0.2, 0.3)) < 1e-4);
}

#[test]
fn test_generate_withHigherRate_shouldProduceMoreKeyframes() {
    let hand = HandMotion::linear(Vec3::ZERO, Vec3::new(0.1, 0.0, 0.0));
    let slow = ProceduralGenerator::new(30, 100).generate(&spec(hand.clone(), "neutral", 1.0));
    let fast = ProceduralGenerator::new(60, 100).generate(&spec(hand, "neutral", 1.0));

    assert!(fast.keyframes.len() > slow.keyframes.len());
    assert_eq!(fast.duration_ms, slow.duration_ms);
}
