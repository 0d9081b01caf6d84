/*!
 * Tests for accuracy validation
 */

use signweave::app_config::ValidationConfig;
use signweave::errors::SignError;
use signweave::validation::{cosine_similarity, AccuracyValidator, ValidationReason};

use crate::common;

fn validator() -> AccuracyValidator {
    AccuracyValidator::new(common::repo_library())
}

#[test]
fn test_validate_withReferenceKeyframes_shouldScorePerfect() {
    let validator = validator();
    let reference = validator_reference_keyframes();

    let result = validator.validate("HELLO", &reference).unwrap();

    assert!(result.valid);
    assert_eq!(result.reason, ValidationReason::Match);
    assert!((result.score - 100.0).abs() < 1e-6);
    assert!(result.handshape_match);
    assert!(result.suggestions.is_empty());
}

fn validator_reference_keyframes() -> Vec<signweave::Keyframe> {
    common::repo_library().index().verified("HELLO").unwrap().keyframes.clone()
}

#[test]
fn test_validate_withoutReference_shouldReportNoReference() {
    let attempt = vec![common::right_hand_keyframe(0.0, 0.1, 0.2, 0.3, "b-flat")];
    let result = validator().validate("GOODBYE", &attempt).unwrap();

    assert!(!result.valid);
    assert_eq!(result.reason, ValidationReason::NoReference);
    assert_eq!(result.score, 0.0);
    assert!(result.start_similarity.is_none());
}

#[test]
fn test_validate_withEmptyAttempt_shouldReportNoAttempt() {
    let result = validator().validate("HELLO", &[]).unwrap();

    assert!(!result.valid);
    assert_eq!(result.reason, ValidationReason::NoAttempt);
}

#[test]
fn test_validate_withZeroVector_shouldScoreZeroAndSuggest() {
    let attempt = vec![
        common::right_hand_keyframe(0.0, 0.0, 0.0, 0.0, "relaxed"),
        common::right_hand_keyframe(500.0, 0.0, 0.0, 0.0, "relaxed"),
    ];
    let result = validator().validate("HELLO", &attempt).unwrap();

    assert!(!result.valid);
    assert_eq!(result.reason, ValidationReason::BelowThreshold);
    assert_eq!(result.score, 0.0);
    assert_eq!(result.start_similarity, Some(0.0));
    assert!(!result.handshape_match);
    assert!(result.suggestions.iter().any(|s| s.contains("'b-flat'")));
    assert!(result.suggestions.iter().any(|s| s.contains("about 1.4 seconds")));
    assert!(result.suggestions.iter().any(|s| s.contains("temple")));
}

#[test]
fn test_validate_withMatchingHandshapeOnly_shouldAddBonusWeight() {
    let attempt = vec![common::right_hand_keyframe(0.0, 0.0, 0.0, 0.0, "b-flat")];
    let result = validator().validate("HELLO", &attempt).unwrap();

    // (0 + 0 + 0.3) / (2 + 0.3) * 100
    assert!(result.handshape_match);
    assert!((result.score - 0.3 / 2.3 * 100.0).abs() < 1e-6);
    assert!(!result.valid);
}

#[test]
fn test_validate_withOppositeDirection_shouldClampToZero() {
    let attempt = vec![common::right_hand_keyframe(0.0, -0.25, -0.55, -0.1, "relaxed")];
    let result = validator().validate("HELLO", &attempt).unwrap();

    assert_eq!(result.start_similarity, Some(0.0));
    assert_eq!(result.score, 0.0);
}

#[test]
fn test_validate_withLowerThreshold_shouldAcceptPartialMatch() {
    let config = ValidationConfig {
        pass_threshold: 10.0,
        handshape_bonus: 0.3,
    };
    let validator = AccuracyValidator::with_config(common::repo_library(), config);
    let attempt = vec![common::right_hand_keyframe(0.0, 0.0, 0.0, 0.0, "b-flat")];

    let result = validator.validate("hello", &attempt).unwrap();
    assert!(result.valid);
    assert_eq!(result.gloss, "HELLO");
}

#[test]
fn test_validate_withEmptyGloss_shouldFail() {
    assert!(matches!(validator().validate(" ", &[]), Err(SignError::InvalidGloss(_))));
}

#[test]
fn test_cosineSimilarity_shouldStayBounded() {
    assert!((cosine_similarity(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]) - 1.0).abs() < 1e-9);
    assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < 1e-9);
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    assert_eq!(cosine_similarity(&[], &[]), 0.0);
}
