/*!
 * End-to-end tests of the sign engine over the bundled data
 */

use signweave::library::StaticSource;
use signweave::resolver::SignSource;
use signweave::timeline::TRANSITION_GLOSS;
use signweave::validation::ValidationReason;
use signweave::{Config, Dialect, SignEngine, SignError};

use crate::common;

fn engine() -> SignEngine {
    common::init_logging();
    SignEngine::from_config(common::test_config()).unwrap()
}

#[test]
fn test_engine_new_withInvalidConfig_shouldFail() {
    let mut config = Config::default();
    config.timeline.transition_steps = 1;

    let result = SignEngine::new(config, StaticSource::builtin().unwrap());
    assert!(result.is_err());
}

#[test]
fn test_engine_resolve_shouldUseConfiguredDialectAndQuality() {
    let mut config = common::test_config();
    config.dialect = "bsl".to_string();
    let engine = SignEngine::from_config(config).unwrap();

    assert_eq!(engine.dialect(), &Dialect::Bsl);
    let descriptor = engine.resolve("HELLO").unwrap();
    assert_eq!(descriptor.source, SignSource::Video);
    assert_eq!(descriptor.duration_ms(), 1300);

    let asl = engine.resolve_with("HELLO", &Dialect::Asl, "1080p").unwrap();
    assert_eq!(asl.source, SignSource::Video);
    assert_eq!(asl.duration_ms(), 1400);
}

#[test]
fn test_engine_assembleText_shouldTokenizeAndMixTiers() {
    let engine = engine();
    let timeline = engine.assemble_text("Thank-you, water please!").unwrap();

    assert_eq!(timeline.glosses(), vec!["THANK-YOU", "WATER", "PLEASE"]);
    // Video first, then two procedural signs joined by one transition
    assert!(timeline.tracks[0].is_video());
    assert_eq!(timeline.tracks[1].gloss, "WATER");
    assert_eq!(timeline.tracks[2].gloss, TRANSITION_GLOSS);
    assert_eq!(timeline.total_duration_ms, 1100 + 1000 + 150 + 1500);
    assert!(timeline.is_contiguous());
}

#[test]
fn test_engine_assembleText_withoutWords_shouldFail() {
    let engine = engine();
    assert!(matches!(engine.assemble_text(" ... "), Err(SignError::InvalidGloss(_))));
}

#[test]
fn test_engine_assemble_withEmptyGloss_shouldFailWhole() {
    let engine = engine();
    assert!(engine.assemble(&["HELLO", ""]).is_err());
}

#[test]
fn test_engine_validate_shouldScoreAgainstVerifiedData() {
    let engine = engine();
    let attempt = vec![
        common::right_hand_keyframe(0.0, 0.2, 0.2, 0.3, "s-fist"),
        common::right_hand_keyframe(1000.0, 0.2, 0.2, 0.3, "s-fist"),
    ];

    let result = engine.validate("yes", &attempt).unwrap();
    assert_eq!(result.reason, ValidationReason::Match);
    assert!(result.valid);

    let missing = engine.validate("WATER", &attempt).unwrap();
    assert_eq!(missing.reason, ValidationReason::NoReference);
}

#[test]
fn test_engine_reload_shouldReportTableSizes() {
    let engine = engine();
    engine.resolve("HELLO").unwrap();

    let stats = engine.reload().unwrap();

    assert_eq!(stats.videos, 4);
    assert_eq!(stats.verified, 2);
    assert_eq!(stats.fallbacks, 16);
    assert!(engine.resolver().cache().is_empty());
}

#[test]
fn test_engine_checkAvailability_shouldUseConfiguredDialect() {
    let engine = engine();

    let thank_you = engine.check_availability("thank-you").unwrap();
    assert!(thank_you.has_video);
    assert!(!thank_you.has_verified);
    assert!(thank_you.has_procedural);
}
