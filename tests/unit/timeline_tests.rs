/*!
 * Tests for timeline assembly and scrubbing
 */

use signweave::resolver::SignSource;
use signweave::timeline::{TimelineAssembler, TrackKind, TRANSITION_GLOSS};
use signweave::Dialect;

use crate::common;

#[test]
fn test_assemble_withHelloGoodbyeFallbacks_shouldLastThreeSixFifty() {
    let resolver = common::fallback_only_resolver();
    let timeline = TimelineAssembler::default()
        .assemble(&resolver, &["HELLO", "GOODBYE"], &Dialect::Asl, "720p")
        .unwrap();

    assert_eq!(timeline.tracks.len(), 3);
    assert_eq!(timeline.total_duration_ms, 3650);
    assert_eq!(timeline.tracks[1].gloss, TRANSITION_GLOSS);
    assert_eq!((timeline.tracks[1].start_ms, timeline.tracks[1].end_ms), (1500, 1650));
    assert!(timeline.is_contiguous());
    assert_eq!(
        timeline.tracks[0].kind,
        TrackKind::Sign { source: SignSource::Procedural, fallback: true }
    );
}

#[test]
fn test_assemble_nextToVideo_shouldNotInsertTransition() {
    let resolver = common::repo_resolver();
    let timeline = TimelineAssembler::default()
        .assemble(&resolver, &["HELLO", "GOODBYE"], &Dialect::Asl, "720p")
        .unwrap();

    assert_eq!(timeline.tracks.len(), 2);
    assert!(timeline.tracks[0].is_video());
    assert_eq!(timeline.total_duration_ms, 1400 + 2000);
    assert!(timeline.is_contiguous());
}

#[test]
fn test_assemble_withFingerspelledGloss_shouldBridgeIntoFirstLetter() {
    let resolver = common::fallback_only_resolver();
    let timeline = TimelineAssembler::default()
        .assemble(&resolver, &["YES", "ZQX"], &Dialect::Asl, "720p")
        .unwrap();

    assert_eq!(timeline.glosses(), vec!["YES", "ZQX"]);
    let transition = &timeline.tracks[1];
    let spelled = &timeline.tracks[2];
    assert!(transition.is_transition());
    let bridged = transition.last_pose().unwrap().right_hand.as_ref().unwrap();
    let first_letter = spelled.first_pose().unwrap().right_hand.as_ref().unwrap();
    assert!(bridged.position.distance(first_letter.position) < 1e-5);
    assert_eq!(bridged.handshape, "z-trace");
    assert_eq!(spelled.duration_ms(), 3 * 800);
}

#[test]
fn test_scrub_outsideTimeline_shouldHoldEnds() {
    let resolver = common::fallback_only_resolver();
    let timeline = TimelineAssembler::default()
        .assemble(&resolver, &["HELLO", "GOODBYE"], &Dialect::Asl, "720p")
        .unwrap();

    assert_eq!(timeline.scrub(-250.0), timeline.scrub(0.0));
    assert_eq!(timeline.scrub(99_999.0), timeline.scrub(3650.0));
    assert!(!timeline.scrub(3650.0).is_empty());
}

#[test]
fn test_scrub_acrossTransition_shouldBeContinuous() {
    let resolver = common::fallback_only_resolver();
    let timeline = TimelineAssembler::default()
        .assemble(&resolver, &["HELLO", "GOODBYE"], &Dialect::Asl, "720p")
        .unwrap();

    let before = timeline.scrub(1499.999).right_hand.unwrap().position;
    let at_start = timeline.scrub(1500.0).right_hand.unwrap().position;
    assert!(before.distance(at_start) < 1e-3);

    let at_end = timeline.scrub(1650.0).right_hand.unwrap().position;
    let goodbye_start = timeline.tracks[2].first_pose().unwrap().right_hand.as_ref().unwrap().position;
    assert!(at_end.distance(goodbye_start) < 1e-5);
}

#[test]
fn test_sample_onBoundary_shouldReportLaterTrack() {
    let resolver = common::fallback_only_resolver();
    let timeline = TimelineAssembler::default()
        .assemble(&resolver, &["HELLO", "GOODBYE"], &Dialect::Asl, "720p")
        .unwrap();

    let sample = timeline.sample(1500.0).unwrap();
    assert_eq!(sample.track_index, 1);
    assert_eq!(sample.gloss, TRANSITION_GLOSS);
    assert_eq!(sample.local_ms, 0.0);

    let sample = timeline.sample(2000.0).unwrap();
    assert_eq!(sample.gloss, "GOODBYE");
    assert!((sample.local_ms - 350.0).abs() < 1e-9);
}

#[test]
fn test_sample_onVideoTrack_shouldReturnMediaAndEmptyPose() {
    let resolver = common::repo_resolver();
    let timeline = TimelineAssembler::default()
        .assemble(&resolver, &["HELLO"], &Dialect::Asl, "720p")
        .unwrap();

    let sample = timeline.sample(700.0).unwrap();
    assert_eq!(sample.media.unwrap().url, "/videos/asl/720p/hello.mp4");
    assert!(sample.pose.is_empty());
}

#[test]
fn test_timeline_serialization_shouldTagTrackKinds() {
    let resolver = common::fallback_only_resolver();
    let timeline = TimelineAssembler::default()
        .assemble(&resolver, &["YES", "NO"], &Dialect::Asl, "720p")
        .unwrap();

    let json = serde_json::to_value(&timeline).unwrap();
    assert_eq!(json["total_duration_ms"], timeline.total_duration_ms);
    assert_eq!(json["tracks"][0]["kind"], "sign");
    assert_eq!(json["tracks"][0]["source"], "procedural");
    assert_eq!(json["tracks"][1]["kind"], "transition");
}
