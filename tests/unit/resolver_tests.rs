/*!
 * Tests for tiered sign resolution
 */

use std::sync::Arc;

use signweave::errors::SignError;
use signweave::resolver::{SignAnimation, SignSource};
use signweave::Dialect;

use crate::common;

#[test]
fn test_resolve_withVideoAvailable_shouldReturnVideo() {
    let resolver = common::repo_resolver();
    let descriptor = resolver.resolve("HELLO", &Dialect::Asl, "720p").unwrap();

    assert_eq!(descriptor.source, SignSource::Video);
    assert!(!descriptor.fallback);
    assert!(descriptor.is_video());
    match &descriptor.animation {
        SignAnimation::Video(clip) => {
            assert_eq!(clip.url, "/videos/asl/720p/hello.mp4");
            assert_eq!(clip.duration_ms, 1400);
        }
        other => panic!("expected a video, got {:?}", other),
    }
}

#[test]
fn test_resolve_withOtherQuality_shouldFallToVerifiedKeyframes() {
    let resolver = common::repo_resolver();
    let descriptor = resolver.resolve("hello", &Dialect::Asl, "480p").unwrap();

    assert_eq!(descriptor.gloss, "HELLO");
    assert_eq!(descriptor.source, SignSource::Verified);
    assert!(!descriptor.fallback);
    assert_eq!(descriptor.duration_ms(), 1400);
}

#[test]
fn test_resolve_withProceduralOnly_shouldFlagFallback() {
    let resolver = common::repo_resolver();
    let descriptor = resolver.resolve("GOODBYE", &Dialect::Asl, "720p").unwrap();

    assert_eq!(descriptor.source, SignSource::Procedural);
    assert!(descriptor.fallback);
    assert_eq!(descriptor.duration_ms(), 2000);
    match &descriptor.animation {
        SignAnimation::Procedural(animation) => {
            let last = animation.keyframes.last().unwrap();
            assert_eq!(last.time_ms, 2000.0);
        }
        other => panic!("expected procedural keyframes, got {:?}", other),
    }
}

#[test]
fn test_resolve_withUnknownGloss_shouldFingerspell() {
    let resolver = common::repo_resolver();
    let descriptor = resolver.resolve("XYZNOTASIGN", &Dialect::Asl, "720p").unwrap();

    assert_eq!(descriptor.source, SignSource::Fingerspelling);
    assert!(descriptor.fallback);
    match &descriptor.animation {
        SignAnimation::Fingerspelling(sequence) => {
            assert_eq!(sequence.letters.len(), 11);
            assert_eq!(sequence.letters[0].letter, 'X');
            assert_eq!(sequence.letters[10].start_time_ms, 8000);
        }
        other => panic!("expected fingerspelling, got {:?}", other),
    }
    assert_eq!(descriptor.duration_ms(), 8800);
}

#[test]
fn test_resolve_withEmptyGloss_shouldFail() {
    let resolver = common::repo_resolver();

    assert!(matches!(resolver.resolve("", &Dialect::Asl, "720p"), Err(SignError::InvalidGloss(_))));
    assert!(matches!(resolver.resolve("   ", &Dialect::Asl, "720p"), Err(SignError::InvalidGloss(_))));
}

#[test]
fn test_resolve_withOtherDialect_shouldUseThatDialectsVideo() {
    let resolver = common::repo_resolver();

    let bsl = resolver.resolve("HELLO", &Dialect::Bsl, "720p").unwrap();
    assert_eq!(bsl.source, SignSource::Video);
    assert_eq!(bsl.duration_ms(), 1300);

    // No ISL video, so the dialect-agnostic verified tier answers
    let isl = resolver.resolve("HELLO", &Dialect::Isl, "720p").unwrap();
    assert_eq!(isl.source, SignSource::Verified);
}

#[test]
fn test_resolve_twice_shouldHitCache() {
    let resolver = common::repo_resolver();

    let first = resolver.resolve("THANK-YOU", &Dialect::Asl, "720p").unwrap();
    let second = resolver.resolve("thank-you", &Dialect::Asl, "720p").unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    let (hits, misses, _) = resolver.cache().stats();
    assert_eq!((hits, misses), (1, 1));
}

#[test]
fn test_resolve_isDeterministic_withoutCache() {
    let resolver = common::repo_resolver().with_cache(signweave::resolver::ResolutionCache::new(false, 1));

    let first = resolver.resolve("LOVE", &Dialect::Asl, "720p").unwrap();
    let second = resolver.resolve("LOVE", &Dialect::Asl, "720p").unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first, second);
}

#[test]
fn test_checkAvailability_withEveryTier_shouldReportAll() {
    let resolver = common::repo_resolver();
    let availability = resolver.check_availability("hello", &Dialect::Asl).unwrap();

    assert!(availability.has_video);
    assert!(availability.has_verified);
    assert!(availability.has_procedural);
    assert!(availability.can_fingerspell);
}

#[test]
fn test_checkAvailability_withUnknownGloss_shouldOnlyFingerspell() {
    let resolver = common::repo_resolver();
    let availability = resolver.check_availability("QWERTY", &Dialect::Asl).unwrap();

    assert!(!availability.has_video);
    assert!(!availability.has_verified);
    assert!(!availability.has_procedural);
    assert!(availability.can_fingerspell);
}

#[test]
fn test_checkAvailability_withEmptyGloss_shouldFail() {
    let resolver = common::repo_resolver();
    assert!(resolver.check_availability(" ", &Dialect::Asl).is_err());
}

#[test]
fn test_reload_shouldClearCache() {
    let resolver = common::repo_resolver();
    resolver.resolve("HELLO", &Dialect::Asl, "720p").unwrap();
    assert_eq!(resolver.cache().len(), 1);

    let stats = resolver.reload().unwrap();

    assert!(resolver.cache().is_empty());
    assert_eq!(stats.videos, 4);
    assert_eq!(stats.verified, 2);
}

#[test]
fn test_resolve_withCorruptIndex_shouldStillFingerspell() {
    common::init_logging();
    let dir = common::create_temp_dir().unwrap();
    let source = common::write_index_files(dir.path()).unwrap();
    common::create_test_file(dir.path(), "video_index.json", "{").unwrap();

    let library = Arc::new(signweave::library::SignLibrary::new(source));
    let resolver = signweave::SignResolver::new(library);

    let descriptor = resolver.resolve("WAVE", &Dialect::Asl, "720p").unwrap();
    assert_eq!(descriptor.source, SignSource::Fingerspelling);
}
