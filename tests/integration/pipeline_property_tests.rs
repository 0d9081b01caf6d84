/*!
 * Randomized properties of resolution and assembly
 */

use rand::Rng;

use signweave::resolver::SignSource;
use signweave::timeline::TimelineAssembler;
use signweave::Dialect;

use crate::common;

const VOCABULARY: [&str; 10] = [
    "HELLO", "GOODBYE", "YES", "NO", "THANK-YOU", "WATER", "XYZ", "ANNA", "NEW YORK", "LOVE",
];

fn random_glosses(rng: &mut impl Rng) -> Vec<String> {
    let len = rng.random_range(1..6);
    (0..len)
        .map(|_| VOCABULARY[rng.random_range(0..VOCABULARY.len())].to_string())
        .collect()
}

#[test]
fn test_resolve_withAnyNonEmptyGloss_shouldAlwaysSucceed() {
    let mut rng = rand::rng();
    let resolver = common::repo_resolver();

    for _ in 0..300 {
        let len = rng.random_range(1..12);
        let gloss: String = (0..len)
            .map(|_| char::from(rng.random_range(b'!'..=b'~')))
            .collect();

        let descriptor = resolver.resolve(&gloss, &Dialect::Asl, "720p").unwrap();
        assert!(descriptor.duration_ms() > 0, "{}", gloss);
        assert_eq!(descriptor.fallback, !matches!(descriptor.source, SignSource::Video | SignSource::Verified));
    }
}

#[test]
fn test_assemble_withRandomSequences_shouldStayContiguous() {
    let mut rng = rand::rng();
    let resolver = common::repo_resolver();
    let assembler = TimelineAssembler::default();

    for _ in 0..100 {
        let glosses = random_glosses(&mut rng);
        let timeline = assembler.assemble(&resolver, &glosses, &Dialect::Asl, "720p").unwrap();

        assert!(timeline.is_contiguous(), "{:?}", glosses);
        assert_eq!(timeline.glosses().len(), glosses.len());

        for pair in timeline.tracks.windows(2) {
            // Never two transitions in a row, never a transition next to a video
            if pair[0].is_transition() || pair[1].is_transition() {
                assert!(!(pair[0].is_transition() && pair[1].is_transition()));
                assert!(!pair[0].is_video() && !pair[1].is_video());
            }
        }
    }
}

#[test]
fn test_scrub_withRandomTimes_shouldNeverPanicAndHoldEnds() {
    let mut rng = rand::rng();
    let resolver = common::fallback_only_resolver();
    let assembler = TimelineAssembler::default();

    for _ in 0..50 {
        let glosses = random_glosses(&mut rng);
        let timeline = assembler.assemble(&resolver, &glosses, &Dialect::Asl, "720p").unwrap();
        let total = timeline.total_duration_ms as f64;

        for _ in 0..50 {
            let time = rng.random_range(-1000.0..total + 1000.0);
            let sample = timeline.sample(time).unwrap();
            assert!(sample.local_ms >= 0.0);
            assert!(sample.local_ms <= timeline.tracks[sample.track_index].duration_ms() as f64);
        }

        assert_eq!(timeline.scrub(-1.0), timeline.scrub(0.0));
        assert_eq!(timeline.scrub(total + 1.0), timeline.scrub(total));
    }
}
