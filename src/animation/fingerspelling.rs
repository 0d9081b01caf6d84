/*!
 * Fingerspelling expander.
 *
 * Spells a gloss letter by letter with a fixed per-letter duration.
 * Internal whitespace is removed; hyphens are kept and, like any other
 * character outside A-Z, spelled with a placeholder handshape.
 */

use crate::app_config::FingerspellingConfig;
use crate::errors::SignError;
use crate::gloss;
use crate::library::letter_shape;
use crate::pose::{HandPose, Keyframe, PoseFrame, Vec3};
use crate::resolver::descriptor::{FingerspellingSequence, LetterEntry};

/// Where the dominant hand holds letters
const SPELLING_POSITION: Vec3 = Vec3::new(0.25, 0.25, 0.3);

/// Fraction of a letter's slot spent holding the shape
const HOLD_FRACTION: f64 = 0.75;

/// Expands glosses into per-letter timelines
#[derive(Debug, Clone)]
pub struct FingerspellingExpander {
    letter_duration_ms: u64,
}

impl Default for FingerspellingExpander {
    fn default() -> Self {
        Self::from_config(&FingerspellingConfig::default())
    }
}

impl FingerspellingExpander {
    pub fn new(letter_duration_ms: u64) -> Self {
        Self {
            letter_duration_ms: letter_duration_ms.max(1),
        }
    }

    pub fn from_config(config: &FingerspellingConfig) -> Self {
        Self::new(config.letter_duration_ms)
    }

    pub fn letter_duration_ms(&self) -> u64 {
        self.letter_duration_ms
    }

    /// Spell a gloss. Only an empty gloss is rejected.
    pub fn expand(&self, gloss: &str) -> Result<FingerspellingSequence, SignError> {
        let canonical = gloss::canonicalize(gloss)?;
        let letters = gloss::strip_whitespace(&canonical)
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let shape = letter_shape(c);
                LetterEntry {
                    letter: shape.letter,
                    handshape: shape.handshape,
                    description: shape.description,
                    start_time_ms: i as u64 * self.letter_duration_ms,
                    duration_ms: self.letter_duration_ms,
                }
            })
            .collect();

        Ok(FingerspellingSequence { letters })
    }

    /// Keyframe track for a spelled sequence.
    ///
    /// Each letter is shown at its start and held for most of its slot;
    /// the last letter is held to the end of the sequence.
    pub fn keyframes(sequence: &FingerspellingSequence) -> Vec<Keyframe> {
        let mut keyframes = Vec::with_capacity(sequence.letters.len() * 2 + 1);

        for entry in &sequence.letters {
            let pose = letter_pose(entry);
            let start = entry.start_time_ms as f64;
            keyframes.push(Keyframe::new(start, pose.clone()));
            keyframes.push(Keyframe::new(start + entry.duration_ms as f64 * HOLD_FRACTION, pose));
        }

        if let Some(last) = sequence.letters.last() {
            keyframes.push(Keyframe::new(sequence.duration_ms() as f64, letter_pose(last)));
        }

        keyframes
    }
}

fn letter_pose(entry: &LetterEntry) -> PoseFrame {
    let mut hand = HandPose::new(SPELLING_POSITION, &entry.handshape);
    hand.palm_orientation = "forward".to_string();
    PoseFrame {
        right_hand: Some(hand),
        ..Default::default()
    }
}
