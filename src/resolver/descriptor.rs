/*!
 * Sign descriptors: the result of resolving one gloss.
 *
 * A descriptor is exactly one of three animation kinds. Consumers match
 * on `SignAnimation` instead of probing optional fields.
 */

use serde::{Deserialize, Serialize};

use crate::pose::Keyframe;

/// Where a descriptor's animation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignSource {
    /// Verified motion-capture keyframes
    Verified,
    /// Generated from the procedural fallback table
    Procedural,
    /// Spelled letter by letter
    Fingerspelling,
    /// Verified pre-recorded video
    Video,
}

impl SignSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Procedural => "procedural",
            Self::Fingerspelling => "fingerspelling",
            Self::Video => "video",
        }
    }
}

impl std::fmt::Display for SignSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reference to pre-recorded media; opaque beyond its duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoClip {
    pub url: String,
    pub duration_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// Fully expanded pose track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProceduralAnimation {
    pub duration_ms: u64,
    pub keyframes: Vec<Keyframe>,
}

/// One fingerspelled letter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterEntry {
    pub letter: char,
    pub handshape: String,
    pub description: String,
    pub start_time_ms: u64,
    pub duration_ms: u64,
}

/// Letter-by-letter spelling of a gloss
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FingerspellingSequence {
    pub letters: Vec<LetterEntry>,
}

impl FingerspellingSequence {
    pub fn duration_ms(&self) -> u64 {
        self.letters
            .last()
            .map(|entry| entry.start_time_ms + entry.duration_ms)
            .unwrap_or(0)
    }
}

/// The three animation kinds a gloss can resolve to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SignAnimation {
    Video(VideoClip),
    Procedural(ProceduralAnimation),
    Fingerspelling(FingerspellingSequence),
}

/// A resolved sign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignDescriptor {
    /// Canonical gloss
    pub gloss: String,
    pub source: SignSource,
    /// True unless the sign came from the verified tier
    pub fallback: bool,
    pub animation: SignAnimation,
}

impl SignDescriptor {
    pub fn new(gloss: &str, source: SignSource, animation: SignAnimation) -> Self {
        let fallback = !matches!(source, SignSource::Video | SignSource::Verified);
        Self {
            gloss: gloss.to_string(),
            source,
            fallback,
            animation,
        }
    }

    pub fn duration_ms(&self) -> u64 {
        match &self.animation {
            SignAnimation::Video(clip) => clip.duration_ms,
            SignAnimation::Procedural(animation) => animation.duration_ms,
            SignAnimation::Fingerspelling(sequence) => sequence.duration_ms(),
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self.animation, SignAnimation::Video(_))
    }
}
