/*!
 * Sign index: the reference tables consulted during resolution.
 *
 * Keys are canonical (upper case) glosses. The whole index is validated
 * when it is built; one malformed entry marks the source as corrupt.
 */

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::animation::MotionModifier;
use crate::errors::SignError;
use crate::gloss::{self, Dialect};
use crate::pose::{Keyframe, Vec3};

/// Longest duration accepted for any single sign
pub const MAX_SIGN_DURATION_MS: u64 = 60_000;

/// Verified motion-capture reference for one gloss
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedSign {
    pub duration_ms: u64,
    pub keyframes: Vec<Keyframe>,
    /// Expected handshape of the opening keyframe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handshape: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Pre-recorded video for a (gloss, dialect, quality) triple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoEntry {
    pub gloss: String,
    #[serde(default)]
    pub dialect: Dialect,
    pub quality: String,
    pub url: String,
    pub duration_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// Compact motion description of one hand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandMotion {
    pub start: Vec3,
    pub end: Vec3,
    #[serde(default)]
    pub start_rotation: Vec3,
    #[serde(default)]
    pub end_rotation: Vec3,
    /// Additive path perturbations, applied in declaration order of `MotionModifier`
    #[serde(default)]
    pub modifiers: BTreeSet<MotionModifier>,
    #[serde(default)]
    pub fist: bool,
    #[serde(default)]
    pub pointing: bool,
    #[serde(default)]
    pub palm_up: bool,
}

impl HandMotion {
    /// Straight movement with no flags
    pub fn linear(start: Vec3, end: Vec3) -> Self {
        Self {
            start,
            end,
            start_rotation: Vec3::ZERO,
            end_rotation: Vec3::ZERO,
            modifiers: BTreeSet::new(),
            fist: false,
            pointing: false,
            palm_up: false,
        }
    }

    pub fn with_modifier(mut self, modifier: MotionModifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }
}

/// Compact per-sign motion description expanded by the procedural generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_hand: Option<HandMotion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_hand: Option<HandMotion>,
    #[serde(default = "default_expression")]
    pub expression: String,
    /// Duration in seconds
    pub duration: f64,
}

fn default_expression() -> String {
    "neutral".to_string()
}

impl MotionSpec {
    pub fn duration_ms(&self) -> u64 {
        (self.duration * 1000.0).round() as u64
    }
}

/// Procedural fallback entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackSign {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub animation: MotionSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct VideoKey {
    gloss: String,
    dialect: Dialect,
    quality: String,
}

impl VideoKey {
    fn new(gloss: &str, dialect: &Dialect, quality: &str) -> Self {
        Self {
            gloss: gloss.to_string(),
            dialect: dialect.clone(),
            quality: quality.trim().to_string(),
        }
    }
}

/// Number of entries per table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct IndexStats {
    pub videos: usize,
    pub verified: usize,
    pub fallbacks: usize,
}

/// All reference tables, immutable once built
#[derive(Debug, Clone, Default)]
pub struct SignIndex {
    videos: HashMap<VideoKey, VideoEntry>,
    verified: HashMap<String, VerifiedSign>,
    fallbacks: HashMap<String, FallbackSign>,
}

impl SignIndex {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build and validate an index. Keys are canonicalized; two raw keys that
    /// canonicalize to the same gloss are rejected.
    pub fn from_parts(
        source_name: &str,
        videos: Vec<VideoEntry>,
        verified: HashMap<String, VerifiedSign>,
        fallbacks: HashMap<String, FallbackSign>,
    ) -> Result<Self, SignError> {
        let mut index = SignIndex::default();

        for mut entry in videos {
            let gloss = canonical_key(source_name, &entry.gloss)?;
            if entry.url.trim().is_empty() {
                return Err(SignError::corrupt(source_name, format!("video for {} has no url", gloss)));
            }
            check_duration(source_name, "video", &gloss, entry.duration_ms)?;
            entry.gloss = gloss.clone();
            let key = VideoKey::new(&gloss, &entry.dialect, &entry.quality);
            if index.videos.contains_key(&key) {
                return Err(SignError::corrupt(
                    source_name,
                    format!("duplicate video for {} ({}, {})", gloss, key.dialect, key.quality),
                ));
            }
            index.videos.insert(key, entry);
        }

        for (raw, sign) in verified {
            let gloss = canonical_key(source_name, &raw)?;
            validate_verified(source_name, &gloss, &sign)?;
            if index.verified.insert(gloss.clone(), sign).is_some() {
                return Err(SignError::corrupt(source_name, format!("duplicate verified sign {}", gloss)));
            }
        }

        for (raw, sign) in fallbacks {
            let gloss = canonical_key(source_name, &raw)?;
            let duration = sign.animation.duration;
            if !duration.is_finite() || duration <= 0.0 {
                return Err(SignError::corrupt(
                    source_name,
                    format!("fallback {} has invalid duration {}", gloss, duration),
                ));
            }
            check_duration(source_name, "fallback", &gloss, sign.animation.duration_ms())?;
            if index.fallbacks.insert(gloss.clone(), sign).is_some() {
                return Err(SignError::corrupt(source_name, format!("duplicate fallback {}", gloss)));
            }
        }

        Ok(index)
    }

    /// Video for the exact (gloss, dialect, quality) triple
    pub fn video(&self, gloss: &str, dialect: &Dialect, quality: &str) -> Option<&VideoEntry> {
        self.videos.get(&VideoKey::new(gloss, dialect, quality))
    }

    /// Whether any quality of video exists for the gloss in this dialect
    pub fn has_video(&self, gloss: &str, dialect: &Dialect) -> bool {
        self.videos.keys().any(|key| key.gloss == gloss && &key.dialect == dialect)
    }

    pub fn verified(&self, gloss: &str) -> Option<&VerifiedSign> {
        self.verified.get(gloss)
    }

    pub fn fallback(&self, gloss: &str) -> Option<&FallbackSign> {
        self.fallbacks.get(gloss)
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            videos: self.videos.len(),
            verified: self.verified.len(),
            fallbacks: self.fallbacks.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty() && self.verified.is_empty() && self.fallbacks.is_empty()
    }
}

fn canonical_key(source_name: &str, raw: &str) -> Result<String, SignError> {
    gloss::canonicalize(raw).map_err(|_| SignError::corrupt(source_name, "entry with an empty gloss"))
}

fn check_duration(source_name: &str, table: &str, gloss: &str, duration_ms: u64) -> Result<(), SignError> {
    if duration_ms == 0 {
        return Err(SignError::corrupt(source_name, format!("{} {} has zero duration", table, gloss)));
    }
    if duration_ms > MAX_SIGN_DURATION_MS {
        return Err(SignError::corrupt(
            source_name,
            format!("{} {} lasts {}ms, over the {}ms limit", table, gloss, duration_ms, MAX_SIGN_DURATION_MS),
        ));
    }
    Ok(())
}

fn validate_verified(source_name: &str, gloss: &str, sign: &VerifiedSign) -> Result<(), SignError> {
    if sign.keyframes.is_empty() {
        return Err(SignError::corrupt(source_name, format!("verified sign {} has no keyframes", gloss)));
    }
    check_duration(source_name, "verified sign", gloss, sign.duration_ms)?;

    let mut previous = f64::NEG_INFINITY;
    for keyframe in &sign.keyframes {
        if !keyframe.time_ms.is_finite() || keyframe.time_ms < previous {
            return Err(SignError::corrupt(
                source_name,
                format!("verified sign {} has out-of-order keyframe at {}ms", gloss, keyframe.time_ms),
            ));
        }
        if keyframe.time_ms > sign.duration_ms as f64 {
            return Err(SignError::corrupt(
                source_name,
                format!(
                    "verified sign {} has a keyframe at {}ms past its {}ms duration",
                    gloss, keyframe.time_ms, sign.duration_ms
                ),
            ));
        }
        previous = keyframe.time_ms;
    }

    Ok(())
}
