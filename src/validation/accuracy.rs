/*!
 * Accuracy validator.
 *
 * Scores an attempt against the verified reference of a gloss. The score
 * averages the cosine similarity of the opening keyframes and of the
 * closing keyframes (each clamped to [0, 1]). A matching opening
 * handshape adds a fixed bonus weight to both the sum and the count
 * before the average is scaled to 0-100.
 *
 * A gloss without a verified reference is an expected outcome and is
 * reported as `ValidationReason::NoReference`, never as an error.
 */

use log::debug;
use serde::Serialize;
use std::sync::Arc;

use crate::app_config::ValidationConfig;
use crate::errors::SignError;
use crate::gloss;
use crate::library::{SignLibrary, VerifiedSign};
use crate::pose::{Keyframe, PoseFrame};

use super::similarity::{cosine_similarity, flatten_pair};

/// Why a validation ended the way it did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationReason {
    /// No verified reference exists for the gloss
    NoReference,
    /// The attempt contained no keyframes
    NoAttempt,
    /// Score reached the pass threshold
    Match,
    /// Score fell below the pass threshold
    BelowThreshold,
}

/// Outcome of validating one attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub gloss: String,
    pub valid: bool,
    /// 0-100
    pub score: f64,
    pub reason: ValidationReason,
    pub message: String,
    /// Practice hints, only filled below the threshold
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_similarity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_similarity: Option<f64>,
    pub handshape_match: bool,
}

impl ValidationResult {
    fn unscored(gloss: &str, reason: ValidationReason, message: String) -> Self {
        Self {
            gloss: gloss.to_string(),
            valid: false,
            score: 0.0,
            reason,
            message,
            suggestions: Vec::new(),
            start_similarity: None,
            end_similarity: None,
            handshape_match: false,
        }
    }
}

/// Compares attempts with verified references
pub struct AccuracyValidator {
    library: Arc<SignLibrary>,
    config: ValidationConfig,
}

impl AccuracyValidator {
    pub fn new(library: Arc<SignLibrary>) -> Self {
        Self::with_config(library, ValidationConfig::default())
    }

    pub fn with_config(library: Arc<SignLibrary>, config: ValidationConfig) -> Self {
        Self { library, config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Score a captured attempt. Fails only for an empty gloss.
    pub fn validate(&self, gloss: &str, captured: &[Keyframe]) -> Result<ValidationResult, SignError> {
        let gloss = gloss::canonicalize(gloss)?;
        let index = self.library.index();

        let Some(reference) = index.verified(&gloss) else {
            debug!("No verified reference for {}", gloss);
            return Ok(ValidationResult::unscored(
                &gloss,
                ValidationReason::NoReference,
                format!("{} has no verified reference yet, so it cannot be scored.", gloss),
            ));
        };

        let (Some(first), Some(last)) = (captured.first(), captured.last()) else {
            return Ok(ValidationResult::unscored(
                &gloss,
                ValidationReason::NoAttempt,
                "No movement was captured. Try signing again.".to_string(),
            ));
        };

        Ok(self.score(&gloss, reference, &first.pose, &last.pose))
    }

    fn score(&self, gloss: &str, reference: &VerifiedSign, first: &PoseFrame, last: &PoseFrame) -> ValidationResult {
        let start_similarity = compare(first, reference.keyframes.first().map(|k| &k.pose));
        let end_similarity = compare(last, reference.keyframes.last().map(|k| &k.pose));

        let mut total = start_similarity + end_similarity;
        let mut weight = 2.0;

        let handshape_match = match (&reference.handshape, opening_handshape(first)) {
            (Some(expected), Some(performed)) => expected == performed,
            _ => false,
        };
        if handshape_match {
            total += self.config.handshape_bonus;
            weight += self.config.handshape_bonus;
        }

        let score = (total / weight * 100.0).clamp(0.0, 100.0);
        let valid = score >= self.config.pass_threshold;

        debug!(
            "Validated {}: start {:.3}, end {:.3}, handshape {}, score {:.1}",
            gloss, start_similarity, end_similarity, handshape_match, score
        );

        let (reason, message, suggestions) = if valid {
            (
                ValidationReason::Match,
                format!("Well done! Your {} matches the reference ({:.0}/100).", gloss, score),
                Vec::new(),
            )
        } else {
            (
                ValidationReason::BelowThreshold,
                format!(
                    "Your {} scored {:.0}/100; {:.0} is needed. Keep practicing!",
                    gloss, score, self.config.pass_threshold
                ),
                suggestions_for(reference, handshape_match),
            )
        };

        ValidationResult {
            gloss: gloss.to_string(),
            valid,
            score,
            reason,
            message,
            suggestions,
            start_similarity: Some(start_similarity),
            end_similarity: Some(end_similarity),
            handshape_match,
        }
    }
}

fn compare(captured: &PoseFrame, reference: Option<&PoseFrame>) -> f64 {
    let Some(reference) = reference else {
        return 0.0;
    };
    let (a, b) = flatten_pair(captured, reference);
    cosine_similarity(&a, &b).clamp(0.0, 1.0)
}

/// Handshape of the dominant hand, or the other hand if only that one is tracked
fn opening_handshape(pose: &PoseFrame) -> Option<&str> {
    pose.right_hand
        .as_ref()
        .or(pose.left_hand.as_ref())
        .map(|hand| hand.handshape.as_str())
}

fn suggestions_for(reference: &VerifiedSign, handshape_match: bool) -> Vec<String> {
    let mut suggestions = Vec::new();

    if let Some(handshape) = &reference.handshape {
        if handshape_match {
            suggestions.push(format!("Your '{}' handshape is right; focus on the movement.", handshape));
        } else {
            suggestions.push(format!("Start with the '{}' handshape.", handshape));
        }
    }

    suggestions.push(format!(
        "The reference sign takes about {:.1} seconds.",
        reference.duration_ms as f64 / 1000.0
    ));

    if let Some(notes) = reference.notes.as_ref().filter(|notes| !notes.trim().is_empty()) {
        suggestions.push(notes.trim().to_string());
    }

    suggestions
}
