/*!
 * Accuracy validation for performed or generated signs.
 *
 * Compares an attempt against the verified reference for a gloss:
 *
 * - `similarity`: keyframe flattening and cosine similarity
 * - `accuracy`: scoring, pass/fail and practice suggestions
 */

pub mod accuracy;
pub mod similarity;

// Re-export main types
pub use accuracy::{AccuracyValidator, ValidationReason, ValidationResult};
pub use similarity::{cosine_similarity, flatten_pose};
