/*!
 * Keyframe track generation.
 *
 * - `modifiers`: the closed set of additive motion perturbations
 * - `procedural`: expands a compact `MotionSpec` into a dense track
 * - `fingerspelling`: per-letter timelines for unknown glosses
 */

pub mod fingerspelling;
pub mod modifiers;
pub mod procedural;

pub use fingerspelling::FingerspellingExpander;
pub use modifiers::MotionModifier;
pub use procedural::ProceduralGenerator;
