/*!
 * Sign resolution.
 *
 * - `descriptor`: the tagged result of resolving a gloss
 * - `cache`: bounded LRU cache keyed on (gloss, dialect, quality)
 * - `service`: `SignResolver`, the tiered fallback chain
 */

pub mod cache;
pub mod descriptor;
pub mod service;

pub use cache::ResolutionCache;
pub use descriptor::{
    FingerspellingSequence, LetterEntry, ProceduralAnimation, SignAnimation, SignDescriptor, SignSource,
    VideoClip,
};
pub use service::{Availability, SignResolver};
