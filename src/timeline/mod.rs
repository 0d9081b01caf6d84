/*!
 * Sequence timelines.
 *
 * - `track`: `AnimationTrack`, `Timeline` and scrubbing
 * - `assembler`: stitches resolved signs and transitions into a timeline
 */

pub mod assembler;
pub mod track;

pub use assembler::TimelineAssembler;
pub use track::{AnimationTrack, Timeline, TimelineSample, TrackKind, TRANSITION_GLOSS};
