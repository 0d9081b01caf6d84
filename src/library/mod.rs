/*!
 * Read-only reference data for sign resolution.
 *
 * - `index`: verified signs, video entries and the procedural fallback table
 * - `alphabet`: the fixed 26-letter fingerspelling handshape table
 * - `source`: where index data comes from (JSON files, in-memory, built-in)
 * - `store`: `SignLibrary`, the lazily loaded and reloadable index handle
 */

pub mod alphabet;
pub mod index;
pub mod source;
pub mod store;

pub use alphabet::{letter_shape, LetterShape, UNKNOWN_HANDSHAPE};
pub use index::{
    FallbackSign, HandMotion, IndexStats, MotionSpec, SignIndex, VerifiedSign, VideoEntry, MAX_SIGN_DURATION_MS,
};
pub use source::{builtin_fallbacks, JsonFileSource, SignDataSource, StaticSource};
pub use store::SignLibrary;
