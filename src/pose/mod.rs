/*!
 * Pose and keyframe primitives.
 *
 * - `vector`: `Vec2`/`Vec3` with linear interpolation
 * - `easing`: easing curves for synthetic transitions
 * - `frame`: `PoseFrame`, `Keyframe` and pose interpolation
 */

pub mod easing;
pub mod frame;
pub mod vector;

pub use easing::Easing;
pub use frame::{FacePose, HandPose, HeadPose, Keyframe, PoseFrame, TorsoPose};
pub use vector::{Vec2, Vec3};
