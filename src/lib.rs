/*!
 * # signweave - sign resolution and animation timelines
 *
 * A Rust library that turns gloss sequences into playable sign-language
 * animation timelines for an avatar renderer.
 *
 * ## Features
 *
 * - Resolve a gloss through a fixed fallback chain:
 *   - verified video for the dialect and quality tier
 *   - verified motion-capture keyframes
 *   - procedural animation from a compact motion description
 *   - fingerspelling, which always succeeds
 * - Stitch signs into one contiguous timeline with eased transitions
 * - Scrub the timeline once per render tick
 * - Score a performed attempt against the verified reference
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `gloss`: Gloss canonicalization and dialect labels
 * - `pose`: Vectors, easing and pose interpolation
 * - `library`: Reference tables and their data sources
 * - `animation`: Procedural and fingerspelling track generation
 * - `resolver`: Descriptor types, caching and tiered resolution
 * - `timeline`: Tracks, assembly and scrubbing
 * - `validation`: Cosine-similarity accuracy scoring
 * - `engine`: Facade wiring everything from a `Config`
 * - `errors`: Custom error types
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod animation;
pub mod app_config;
pub mod engine;
pub mod errors;
pub mod gloss;
pub mod library;
pub mod pose;
pub mod resolver;
pub mod timeline;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use engine::SignEngine;
pub use errors::{AppError, SignError};
pub use gloss::Dialect;
pub use pose::{Keyframe, PoseFrame};
pub use resolver::{SignAnimation, SignDescriptor, SignResolver, SignSource};
pub use timeline::{Timeline, TimelineAssembler};
pub use validation::{AccuracyValidator, ValidationResult};
