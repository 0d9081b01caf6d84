/*!
 * Error types for the signweave library.
 *
 * This module contains custom error types for the sign resolution engine,
 * using the thiserror crate for ergonomic error definitions.
 *
 * Only two conditions are hard failures: an empty gloss and a corrupt
 * reference index. Everything else (missing video, missing procedural
 * entry, unknown letter) degrades to the next resolution tier and is
 * reported through the descriptor's `source`/`fallback` fields instead.
 */

use thiserror::Error;

/// Errors that can occur while resolving or loading signs
#[derive(Error, Debug)]
pub enum SignError {
    /// Empty or whitespace-only gloss; there is nothing to sign or spell
    #[error("Invalid gloss: {0}")]
    InvalidGloss(String),

    /// The verified, video, or fallback index is malformed
    #[error("Corrupt sign index '{source_name}': {reason}")]
    CorruptIndex {
        /// Name of the data source that failed
        source_name: String,
        /// What was wrong with it
        reason: String,
    },

    /// Error reading sign data from storage
    #[error("Failed to read sign data: {0}")]
    Io(#[from] std::io::Error),

    /// Error decoding sign data
    #[error("Failed to parse sign data: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SignError {
    /// Shorthand for a corrupt-index error
    pub fn corrupt(source_name: &str, reason: impl Into<String>) -> Self {
        Self::CorruptIndex {
            source_name: source_name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from sign resolution
    #[error("Sign error: {0}")]
    Sign(#[from] SignError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
