/*!
 * Gloss and dialect utilities.
 *
 * Glosses are uppercase tokens naming one sign. Lookups are
 * case-insensitive, so every boundary canonicalizes to upper case.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SignError;

/// Any run of whitespace
static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Characters kept by the naive tokenizer (letters, digits, hyphen, apostrophe)
static NON_GLOSS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}\-']+").unwrap());

/// Canonicalize a gloss: trim and uppercase.
///
/// Returns `InvalidGloss` for empty or whitespace-only input.
pub fn canonicalize(gloss: &str) -> Result<String, SignError> {
    let trimmed = gloss.trim();
    if trimmed.is_empty() {
        return Err(SignError::InvalidGloss(format!("{:?}", gloss)));
    }
    Ok(trimmed.to_uppercase())
}

/// Remove internal whitespace from a gloss, keeping hyphens
pub fn strip_whitespace(gloss: &str) -> String {
    WHITESPACE_REGEX.replace_all(gloss, "").into_owned()
}

/// Turn free text into a gloss sequence without any language model.
///
/// Used when no externally translated gloss sequence is available:
/// every word becomes one uppercase gloss, punctuation is dropped.
pub fn naive_glosses(text: &str) -> Vec<String> {
    WHITESPACE_REGEX
        .split(text)
        .map(|word| NON_GLOSS_REGEX.replace_all(word, "").into_owned())
        .map(|word| word.trim_matches(|c| c == '-' || c == '\'').to_uppercase())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Sign-language dialect, used only as a lookup-key partition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Dialect {
    /// American Sign Language
    #[default]
    Asl,
    /// British Sign Language
    Bsl,
    /// Indian Sign Language
    Isl,
    /// Any other label, stored upper case
    Other(String),
}

impl Dialect {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Asl => "ASL",
            Self::Bsl => "BSL",
            Self::Isl => "ISL",
            Self::Other(label) => label,
        }
    }
}

impl From<&str> for Dialect {
    fn from(label: &str) -> Self {
        let upper = label.trim().to_uppercase();
        match upper.as_str() {
            "ASL" => Self::Asl,
            "BSL" => Self::Bsl,
            "ISL" => Self::Isl,
            _ => Self::Other(upper),
        }
    }
}

impl From<String> for Dialect {
    fn from(label: String) -> Self {
        Self::from(label.as_str())
    }
}

impl From<Dialect> for String {
    fn from(dialect: Dialect) -> Self {
        dialect.as_str().to_string()
    }
}

impl FromStr for Dialect {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
