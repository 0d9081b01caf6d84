/*!
 * Sign data sources.
 *
 * A `SignDataSource` produces a complete, validated `SignIndex`. The
 * library calls it once on first access and again on `reload()`.
 */

use log::{debug, info};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::app_config::DataConfig;
use crate::errors::SignError;

use super::index::{FallbackSign, SignIndex, VerifiedSign, VideoEntry};

/// Procedural fallback table shipped with the crate
const BUILTIN_FALLBACKS_JSON: &str = include_str!("../../data/fallback_signs.json");

/// Storage backend for the reference tables
pub trait SignDataSource: Send + Sync {
    /// Name used in logs and corrupt-index errors
    fn name(&self) -> &str;

    /// Read and validate the full index
    fn load(&self) -> Result<SignIndex, SignError>;
}

/// Parse the embedded procedural fallback table
pub fn builtin_fallbacks() -> Result<HashMap<String, FallbackSign>, SignError> {
    serde_json::from_str(BUILTIN_FALLBACKS_JSON)
        .map_err(|e| SignError::corrupt("builtin", format!("fallback table: {}", e)))
}

/// Index files on disk, one JSON document per table
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    name: String,
    verified_path: PathBuf,
    video_index_path: PathBuf,
    fallback_path: PathBuf,
    use_builtin_fallbacks: bool,
}

impl JsonFileSource {
    pub fn new(verified_path: PathBuf, video_index_path: PathBuf, fallback_path: PathBuf) -> Self {
        let name = verified_path
            .parent()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|| "files".to_string());

        Self {
            name,
            verified_path,
            video_index_path,
            fallback_path,
            use_builtin_fallbacks: true,
        }
    }

    pub fn from_config(config: &DataConfig) -> Self {
        let mut source = Self::new(config.verified_path(), config.video_index_path(), config.fallback_path());
        source.use_builtin_fallbacks = config.use_builtin_fallbacks;
        source
    }

    pub fn with_builtin_fallbacks(mut self, enabled: bool) -> Self {
        self.use_builtin_fallbacks = enabled;
        self
    }

    /// Read one table; a missing file is an empty table, not an error
    fn read_table<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>, SignError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Sign table not found at {}, treating it as empty", path.display());
                return Ok(None);
            }
            Err(e) => return Err(SignError::Io(e)),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| SignError::corrupt(&self.name, format!("{}: {}", path.display(), e)))
    }
}

impl SignDataSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<SignIndex, SignError> {
        let verified: HashMap<String, VerifiedSign> =
            self.read_table(&self.verified_path)?.unwrap_or_default();
        let videos: Vec<VideoEntry> = self.read_table(&self.video_index_path)?.unwrap_or_default();

        let fallbacks: HashMap<String, FallbackSign> = match self.read_table(&self.fallback_path)? {
            Some(table) => table,
            None if self.use_builtin_fallbacks => {
                info!("Using the built-in procedural fallback table");
                builtin_fallbacks()?
            }
            None => HashMap::new(),
        };

        SignIndex::from_parts(&self.name, videos, verified, fallbacks)
    }
}

/// An index held in memory, for tests and embedding
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    index: SignIndex,
}

impl StaticSource {
    pub fn new(name: &str, index: SignIndex) -> Self {
        Self {
            name: name.to_string(),
            index,
        }
    }

    /// Only the built-in procedural fallbacks, no verified data or videos
    pub fn builtin() -> Result<Self, SignError> {
        let index = SignIndex::from_parts("builtin", Vec::new(), HashMap::new(), builtin_fallbacks()?)?;
        Ok(Self::new("builtin", index))
    }
}

impl SignDataSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<SignIndex, SignError> {
        Ok(self.index.clone())
    }
}
