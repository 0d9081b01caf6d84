/*!
 * Lazily loaded, explicitly reloadable sign index.
 *
 * The index is read from its source on first access and then shared
 * read-only. `reload()` is an administrative operation; it is not meant
 * to race with hot-path resolution.
 */

use log::{error, info};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::errors::SignError;

use super::index::SignIndex;
use super::source::SignDataSource;

/// Handle to the process-wide reference tables
pub struct SignLibrary {
    source: Box<dyn SignDataSource>,
    index: RwLock<Option<Arc<SignIndex>>>,
    last_error: RwLock<Option<String>>,
}

impl SignLibrary {
    pub fn new(source: impl SignDataSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            index: RwLock::new(None),
            last_error: RwLock::new(None),
        }
    }

    /// The current index, loading it on first access.
    ///
    /// A corrupt source is logged once and replaced by an empty index.
    pub fn index(&self) -> Arc<SignIndex> {
        if let Some(index) = self.index.read().as_ref() {
            return index.clone();
        }

        let mut slot = self.index.write();
        if let Some(index) = slot.as_ref() {
            return index.clone();
        }

        let index = match self.load_from_source() {
            Ok(index) => index,
            Err(_) => Arc::new(SignIndex::empty()),
        };
        *slot = Some(index.clone());
        index
    }

    /// Re-read the source, replacing the current index.
    ///
    /// On failure the library serves an empty index and the error is returned.
    pub fn reload(&self) -> Result<Arc<SignIndex>, SignError> {
        let result = self.load_from_source();
        let index = match &result {
            Ok(index) => index.clone(),
            Err(_) => Arc::new(SignIndex::empty()),
        };
        *self.index.write() = Some(index);
        result
    }

    pub fn is_loaded(&self) -> bool {
        self.index.read().is_some()
    }

    /// Message of the most recent failed load, if the last load failed
    pub fn last_error(&self) -> Option<String> {
        self.last_error.read().clone()
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    fn load_from_source(&self) -> Result<Arc<SignIndex>, SignError> {
        match self.source.load() {
            Ok(index) => {
                let stats = index.stats();
                info!(
                    "Loaded sign index from '{}': {} videos, {} verified, {} procedural",
                    self.source.name(),
                    stats.videos,
                    stats.verified,
                    stats.fallbacks
                );
                *self.last_error.write() = None;
                Ok(Arc::new(index))
            }
            Err(e) => {
                error!("Failed to load sign index from '{}': {}", self.source.name(), e);
                *self.last_error.write() = Some(e.to_string());
                Err(e)
            }
        }
    }
}

impl std::fmt::Debug for SignLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignLibrary")
            .field("source", &self.source.name())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
