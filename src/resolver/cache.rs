/*!
 * Resolution caching functionality.
 *
 * This module caches resolved descriptors keyed on exactly
 * (gloss, dialect, quality) so repeated resolution within a session skips
 * index lookups and keyframe generation. The cache is bounded and evicts
 * the least recently used entry when full.
 */

use log::debug;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;

use crate::gloss::Dialect;

use super::descriptor::SignDescriptor;

/// Cache key combining gloss, dialect, and quality tier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    gloss: String,
    dialect: Dialect,
    quality: String,
}

impl CacheKey {
    fn new(gloss: &str, dialect: &Dialect, quality: &str) -> Self {
        Self {
            gloss: gloss.to_string(),
            dialect: dialect.clone(),
            quality: quality.to_string(),
        }
    }
}

struct CacheEntry {
    descriptor: Arc<SignDescriptor>,
    last_used: u64,
}

#[derive(Default)]
struct LruState {
    entries: HashMap<CacheKey, CacheEntry>,
    clock: u64,
}

impl LruState {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            debug!("Evicting cached sign {} ({}/{})", key.gloss, key.dialect, key.quality);
            self.entries.remove(&key);
        }
    }
}

/// Bounded LRU cache of resolved descriptors
pub struct ResolutionCache {
    state: Arc<Mutex<LruState>>,

    /// Cache hit counter
    hits: Arc<RwLock<usize>>,

    /// Cache miss counter
    misses: Arc<RwLock<usize>>,

    capacity: usize,

    enabled: bool,
}

impl ResolutionCache {
    pub fn new(enabled: bool, capacity: usize) -> Self {
        Self {
            state: Arc::new(Mutex::new(LruState::default())),
            hits: Arc::new(RwLock::new(0)),
            misses: Arc::new(RwLock::new(0)),
            capacity: capacity.max(1),
            enabled,
        }
    }

    /// Get a descriptor from the cache
    pub fn get(&self, gloss: &str, dialect: &Dialect, quality: &str) -> Option<Arc<SignDescriptor>> {
        if !self.enabled {
            return None;
        }

        let key = CacheKey::new(gloss, dialect, quality);
        let mut state = self.state.lock();
        let now = state.tick();

        match state.entries.get_mut(&key) {
            Some(entry) => {
                entry.last_used = now;
                *self.hits.write() += 1;
                debug!("Cache hit for {} ({}/{})", gloss, dialect, quality);
                Some(entry.descriptor.clone())
            }
            None => {
                *self.misses.write() += 1;
                debug!("Cache miss for {} ({}/{})", gloss, dialect, quality);
                None
            }
        }
    }

    /// Store a descriptor, evicting the least recently used entry when full
    pub fn store(&self, gloss: &str, dialect: &Dialect, quality: &str, descriptor: Arc<SignDescriptor>) {
        if !self.enabled {
            return;
        }

        let key = CacheKey::new(gloss, dialect, quality);
        let mut state = self.state.lock();
        let now = state.tick();

        if !state.entries.contains_key(&key) && state.entries.len() >= self.capacity {
            state.evict_oldest();
        }

        state.entries.insert(key, CacheEntry { descriptor, last_used: now });
    }

    /// Get cache statistics
    pub fn stats(&self) -> (usize, usize, f64) {
        let hits = *self.hits.read();
        let misses = *self.misses.read();
        let total = hits + misses;

        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };

        (hits, misses, hit_rate)
    }

    /// Clear the cache
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.entries.clear();

        *self.hits.write() = 0;
        *self.misses.write() = 0;

        debug!("Resolution cache cleared");
    }

    /// Get the number of entries in the cache
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.state.lock().entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Enable or disable the cache
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Check if the cache is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for ResolutionCache {
    fn default() -> Self {
        Self::new(true, 256)
    }
}

impl Clone for ResolutionCache {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            hits: self.hits.clone(),
            misses: self.misses.clone(),
            capacity: self.capacity,
            enabled: self.enabled,
        }
    }
}
