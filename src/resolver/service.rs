/*!
 * Sign resolver: picks exactly one animation source per gloss.
 *
 * Priority, first match wins:
 * 1. verified video for (gloss, dialect, quality)
 * 2. verified motion-capture keyframes for the gloss
 * 3. procedural fallback entry for the gloss (dialect-agnostic)
 * 4. fingerspelling, which always succeeds
 *
 * Using a lower tier is a normal outcome, reported through the
 * descriptor's `source` and `fallback` fields rather than as an error.
 */

use log::debug;
use serde::Serialize;
use std::sync::Arc;

use crate::animation::{FingerspellingExpander, ProceduralGenerator};
use crate::app_config::Config;
use crate::errors::SignError;
use crate::gloss::{self, Dialect};
use crate::library::{IndexStats, SignIndex, SignLibrary};

use super::cache::ResolutionCache;
use super::descriptor::{ProceduralAnimation, SignAnimation, SignDescriptor, SignSource, VideoClip};

/// Which tiers could serve a gloss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Availability {
    /// A video exists in this dialect, at any quality
    pub has_video: bool,
    pub has_verified: bool,
    pub has_procedural: bool,
    /// Always true
    pub can_fingerspell: bool,
}

/// Resolves glosses to descriptors through the tiered fallback chain
pub struct SignResolver {
    library: Arc<SignLibrary>,
    cache: ResolutionCache,
    generator: ProceduralGenerator,
    speller: FingerspellingExpander,
}

impl SignResolver {
    /// Resolver with default generation settings and cache
    pub fn new(library: Arc<SignLibrary>) -> Self {
        Self {
            library,
            cache: ResolutionCache::default(),
            generator: ProceduralGenerator::default(),
            speller: FingerspellingExpander::default(),
        }
    }

    pub fn from_config(library: Arc<SignLibrary>, config: &Config) -> Self {
        Self {
            library,
            cache: ResolutionCache::new(config.cache.enabled, config.cache.capacity),
            generator: ProceduralGenerator::from_config(&config.animation),
            speller: FingerspellingExpander::from_config(&config.fingerspelling),
        }
    }

    pub fn with_cache(mut self, cache: ResolutionCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_generator(mut self, generator: ProceduralGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_speller(mut self, speller: FingerspellingExpander) -> Self {
        self.speller = speller;
        self
    }

    /// Resolve a gloss. Fails only for an empty gloss.
    pub fn resolve(&self, gloss: &str, dialect: &Dialect, quality: &str) -> Result<Arc<SignDescriptor>, SignError> {
        let gloss = gloss::canonicalize(gloss)?;
        let quality = quality.trim();

        if let Some(descriptor) = self.cache.get(&gloss, dialect, quality) {
            return Ok(descriptor);
        }

        let index = self.library.index();
        let descriptor = Arc::new(self.resolve_uncached(&index, &gloss, dialect, quality)?);
        self.cache.store(&gloss, dialect, quality, descriptor.clone());

        Ok(descriptor)
    }

    /// Read-only probe of which tiers hold the gloss
    pub fn check_availability(&self, gloss: &str, dialect: &Dialect) -> Result<Availability, SignError> {
        let gloss = gloss::canonicalize(gloss)?;
        let index = self.library.index();

        Ok(Availability {
            has_video: index.has_video(&gloss, dialect),
            has_verified: index.verified(&gloss).is_some(),
            has_procedural: index.fallback(&gloss).is_some(),
            can_fingerspell: true,
        })
    }

    /// Re-read the reference data and drop every cached descriptor
    pub fn reload(&self) -> Result<IndexStats, SignError> {
        let result = self.library.reload();
        self.cache.clear();
        result.map(|index| index.stats())
    }

    pub fn library(&self) -> &Arc<SignLibrary> {
        &self.library
    }

    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    pub fn speller(&self) -> &FingerspellingExpander {
        &self.speller
    }

    fn resolve_uncached(
        &self,
        index: &SignIndex,
        gloss: &str,
        dialect: &Dialect,
        quality: &str,
    ) -> Result<SignDescriptor, SignError> {
        if let Some(video) = index.video(gloss, dialect, quality) {
            debug!("Resolved {} to video {}", gloss, video.url);
            let clip = VideoClip {
                url: video.url.clone(),
                duration_ms: video.duration_ms,
                thumbnail_url: video.thumbnail_url.clone(),
            };
            return Ok(SignDescriptor::new(gloss, SignSource::Video, SignAnimation::Video(clip)));
        }

        if let Some(verified) = index.verified(gloss) {
            debug!("Resolved {} to {} verified keyframes", gloss, verified.keyframes.len());
            let animation = ProceduralAnimation {
                duration_ms: verified.duration_ms,
                keyframes: verified.keyframes.clone(),
            };
            return Ok(SignDescriptor::new(gloss, SignSource::Verified, SignAnimation::Procedural(animation)));
        }

        if let Some(fallback) = index.fallback(gloss) {
            debug!("Resolved {} to procedural fallback ({})", gloss, fallback.category);
            let animation = self.generator.generate(&fallback.animation);
            return Ok(SignDescriptor::new(gloss, SignSource::Procedural, SignAnimation::Procedural(animation)));
        }

        debug!("No sign data for {}, fingerspelling", gloss);
        let sequence = self.speller.expand(gloss)?;
        Ok(SignDescriptor::new(gloss, SignSource::Fingerspelling, SignAnimation::Fingerspelling(sequence)))
    }
}
