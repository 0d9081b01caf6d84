/*!
 * Sign engine: one handle over resolution, assembly and validation.
 *
 * Built once at start-up from a `Config` and a data source, then shared.
 * All operations are synchronous and CPU-bound; the only I/O is the
 * lazy index load and explicit `reload()` calls.
 */

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use crate::app_config::Config;
use crate::errors::SignError;
use crate::gloss::{self, Dialect};
use crate::library::{IndexStats, JsonFileSource, SignDataSource, SignLibrary};
use crate::pose::Keyframe;
use crate::resolver::{Availability, SignDescriptor, SignResolver};
use crate::timeline::{Timeline, TimelineAssembler};
use crate::validation::{AccuracyValidator, ValidationResult};

pub struct SignEngine {
    config: Config,
    dialect: Dialect,
    resolver: SignResolver,
    assembler: TimelineAssembler,
    validator: AccuracyValidator,
}

impl SignEngine {
    /// Engine over an explicit data source
    pub fn new(config: Config, source: impl SignDataSource + 'static) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        let library = Arc::new(SignLibrary::new(source));
        let resolver = SignResolver::from_config(library.clone(), &config);
        let assembler = TimelineAssembler::from_config(&config.timeline);
        let validator = AccuracyValidator::with_config(library, config.validation.clone());

        info!("Sign engine ready ({} / {})", config.dialect, config.quality);

        Ok(Self {
            dialect: Dialect::from(config.dialect.as_str()),
            config,
            resolver,
            assembler,
            validator,
        })
    }

    /// Engine over the index files named in the configuration
    pub fn from_config(config: Config) -> Result<Self> {
        let source = JsonFileSource::from_config(&config.data);
        Self::new(config, source)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    pub fn resolver(&self) -> &SignResolver {
        &self.resolver
    }

    /// Resolve with the configured dialect and quality
    pub fn resolve(&self, gloss: &str) -> Result<Arc<SignDescriptor>, SignError> {
        self.resolver.resolve(gloss, &self.dialect, &self.config.quality)
    }

    pub fn resolve_with(&self, gloss: &str, dialect: &Dialect, quality: &str) -> Result<Arc<SignDescriptor>, SignError> {
        self.resolver.resolve(gloss, dialect, quality)
    }

    pub fn check_availability(&self, gloss: &str) -> Result<Availability, SignError> {
        self.resolver.check_availability(gloss, &self.dialect)
    }

    /// Assemble a gloss sequence with the configured dialect and quality
    pub fn assemble<S: AsRef<str>>(&self, glosses: &[S]) -> Result<Timeline, SignError> {
        self.assembler.assemble(&self.resolver, glosses, &self.dialect, &self.config.quality)
    }

    pub fn assemble_with<S: AsRef<str>>(
        &self,
        glosses: &[S],
        dialect: &Dialect,
        quality: &str,
    ) -> Result<Timeline, SignError> {
        self.assembler.assemble(&self.resolver, glosses, dialect, quality)
    }

    /// Assemble free text through the naive word-per-gloss tokenizer
    pub fn assemble_text(&self, text: &str) -> Result<Timeline, SignError> {
        let glosses = gloss::naive_glosses(text);
        if glosses.is_empty() {
            return Err(SignError::InvalidGloss(format!("no signable words in {:?}", text)));
        }
        self.assemble(&glosses)
    }

    pub fn validate(&self, gloss: &str, captured: &[Keyframe]) -> Result<ValidationResult, SignError> {
        self.validator.validate(gloss, captured)
    }

    /// Re-read reference data and clear the resolution cache
    pub fn reload(&self) -> Result<IndexStats, SignError> {
        self.resolver.reload()
    }
}
