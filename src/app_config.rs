use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Application configuration module
/// This module handles the engine configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Default sign-language dialect label (e.g. "ASL")
    #[serde(default = "default_dialect")]
    pub dialect: String,

    /// Default video quality tier (e.g. "720p")
    #[serde(default = "default_quality")]
    pub quality: String,

    /// Reference data locations
    #[serde(default)]
    pub data: DataConfig,

    /// Procedural animation settings
    #[serde(default)]
    pub animation: AnimationConfig,

    /// Fingerspelling settings
    #[serde(default)]
    pub fingerspelling: FingerspellingConfig,

    /// Timeline assembly settings
    #[serde(default)]
    pub timeline: TimelineConfig,

    /// Accuracy validation settings
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Resolution cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Where the reference indexes live
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DataConfig {
    /// Directory holding the index files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Verified motion-capture index file name
    #[serde(default = "default_verified_file")]
    pub verified_file: String,

    /// Video index file name
    #[serde(default = "default_video_index_file")]
    pub video_index_file: String,

    /// Procedural fallback table file name
    #[serde(default = "default_fallback_file")]
    pub fallback_file: String,

    /// Use the embedded fallback table when no fallback file exists
    #[serde(default = "default_true")]
    pub use_builtin_fallbacks: bool,
}

impl DataConfig {
    pub fn verified_path(&self) -> PathBuf {
        self.data_dir.join(&self.verified_file)
    }

    pub fn video_index_path(&self) -> PathBuf {
        self.data_dir.join(&self.video_index_file)
    }

    pub fn fallback_path(&self) -> PathBuf {
        self.data_dir.join(&self.fallback_file)
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            verified_file: default_verified_file(),
            video_index_file: default_video_index_file(),
            fallback_file: default_fallback_file(),
            use_builtin_fallbacks: true,
        }
    }
}

/// Procedural animation configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnimationConfig {
    /// Keyframe samples per second
    #[serde(default = "default_sample_rate_hz")]
    pub sample_rate_hz: u32,

    /// Time reserved at the end of a sign for the return to neutral
    #[serde(default = "default_neutral_settle_ms")]
    pub neutral_settle_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: default_sample_rate_hz(),
            neutral_settle_ms: default_neutral_settle_ms(),
        }
    }
}

/// Fingerspelling configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FingerspellingConfig {
    /// Duration of every letter in milliseconds
    #[serde(default = "default_letter_duration_ms")]
    pub letter_duration_ms: u64,
}

impl Default for FingerspellingConfig {
    fn default() -> Self {
        Self {
            letter_duration_ms: default_letter_duration_ms(),
        }
    }
}

/// Timeline assembly configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TimelineConfig {
    /// Length of the synthetic transition between two signs
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,

    /// Number of eased interpolation steps inside a transition
    #[serde(default = "default_transition_steps")]
    pub transition_steps: usize,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_transition_ms(),
            transition_steps: default_transition_steps(),
        }
    }
}

/// Accuracy validation configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ValidationConfig {
    /// Minimum score (0-100) for an attempt to count as valid
    #[serde(default = "default_pass_threshold")]
    pub pass_threshold: f64,

    /// Extra weight granted when the opening handshape matches
    #[serde(default = "default_handshape_bonus")]
    pub handshape_bonus: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            pass_threshold: default_pass_threshold(),
            handshape_bonus: default_handshape_bonus(),
        }
    }
}

/// Resolution cache configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CacheConfig {
    /// Whether resolved descriptors are cached
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Maximum number of cached descriptors
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: default_cache_capacity(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Lowest sample rate that still reproduces acceptable motion
pub const MIN_SAMPLE_RATE_HZ: u32 = 30;

/// A transition needs at least this many eased steps
pub const MIN_TRANSITION_STEPS: usize = 3;

fn default_dialect() -> String {
    "ASL".to_string()
}

fn default_quality() -> String {
    "720p".to_string()
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("signweave"))
        .unwrap_or_else(|| PathBuf::from("data"))
}

fn default_verified_file() -> String {
    "verified_signs.json".to_string()
}

fn default_video_index_file() -> String {
    "video_index.json".to_string()
}

fn default_fallback_file() -> String {
    "fallback_signs.json".to_string()
}

fn default_sample_rate_hz() -> u32 {
    60
}

fn default_neutral_settle_ms() -> u64 {
    100
}

fn default_letter_duration_ms() -> u64 {
    800
}

fn default_transition_ms() -> u64 {
    150
}

fn default_transition_steps() -> usize {
    5
}

fn default_pass_threshold() -> f64 {
    70.0
}

fn default_handshape_bonus() -> f64 {
    0.3
}

fn default_cache_capacity() -> usize {
    256
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.dialect.trim().is_empty() {
            return Err(anyhow!("Dialect must not be empty"));
        }

        if self.quality.trim().is_empty() {
            return Err(anyhow!("Quality tier must not be empty"));
        }

        if self.animation.sample_rate_hz < MIN_SAMPLE_RATE_HZ {
            return Err(anyhow!(
                "Sample rate {} Hz is below the minimum of {} Hz",
                self.animation.sample_rate_hz,
                MIN_SAMPLE_RATE_HZ
            ));
        }

        if self.fingerspelling.letter_duration_ms == 0 {
            return Err(anyhow!("Letter duration must be greater than zero"));
        }

        if self.timeline.transition_steps < MIN_TRANSITION_STEPS {
            return Err(anyhow!(
                "Transitions need at least {} interpolation steps, got {}",
                MIN_TRANSITION_STEPS,
                self.timeline.transition_steps
            ));
        }

        if !(0.0..=100.0).contains(&self.validation.pass_threshold) {
            return Err(anyhow!(
                "Pass threshold must be within 0-100, got {}",
                self.validation.pass_threshold
            ));
        }

        if self.validation.handshape_bonus < 0.0 {
            return Err(anyhow!("Handshape bonus must not be negative"));
        }

        if self.cache.enabled && self.cache.capacity == 0 {
            return Err(anyhow!("Cache capacity must be greater than zero when caching is enabled"));
        }

        Ok(())
    }

    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load the configuration file, or write a default one if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::from_file(path);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());

        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Save the configuration as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .context(format!("Failed to write config to file: {}", path.display()))?;

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            dialect: default_dialect(),
            quality: default_quality(),
            data: DataConfig::default(),
            animation: AnimationConfig::default(),
            fingerspelling: FingerspellingConfig::default(),
            timeline: TimelineConfig::default(),
            validation: ValidationConfig::default(),
            cache: CacheConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
