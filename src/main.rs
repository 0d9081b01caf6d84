// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use signweave::app_config::{self, Config};
use signweave::pose::Keyframe;
use signweave::SignEngine;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve one gloss and print its descriptor
    Resolve {
        /// Gloss to resolve (e.g. HELLO)
        gloss: String,
    },

    /// Show which sources can serve a gloss
    Availability {
        /// Gloss to probe
        gloss: String,
    },

    /// Assemble a gloss sequence into a timeline
    Timeline {
        /// Glosses in signing order
        #[arg(required = true)]
        glosses: Vec<String>,

        /// Print only the pose at this time (ms) instead of the whole timeline
        #[arg(long)]
        at: Option<f64>,
    },

    /// Assemble free text, one gloss per word
    Text {
        /// Text to sign
        text: String,
    },

    /// Score a captured attempt against the verified reference
    Validate {
        /// Gloss that was attempted
        gloss: String,

        /// JSON file with the captured keyframes
        attempt: PathBuf,
    },

    /// Re-read the reference data and print table sizes
    Reload,

    /// Generate shell completions for signweave
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// signweave - sign resolution and animation timelines
///
/// Resolves glosses to avatar animation (verified video, motion capture,
/// procedural motion or fingerspelling) and assembles them into timelines.
#[derive(Parser, Debug)]
#[command(name = "signweave")]
#[command(version)]
#[command(about = "Sign resolution and animation timeline engine")]
#[command(long_about = "signweave resolves sign-language glosses to avatar animation and assembles them into timelines.

EXAMPLES:
    signweave resolve HELLO                     # Resolve one gloss
    signweave availability THANK-YOU            # Which sources hold a gloss
    signweave timeline HELLO GOODBYE            # Full timeline as JSON
    signweave timeline HELLO GOODBYE --at 1600  # Pose at 1.6s
    signweave text \"hello, my name is Ana\"      # Naive word-per-gloss signing
    signweave validate HELLO attempt.json       # Score a captured attempt
    signweave completions bash > signweave.bash # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long = "config", default_value = "conf.json", global = true)]
    config_path: String,

    /// Sign-language dialect (e.g. ASL, BSL, ISL)
    #[arg(short, long, global = true)]
    dialect: Option<String>,

    /// Video quality tier (e.g. 720p)
    #[arg(short, long, global = true)]
    quality: Option<String>,

    /// Directory holding the sign index files
    #[arg(long, global = true, env = "SIGNWEAVE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Logger starts permissive; the effective level is set once the config is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "signweave", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    log::set_max_level(config.log_level.to_level_filter());

    let engine = SignEngine::from_config(config)?;
    run_command(&engine, cli.command)
}

fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let mut config = Config::load_or_default(Path::new(&cli.config_path))?;

    // Override config with CLI options if provided
    if let Some(dialect) = &cli.dialect {
        config.dialect = dialect.clone();
    }

    if let Some(quality) = &cli.quality {
        config.quality = quality.clone();
    }

    if let Some(data_dir) = &cli.data_dir {
        config.data.data_dir = data_dir.clone();
    }

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    debug!("Using sign data from {}", config.data.data_dir.display());
    Ok(config)
}

fn run_command(engine: &SignEngine, command: Commands) -> Result<()> {
    match command {
        Commands::Resolve { gloss } => {
            let descriptor = engine.resolve(&gloss)?;
            print_json(descriptor.as_ref())
        }
        Commands::Availability { gloss } => {
            let availability = engine.check_availability(&gloss)?;
            print_json(&availability)
        }
        Commands::Timeline { glosses, at } => {
            let timeline = engine.assemble(&glosses)?;
            match at {
                Some(time_ms) => {
                    let sample = timeline
                        .sample(time_ms)
                        .ok_or_else(|| anyhow!("Timeline is empty"))?;
                    print_json(&sample)
                }
                None => print_json(&timeline),
            }
        }
        Commands::Text { text } => {
            let timeline = engine.assemble_text(&text)?;
            print_json(&timeline)
        }
        Commands::Validate { gloss, attempt } => {
            let file = File::open(&attempt)
                .context(format!("Failed to open attempt file: {}", attempt.display()))?;
            let keyframes: Vec<Keyframe> = serde_json::from_reader(BufReader::new(file))
                .context(format!("Failed to parse attempt file: {}", attempt.display()))?;

            let result = engine.validate(&gloss, &keyframes)?;
            print_json(&result)
        }
        Commands::Reload => {
            let stats = engine.reload()?;
            print_json(&stats)
        }
        Commands::Completions { .. } => Ok(()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
