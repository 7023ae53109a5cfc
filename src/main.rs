// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use app_controller::Controller;
use file_utils::FileManager;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod metadata_parser;
mod muxer;
mod serializers;
mod timecode;

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

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Embed chapters and subtitles into a Matroska file (default command)
    Embed(EmbedArgs),

    /// Generate shell completions for mkvembed
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct EmbedArgs {
    /// Metadata file describing chapters and subtitles
    #[arg(short, long)]
    metadata: PathBuf,

    /// Input Matroska file
    #[arg(short, long)]
    input: PathBuf,

    /// Output Matroska file
    #[arg(short, long)]
    output: PathBuf,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Parse and render only, do not invoke ffmpeg
    #[arg(long)]
    dry_run: bool,
}

/// mkvembed - Embed chapter info and subtitles into a Matroska file
///
/// Parses a line-oriented metadata file into chapter markers and subtitle
/// cues, renders them as ffmetadata and SRT, and muxes both into the output
/// container with ffmpeg while stream-copying everything else.
#[derive(Parser, Debug)]
#[command(name = "mkvembed")]
#[command(version = "1.0.0")]
#[command(about = "Embed chapters and subtitles into Matroska files")]
#[command(long_about = "mkvembed reads a metadata file of CHAPTER, SUBTITLE and SUBTITLELOCALE
lines and embeds the result into a Matroska container with ffmpeg.

EXAMPLES:
    mkvembed -m film.meta -i film.mkv -o film.tagged.mkv
    mkvembed --dry-run -m film.meta -i film.mkv -o out.mkv   # Parse and render only
    mkvembed -l debug -m film.meta -i film.mkv -o out.mkv    # Verbose logging
    mkvembed completions bash > mkvembed.bash                # Generate bash completions

METADATA FORMAT:
    CHAPTER <timecode> <title>
    SUBTITLE <start-timecode> <end-timecode> <text>
    SUBTITLELOCALE <locale>
    ; comment lines and blank lines are ignored

    Timecodes are up to four colon-separated segments (days:hours:minutes:
    seconds) with an optional fractional part, e.g. 1:02:03.5

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Metadata file describing chapters and subtitles
    #[arg(short, long)]
    metadata: Option<PathBuf>,

    /// Input Matroska file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output Matroska file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Parse and render only, do not invoke ffmpeg
    #[arg(long)]
    dry_run: bool,
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

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
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
                "{}{} {:5} {}\x1B[0m",
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

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "mkvembed", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Embed(args)) => run_embed(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let metadata = cli
                .metadata
                .ok_or_else(|| anyhow!("--metadata is required when no subcommand is specified"))?;
            let input = cli
                .input
                .ok_or_else(|| anyhow!("--input is required when no subcommand is specified"))?;
            let output = cli
                .output
                .ok_or_else(|| anyhow!("--output is required when no subcommand is specified"))?;

            let embed_args = EmbedArgs {
                metadata,
                input,
                output,
                config_path: cli.config_path,
                log_level: cli.log_level,
                dry_run: cli.dry_run,
            };
            run_embed(embed_args).await
        }
    }
}

async fn run_embed(options: EmbedArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        // Update log level in config if specified via command line
        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        config
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let mut config = Config::default();

        // Apply command line log level to default config if specified
        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        FileManager::write_to_file(config_path, &config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Create controller and run the workflow
    let controller = Controller::with_config(config)?;
    controller
        .run(
            &options.metadata,
            &options.input,
            &options.output,
            options.dry_run,
        )
        .await
}
