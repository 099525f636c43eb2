// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod providers;
mod subtitle_processor;
mod translation;

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
    /// Translate a subtitle file (default command)
    #[command(alias = "translate")]
    Translate(TranslateArgs),

    /// Generate shell completions for subtrans
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Input subtitle file to translate
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Target language display name (e.g. 'Yoruba', 'Fon')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Output subtitle file path (default: next to the input file)
    #[arg(short, long)]
    output_path: Option<PathBuf>,

    /// Number of cue texts sent to the oracle per request
    #[arg(short, long)]
    batch_size: Option<usize>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// subtrans - Subtitle Batch Translator
///
/// Translates SRT subtitle files with an AI translation service while
/// preserving every cue's index and timing.
#[derive(Parser, Debug)]
#[command(name = "subtrans")]
#[command(version = "0.1.0")]
#[command(about = "AI-powered SRT subtitle translator")]
#[command(long_about = "subtrans parses an SRT file, translates its cue texts in batches and
writes a new SRT file with the original timing untouched.

EXAMPLES:
    subtrans movie.srt                          # Translate using default config
    subtrans -t Fon movie.srt                   # Pick the target language
    subtrans -t Yoruba -o out.srt movie.srt     # Explicit output path
    subtrans -b 20 movie.srt                    # Smaller oracle batches
    subtrans -f movie.srt                       # Force overwrite existing output
    subtrans --log-level debug movie.srt        # Verbose logging
    subtrans completions bash > subtrans.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically. The API key is read from the config file or
    from the OPENAI_API_KEY environment variable.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input subtitle file to translate
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Target language display name (e.g. 'Yoruba', 'Fon')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Output subtitle file path (default: next to the input file)
    #[arg(short, long)]
    output_path: Option<PathBuf>,

    /// Number of cue texts sent to the oracle per request
    #[arg(short, long)]
    batch_size: Option<usize>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
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

    // @returns: ANSI color code for log level
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
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:5} {}\x1B[0m",
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
    let options = CommandLineOptions::parse();

    match options.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subtrans", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translation(args).await,
        None => {
            // No subcommand: treat the top-level arguments as a translate run
            let input_path = options
                .input_path
                .ok_or_else(|| anyhow!("No input file provided. Run with --help for usage."))?;
            run_translation(TranslateArgs {
                input_path,
                target_language: options.target_language,
                output_path: options.output_path,
                batch_size: options.batch_size,
                force_overwrite: options.force_overwrite,
                config_path: options.config_path,
                log_level: options.log_level,
            })
            .await
        }
    }
}

/// Load configuration, apply CLI overrides and run the controller
async fn run_translation(args: TranslateArgs) -> Result<()> {
    let mut config = Config::load_or_create(&args.config_path)
        .with_context(|| format!("Failed to load configuration from {}", args.config_path))?;

    if let Some(target_language) = args.target_language {
        config.target_language = target_language;
    }
    if let Some(batch_size) = args.batch_size {
        config.batch_size = batch_size;
    }
    if let Some(log_level) = args.log_level {
        config.log_level = log_level.into();
    }

    // Re-apply the configured level now that config and CLI are merged
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;
    controller
        .run(args.input_path, args.output_path, args.force_overwrite)
        .await
}
