//! Lei Words - Main entrypoint.
//!
//! This is the main entry point for the Lei Words analyzer. It loads
//! configuration, initializes the logging system, and dispatches the
//! requested command: analyzing a word list, validating configuration, or
//! generating a default configuration file.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;

use lei_words_lib::analysis::WordListAnalyzer;
use lei_words_lib::config::analysis::ReportFormat;
use lei_words_lib::config::{self, ConfigLoader, LeiConfig, LogConfig};
use lei_words_lib::error::{
    report_error, set_error_reporter, ErrorContext, LeiError, LeiResult, TracingErrorReporter,
};

/// Command line arguments for the Lei Words analyzer.
#[derive(Parser, Debug)]
#[clap(name = "Lei Words", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a word list for concatenated words
    Analyze {
        /// Path to the word list file, one word per line
        #[clap(value_parser)]
        wordlist: PathBuf,

        /// How many of the longest concatenated words to report
        #[clap(short, long, value_parser)]
        top: Option<usize>,

        /// Report format (text or json)
        #[clap(short, long, value_parser)]
        format: Option<ReportFormat>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser, default_value = config::DEFAULT_CONFIG_PATH)]
        output: PathBuf,
    },
}

/// Load configuration from the explicit path when given, otherwise from the
/// default location when it exists, otherwise from built-in defaults.
/// Environment overrides apply in every case.
fn load_config(explicit: Option<&Path>) -> LeiResult<LeiConfig> {
    let loader = match explicit {
        Some(path) => ConfigLoader::new(Some(path), config::ENV_PREFIX),
        None => {
            let default = Path::new(config::DEFAULT_CONFIG_PATH);
            ConfigLoader::new(default.exists().then_some(default), config::ENV_PREFIX)
        }
    };

    Ok(loader.load()?)
}

/// Initialize the logging system from the loaded configuration.
///
/// `RUST_LOG` takes precedence over the configured level when set.
fn init_logging(config: &LogConfig) -> LeiResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.level))
        .map_err(|e| LeiError::Custom(format!("Invalid log filter: {e}")))?;

    if config.json {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_line_number(config.source_location)
            .with_file(config.source_location)
            .json()
            .finish()
            .with(ErrorLayer::default());

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| LeiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
    } else {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_line_number(config.source_location)
            .with_file(config.source_location)
            .pretty()
            .finish()
            .with(ErrorLayer::default());

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| LeiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
    }
}

/// Run the analyze command: load the word list, rank and count concatenated
/// words, and render the report.
fn run_analysis(wordlist: &Path, top_words: usize, format: ReportFormat) -> LeiResult<()> {
    info!(wordlist = %wordlist.display(), top_words, "Analyzing word list");

    let mut analyzer = WordListAnalyzer::new();
    let stats = analyzer.load_from_path(wordlist)?;
    info!(
        words = stats.words_loaded,
        blank_lines = stats.blank_lines_skipped,
        "Word list loaded"
    );

    let report = analyzer.report(top_words);
    match format {
        ReportFormat::Text => println!("{report}"),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Main entry point for the application.
fn main() -> LeiResult<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Load configuration first so the log settings can shape the subscriber
    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            report_error(ErrorContext::new(e, "config"));
            process::exit(1);
        }
    };

    init_logging(&config.log)?;

    // Set up error reporter now that the subscriber is live
    set_error_reporter(Arc::new(TracingErrorReporter));

    // Initialize global configuration
    config::init_global_config(config.clone());

    match args.command {
        Command::Analyze {
            wordlist,
            top,
            format,
        } => {
            let top_words = top.unwrap_or(config.analysis.top_words);
            let format = format.unwrap_or(config.analysis.format);

            if let Err(e) = run_analysis(&wordlist, top_words, format) {
                report_error(
                    ErrorContext::new(e, "analysis")
                        .with_details(format!("word list: {}", wordlist.display()))
                        .with_span_trace(),
                );
                process::exit(1);
            }

            Ok(())
        }
        Command::Validate => {
            // Loading above already validated the effective configuration.
            info!("Configuration validated successfully");
            println!("Configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = LeiConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(LeiError::Io)?;
            }

            // Serialize to TOML
            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| LeiError::Custom(format!("Failed to serialize config: {e}")))?;

            // Write to file
            std::fs::write(&output, toml).map_err(LeiError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
