// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use multilang::app_config::{self, Config};
use multilang::language_utils::describe_language;
use multilang::{Document, LanguageStore, TreeSubstitutionEngine};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
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

/// Options shared by every command that reads language data
#[derive(Args, Debug)]
struct StoreArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Language to use instead of the configured active language
    #[arg(short, long)]
    language: Option<String>,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a JSON document tree with the active dictionary
    Translate {
        /// Input document (JSON node tree)
        #[arg(value_name = "INPUT_PATH")]
        input_path: PathBuf,

        /// Output file; the document is printed to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        store: StoreArgs,
    },

    /// Print one word from a word set
    Word {
        /// Word set name
        set_name: String,

        /// Word id within the set
        word_id: String,

        #[command(flatten)]
        store: StoreArgs,
    },

    /// Print the words and dictionary of a language as JSON
    Dump {
        #[command(flatten)]
        store: StoreArgs,
    },

    /// Generate shell completions for multilang
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// multilang - per-language word tables and dictionary-driven translation
///
/// Loads languages from a JSON configuration and swaps the text of JSON
/// document trees between them.
#[derive(Parser, Debug)]
#[command(name = "multilang")]
#[command(version)]
#[command(about = "Dictionary-driven document translation")]
#[command(long_about = "multilang stores per-language words and dictionaries and applies them to document trees.

EXAMPLES:
    multilang translate page.json                   # Translate with the configured active language
    multilang translate -l rus page.json -o out.json
    multilang word locations denver -l rus          # Print one word
    multilang dump -l eng                           # Print a language entry as JSON
    multilang completions bash > multilang.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
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
    // The logger accepts everything; the effective level is set per command
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "multilang", &mut std::io::stdout());
            Ok(())
        }
        Commands::Translate {
            input_path,
            output,
            store,
        } => run_translate(&input_path, output.as_deref(), &store),
        Commands::Word {
            set_name,
            word_id,
            store,
        } => {
            let language_store = load_store(&store)?;
            let word = language_store.get_word(&set_name, word_id.as_str())?;
            println!("{}", word);
            Ok(())
        }
        Commands::Dump { store } => {
            let language_store = load_store(&store)?;
            println!("{}", language_store.describe_active()?);
            Ok(())
        }
    }
}

fn run_translate(input_path: &Path, output: Option<&Path>, args: &StoreArgs) -> Result<()> {
    let store = load_store(args)?;

    let mut document = Document::from_file(input_path)?;
    let engine = TreeSubstitutionEngine::new(&store)?;
    let replaced = engine.run_document(&mut document);

    info!(
        "Translated {} text node(s) of {:?} into {}",
        replaced,
        input_path,
        describe_language(engine.language())
    );

    let json = document.to_json_pretty()?;
    match output {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?,
        None => println!("{}", json),
    }

    Ok(())
}

/// Load or create the configuration, then build the language store
fn load_store(args: &StoreArgs) -> Result<LanguageStore> {
    // If log level is set via command line, apply it immediately
    if let Some(level) = args.log_level {
        log::set_max_level(app_config::LogLevel::from(level).to_level_filter());
    }

    let config_path = Path::new(&args.config_path);
    let config = if config_path.exists() {
        Config::from_file(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", args.config_path);
        let config = Config::default();
        config.save_to_file(config_path)?;
        config
    };

    if args.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let mut store = config
        .build_store()
        .context("Configuration validation failed")?;

    if let Some(requested) = &args.language {
        let language = store
            .resolve_language(requested)
            .map(str::to_string)
            .ok_or_else(|| {
                anyhow!(
                    "Language '{}' is not configured (available: {})",
                    requested,
                    store.languages().collect::<Vec<_>>().join(", ")
                )
            })?;
        store.set_active_language(&language);
    }

    Ok(store)
}
