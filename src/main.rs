// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use alartex::app_config::{self, Config};
use alartex::{Controller, ScriptRange, ScriptWrapper};

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
    /// Convert a YAML dictionary, or a directory of them, to LaTeX (default command)
    Build(BuildArgs),

    /// Wrap the target-script runs of a piece of text and print the result
    Wrap {
        /// Text to wrap; read from stdin when omitted
        text: Option<String>,

        /// Code point range to wrap (e.g. U+0C80-U+0CFF)
        #[arg(long, value_name = "RANGE")]
        script_range: Option<ScriptRange>,

        /// LaTeX environment placed around each run
        #[arg(long, default_value = "kannada")]
        environment: String,
    },

    /// Generate shell completions for alartex
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Input YAML dictionary file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output .tex file (single file input only)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "alartex.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Replace the built-in book preamble with the contents of this file
    #[arg(long, value_name = "FILE")]
    preamble: Option<PathBuf>,

    /// Code point range to wrap (e.g. U+0C80-U+0CFF)
    #[arg(long, value_name = "RANGE")]
    script_range: Option<ScriptRange>,

    /// LaTeX environment placed around each run
    #[arg(long)]
    environment: Option<String>,

    /// Label written before each phonetic transcription
    #[arg(long)]
    phonetic_prefix: Option<String>,
}

/// alartex - Typeset a Kannada-English dictionary corpus with LaTeX
#[derive(Parser, Debug)]
#[command(name = "alartex")]
#[command(version)]
#[command(about = "Convert a YAML dictionary corpus into a LaTeX book")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "alartex reads a YAML dictionary corpus and writes a LaTeX document, wrapping every
run of Kannada text in \\begin{kannada}...\\end{kannada}.

EXAMPLES:
    alartex alar.yml                              # Write alar.tex next to the input
    alartex -f alar.yml -o build/alar_dict.tex    # Choose the output, overwrite it
    alartex --preamble my_preamble.tex alar.yml   # Use a custom preamble
    alartex corpus/                               # Convert every .yml/.yaml file below corpus/
    alartex wrap 'ಅಕ್ಕ: elder sister'               # Wrap a single string
    alartex completions bash > alartex.bash       # Generate bash completions

CONFIGURATION:
    Configuration is stored in alartex.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    build: BuildArgs,
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

    // @returns: Emoji and ANSI color for log level
    fn get_style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌ ", "1;31"),
            Level::Warn => ("🚧 ", "1;33"),
            Level::Info => (" ", "1;32"),
            Level::Debug => ("🔍 ", "1;36"),
            Level::Trace => ("📋 ", "1;35"),
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
            let (emoji, color) = Self::get_style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // The logger accepts every level; log::set_max_level narrows it once the config is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "alartex", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Wrap { text, script_range, environment }) => {
            run_wrap(text, script_range, &environment)
        }
        Some(Commands::Build(args)) => run_build(args),
        None => run_build(cli.build),
    }
}

fn run_wrap(text: Option<String>, script_range: Option<ScriptRange>, environment: &str) -> Result<()> {
    app_config::validate_environment(environment)?;

    let text = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            buffer
        }
    };

    let wrapper = ScriptWrapper::new(script_range.unwrap_or_default(), environment);
    let mut stdout = std::io::stdout();
    write!(stdout, "{}", wrapper.wrap(&text)).context("Failed to write to stdout")?;
    stdout.flush()?;

    Ok(())
}

fn run_build(options: BuildArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    let input_path = options
        .input_path
        .clone()
        .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

    let config = load_or_create_config(&options)?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    debug!("Using configuration: {:?}", config);

    let controller = Controller::with_config(config).context("Configuration validation failed")?;

    if input_path.is_file() {
        controller.run(input_path, options.output, options.force_overwrite)?;
    } else if input_path.is_dir() {
        if options.output.is_some() {
            warn!("--output is ignored for directory input; each document is written next to its dictionary");
        }
        controller.run_folder(input_path, options.force_overwrite)?;
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", input_path));
    }

    Ok(())
}

// Load the config file, creating a default one when absent, then apply CLI overrides
fn load_or_create_config(options: &BuildArgs) -> Result<Config> {
    let config_path = Path::new(&options.config_path);

    let mut config = if config_path.exists() {
        Config::from_file(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path.display());
        let config = Config::default();
        config.save(config_path)?;
        config
    };

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    if let Some(preamble) = &options.preamble {
        config.template.preamble_path = Some(preamble.clone());
    }

    if let Some(range) = options.script_range {
        config.script.range = range;
    }

    if let Some(environment) = &options.environment {
        config.script.environment = environment.clone();
    }

    if let Some(prefix) = &options.phonetic_prefix {
        config.phonetic_prefix = prefix.clone();
    }

    Ok(config)
}
