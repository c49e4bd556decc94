//! Command-line interface module

use clap::Parser;
use console::style;
use std::path::{Path, PathBuf};

use crate::conversion::batch::{convert_directory, BatchOptions};
use crate::conversion::engine::{Conversion, ConversionEngine};
use crate::conversion::{ConversionConfig, ConversionResult};
use crate::error::{ConversionError, ConversionErrorKind};

pub mod path_mapping;

/// Input used when no path is given on the command line
pub const DEFAULT_INPUT: &str = "data.json";

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "json2md")]
#[command(about = "Convert a JSON object to Markdown, one heading per top-level key")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Input JSON file, or a directory of JSON files
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output Markdown file (default: input path with a .md extension).
    /// For a directory input, the directory to mirror outputs into
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Spaces per indentation level in fenced JSON (0-8, default: 2)
    #[arg(long)]
    pub indent: Option<u8>,

    /// Recursively process directories
    #[arg(short, long)]
    pub recursive: bool,

    /// Continue converting other files when one file fails
    #[arg(long)]
    pub continue_on_error: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let conversion_config = Self::create_conversion_config(&args)?;

        Ok(Self {
            args,
            conversion_config,
        })
    }

    /// Create conversion configuration from CLI arguments
    fn create_conversion_config(args: &Args) -> ConversionResult<ConversionConfig> {
        let config = ConversionConfig {
            indent_size: args.indent.unwrap_or(2),
            ..ConversionConfig::default()
        };

        config
            .validate()
            .map_err(|e| ConversionError::conversion(ConversionErrorKind::configuration(e)))?;

        Ok(config)
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            recursive: self.args.recursive,
            continue_on_error: self.args.continue_on_error,
            output_dir: self.args.output.clone(),
        }
    }
}

/// Run the conversion the arguments describe
pub fn run(config: &CliConfig) -> ConversionResult<()> {
    let input = &config.args.input;
    CliUtils::show_verbose(&format!("Input: {}", input.display()), config.is_verbose());

    if !input.exists() {
        return Err(ConversionError::conversion(
            ConversionErrorKind::missing_input(input.clone()),
        ));
    }

    if input.is_dir() {
        run_directory(input, config)
    } else {
        run_file(input, config)
    }
}

fn run_file(input: &Path, config: &CliConfig) -> ConversionResult<()> {
    let engine = ConversionEngine::new(config.conversion_config.clone());
    let conversion = engine.convert_file(input, config.args.output.as_deref())?;

    CliUtils::show_verbose(
        &format!(
            "Rendered {} sections ({} bytes)",
            conversion.data.metadata.section_count(),
            conversion.data.metadata.output_size
        ),
        config.is_verbose(),
    );
    CliUtils::show_success(
        &format!(
            "Converted {} to {}",
            conversion.input.display(),
            conversion.output.display()
        ),
        config.is_quiet(),
    );

    Ok(())
}

fn run_directory(input_dir: &Path, config: &CliConfig) -> ConversionResult<()> {
    let options = config.batch_options();
    let quiet = config.is_quiet();

    let report = convert_directory(
        input_dir,
        &options,
        &config.conversion_config,
        |json_file, result: &ConversionResult<Conversion>| {
            let relative = json_file.strip_prefix(input_dir).unwrap_or(json_file);
            match result {
                Ok(conversion) => CliUtils::show_success(
                    &format!("{} -> {}", relative.display(), conversion.output.display()),
                    quiet,
                ),
                Err(e) => CliUtils::show_error(&format!(
                    "Error converting {}: {}",
                    relative.display(),
                    e.user_message()
                )),
            }
        },
    )?;

    if report.total == 0 {
        CliUtils::show_warning(
            &format!("No JSON files found in {}", input_dir.display()),
            quiet,
        );
        return Ok(());
    }

    if report.aborted {
        CliUtils::show_warning(
            "Aborting after the first failure (use --continue-on-error to keep going)",
            quiet,
        );
    }
    CliUtils::show_info(
        &format!(
            "{} converted, {} failed, {} found",
            report.converted.len(),
            report.failed(),
            report.total
        ),
        quiet,
    );

    report.ensure_success()
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("{} {}", style("✓").green(), message);
        }
    }

    /// Show a plain informational line (if not in quiet mode)
    pub fn show_info(message: &str, quiet: bool) {
        if !quiet {
            println!("{}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("{} {}", style("✗").red().for_stderr(), message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("{} {}", style("⚠").yellow().for_stderr(), message);
        }
    }

    /// Show a diagnostic trace (only in verbose mode)
    pub fn show_verbose(message: &str, verbose: bool) {
        if verbose {
            eprintln!("{} {}", style("·").dim().for_stderr(), message);
        }
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConversionError) {
    CliUtils::show_error(&error.user_message());

    if error.is_missing_input() {
        eprintln!("\nTry 'json2md --help' for usage information.");
    }
}
