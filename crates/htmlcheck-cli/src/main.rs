//! htmlcheck - validate HTML files with the W3C Nu checker
//!
//! This is the main entry point for the htmlcheck CLI, wiring file
//! discovery, the core validator, and the console reporter into a
//! command-line gate that exits non-zero when any file fails.

mod cli;
mod error;
mod files;
mod logging;

use cli::Cli;
use colored::{control, Colorize};
use error::{Error, Result};
use htmlcheck_core::{MessageMatcher, Reporter, ReporterOptions, ValidateRequest, Validator};
use logging::LoggingConfig;
use std::process;
use tracing::{debug, info, instrument};

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Initialize logging
    if let Err(e) = init_logging(&cli) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Run the application
    match run(cli).await {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );

            if e.should_show_help() {
                eprintln!("\nFor more information, try '--help'");
            }

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli), fields(files = cli.files.len()))]
async fn run(cli: Cli) -> Result<()> {
    if cli.trim == Some(0) {
        return Err(Error::invalid_args(
            "value of \"trim\" must be a positive whole number",
        ));
    }

    let filenames = files::discover(&cli.files, &cli.excludes())?;
    if filenames.is_empty() {
        return Err(Error::NoFiles);
    }
    info!(count = filenames.len(), "validating files");

    if filenames.len() > 1 && !cli.quiet {
        println!(
            "{} {}",
            "htmlcheck".dimmed(),
            format!("files: {}", filenames.len()).magenta()
        );
    }

    let validator = Validator::with_default_config()?;
    let mut reporter = Reporter::new(ReporterOptions {
        max_message_len: cli.trim,
        quiet: cli.quiet,
        title: None,
    });

    let mut failed = 0usize;
    for filename in &filenames {
        let mut request = ValidateRequest::file(filename);
        if let Some(url) = &cli.check_url {
            request.check_url = url.clone();
        }
        if let Some(level) = cli.ignore_level {
            request.ignore_level = level.into();
        }
        if let Some(text) = &cli.ignore {
            request.ignore_messages = Some(MessageMatcher::Substring(text.clone()));
        }

        let results = validator.validate(&request).await?;
        match reporter.report(&results) {
            Ok(()) => {}
            Err(htmlcheck_core::Error::ValidationFailed { synopsis }) => {
                debug!(%synopsis, "validation failed");
                failed += 1;
            }
            Err(e) => return Err(Error::Core(e)),
        }
    }

    if failed > 0 && !cli.continue_on_fail {
        return Err(Error::FilesFailed { count: failed });
    }
    Ok(())
}

/// Initialize the logging system
fn init_logging(cli: &Cli) -> Result<()> {
    let mut config = LoggingConfig::from_verbosity(cli.verbosity_level(), cli.use_color());
    config.merge_with_env();
    logging::init_logging(config)
}
