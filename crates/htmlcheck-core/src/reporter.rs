//! Console reporting of validation results
//!
//! The reporter is synchronous and performs no I/O beyond writing to its
//! output stream. Severity only affects styling, never pass/fail. A
//! failing result is printed in full and then escalated as
//! `Error::ValidationFailed`, which command-line callers turn into a
//! non-zero exit and library callers may ignore to continue.

use std::io::{self, Write};

use colored::Colorize;

use crate::error::{Error, Result};
use crate::types::{Mode, ValidationMessage, ValidationResult};

/// Program tag prefixed to every summary line
const TAG: &str = "htmlcheck";

/// Formatting options for the reporter
#[derive(Debug, Clone, Default)]
pub struct ReporterOptions {
    /// Truncate each message's text to this many characters
    pub max_message_len: Option<usize>,

    /// Suppress the summary line for passing results
    pub quiet: bool,

    /// Override the displayed title (useful for naming HTML string inputs)
    pub title: Option<String>,
}

/// Writes pass/fail summaries and per-message detail for results
pub struct Reporter {
    options: ReporterOptions,
    writer: Box<dyn Write>,
}

impl Reporter {
    /// Create a reporter writing to stdout
    pub fn new(options: ReporterOptions) -> Self {
        Self {
            options,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create a reporter with a custom writer (used by tests)
    pub fn with_writer(options: ReporterOptions, writer: Box<dyn Write>) -> Self {
        Self { options, writer }
    }

    /// Print the report for one result.
    ///
    /// Passing results with `quiet` set produce no output. A failing
    /// result always prints its summary and messages, then yields
    /// `Error::ValidationFailed` carrying a one-line synopsis.
    pub fn report(&mut self, results: &ValidationResult) -> Result<()> {
        let messages: &[ValidationMessage] = results.messages.as_deref().unwrap_or(&[]);
        let title = self
            .options
            .title
            .clone()
            .unwrap_or_else(|| results.title.clone());

        if !results.validates || !self.options.quiet {
            let status = if results.validates {
                "✔ pass".green().bold()
            } else {
                "✘ fail".red().bold()
            };
            let count = if results.validates {
                String::new()
            } else {
                format!(" (messages: {})", messages.len())
            };
            writeln!(
                self.writer,
                "{} {} {}{}",
                TAG.dimmed(),
                status,
                title.blue().bold(),
                count
            )?;
        }

        for message in messages {
            self.write_message(message)?;
        }
        self.writer.flush()?;

        if results.validates {
            Ok(())
        } else {
            Err(Error::ValidationFailed {
                synopsis: synopsis(results, messages),
            })
        }
    }

    fn write_message(&mut self, message: &ValidationMessage) -> Result<()> {
        let tag = message.tag();
        let label = format!("HTML {}:", tag);
        let styled = match tag.as_str() {
            "error" => label.red().bold(),
            "warning" => label.yellow().bold(),
            "info" => label.white().bold(),
            _ => label.bright_red().bold(),
        };
        writeln!(
            self.writer,
            "{} {}",
            styled,
            truncate(&message.message, self.options.max_message_len)
        )?;

        if let Some(line) = message.last_line {
            let location = format!("line {}, column {}:", line, message.first_column.unwrap_or(0));
            let extract = message
                .extract
                .as_deref()
                .unwrap_or_default()
                .replace('\n', "\\n");
            writeln!(self.writer, "{} {}", location.white(), extract.magenta())?;
        }
        Ok(())
    }
}

/// Print a result to stdout; one-shot convenience wrapper.
pub fn report(results: &ValidationResult, options: ReporterOptions) -> Result<()> {
    Reporter::new(options).report(results)
}

/// One-line failure synopsis: for filename-mode results the path plus the
/// tag and location of every message, otherwise the first message's text.
fn synopsis(results: &ValidationResult, messages: &[ValidationMessage]) -> String {
    if results.mode == Mode::Filename {
        if let Some(path) = &results.filename {
            let details = messages
                .iter()
                .map(|message| {
                    format!(
                        "{} line {} column {}",
                        message.tag(),
                        message.last_line.unwrap_or(0),
                        message.first_column.unwrap_or(0)
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");
            return format!("{}: {}", path.display(), details);
        }
    }
    messages
        .first()
        .map(|message| message.message.clone())
        .unwrap_or_else(|| results.title.clone())
}

/// Cut the text to at most `max_len` characters
fn truncate(text: &str, max_len: Option<usize>) -> String {
    match max_len {
        Some(limit) => text.chars().take(limit).collect(),
        None => text.to_string(),
    }
}
