//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented flag interface.

use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// htmlcheck - validate HTML files with the W3C Nu checker
///
/// Validates the given files (or every HTML file under the current
/// directory) against a remote markup checker and prints a colorized
/// pass/fail report per file.
#[derive(Parser, Debug)]
#[command(name = "htmlcheck", version, author, about, long_about = None)]
pub struct Cli {
    /// Files or directories to validate (defaults to all HTML files
    /// under the current directory)
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Skip files whose path contains any of these comma-separated
    /// substrings
    #[arg(long, value_name = "SUBSTRINGS")]
    pub exclude: Option<String>,

    /// Suppress summary lines for files that pass
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Truncate validation messages to this many characters
    #[arg(long, value_name = "N")]
    pub trim: Option<usize>,

    /// Report failures but exit successfully
    #[arg(long = "continue")]
    pub continue_on_fail: bool,

    /// Skip messages whose text contains this substring
    #[arg(long, value_name = "TEXT")]
    pub ignore: Option<String>,

    /// Severity floor below which messages are dropped
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub ignore_level: Option<IgnoreLevelArg>,

    /// Checker endpoint to use
    #[arg(long, value_name = "URL", env = "HTMLCHECK_URL")]
    pub check_url: Option<String>,

    /// Enable verbose output (can be used multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Severity floor choices for `--ignore-level`
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum IgnoreLevelArg {
    /// Drop bare informational notices
    Info,
    /// Drop every informational message, warnings included
    Warning,
}

impl From<IgnoreLevelArg> for htmlcheck_core::IgnoreLevel {
    fn from(level: IgnoreLevelArg) -> Self {
        match level {
            IgnoreLevelArg::Info => htmlcheck_core::IgnoreLevel::Info,
            IgnoreLevelArg::Warning => htmlcheck_core::IgnoreLevel::Warning,
        }
    }
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }

    /// Exclusion substrings from the comma-separated `--exclude` value
    pub fn excludes(&self) -> Vec<String> {
        self.exclude
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        // Verify that the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flag_mapping() {
        let cli = Cli::parse_from([
            "htmlcheck",
            "docs",
            "flyer.html",
            "--exclude=draft,tmp",
            "--quiet",
            "--trim=80",
            "--continue",
        ]);
        assert_eq!(cli.files.len(), 2);
        assert_eq!(cli.excludes(), vec!["draft".to_string(), "tmp".to_string()]);
        assert!(cli.quiet);
        assert_eq!(cli.trim, Some(80));
        assert!(cli.continue_on_fail);
    }

    #[test]
    fn test_ignore_level_values() {
        let cli = Cli::parse_from(["htmlcheck", "--ignore-level", "warning"]);
        assert_eq!(cli.ignore_level, Some(IgnoreLevelArg::Warning));
        assert_eq!(
            htmlcheck_core::IgnoreLevel::from(cli.ignore_level.unwrap()),
            htmlcheck_core::IgnoreLevel::Warning
        );

        assert!(Cli::try_parse_from(["htmlcheck", "--ignore-level", "none"]).is_err());
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli::parse_from(["htmlcheck", "-vv"]);
        assert_eq!(cli.verbosity_level(), 2);

        let quiet = Cli::parse_from(["htmlcheck", "--quiet"]);
        assert_eq!(quiet.verbosity_level(), 0);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["htmlcheck", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_empty_exclude_yields_no_substrings() {
        let cli = Cli::parse_from(["htmlcheck"]);
        assert!(cli.excludes().is_empty());
    }
}
