//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling the
//! various failure modes of the command-line gate.

use std::io;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file discovery, console writes)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from the htmlcheck-core library
    #[error("Core error: {0}")]
    Core(#[from] htmlcheck_core::Error),

    /// Nothing matched the requested files and exclusions
    #[error("No files to validate.")]
    NoFiles,

    /// Invalid flag combination or value
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    /// One or more reported files failed validation
    #[error("{count} file(s) failed validation")]
    FilesFailed { count: usize },

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create an invalid arguments error
    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FilesFailed { .. } => 1,
            Self::Io(_) => 2,
            Self::Core(_) => 3,
            Self::NoFiles => 4,
            Self::InvalidArgs(_) => 5,
            Self::Other { .. } => 99,
        }
    }

    /// Check if this error should display usage help
    pub fn should_show_help(&self) -> bool {
        matches!(self, Self::InvalidArgs(_))
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}
