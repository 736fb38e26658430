//! htmlcheck core - validation engine for W3C markup checking
//!
//! This crate shapes requests to a remote markup checker, normalizes the
//! checker's answers into a stable result record, and renders results as
//! colorized console output.
//!
//! # Main Components
//!
//! - **Error Handling**: local configuration errors via `thiserror`;
//!   transport failures are encoded in the result record, never raised
//! - **Core Types**: request options, checker diagnostics, and the
//!   normalized result record
//! - **Validator**: request construction, dispatch, and response
//!   normalization with message filtering
//! - **Reporter**: pass/fail summaries and per-message console detail
//!
//! # Example
//!
//! ```no_run
//! use htmlcheck_core::{validate, Result, ValidateRequest};
//!
//! async fn example() -> Result<()> {
//!     let results = validate(&ValidateRequest::html("<!doctype html>")).await?;
//!     assert!(results.validates);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod filter;
pub mod http;
pub mod reporter;
pub mod types;
pub mod validator;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use filter::MessageFilter;
pub use http::{HttpClient, HttpClientConfig};
pub use reporter::{report, Reporter, ReporterOptions};
pub use types::{
    // Request options
    IgnoreLevel, MessageMatcher, ValidateRequest,

    // Checker diagnostics
    MessageSubType, MessageType, ValidationMessage,

    // Result record
    Mode, OutputFormat, ValidationResult,

    // Constants
    DEFAULT_CHECK_URL, STATUS_UNAVAILABLE,
};
pub use validator::{validate, Validator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
