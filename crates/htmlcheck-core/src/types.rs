//! Core types for validation requests and results
//!
//! This module defines the data structures exchanged with the remote
//! markup checker and the normalized result record shared between
//! `validate` and the reporter.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Default endpoint of the public W3C "Nu" markup checker
pub const DEFAULT_CHECK_URL: &str = "https://validator.w3.org/nu/";

/// Sentinel status recorded when no HTTP response was received
pub const STATUS_UNAVAILABLE: i32 = -1;

/// Which of the three input kinds a validate call uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Html,
    Filename,
    Website,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Html => write!(f, "html"),
            Mode::Filename => write!(f, "filename"),
            Mode::Website => write!(f, "website"),
        }
    }
}

/// Response format requested from the checker via the `out` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Html,
}

impl OutputFormat {
    /// Wire value for the `out` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity floor below which diagnostic messages are dropped
///
/// `Warning` drops every `info`-typed message. `Info` drops only bare
/// informational notices, keeping `info` messages that carry a subtype
/// such as `warning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IgnoreLevel {
    #[default]
    None,
    Info,
    Warning,
}

/// Matcher used to suppress individual messages by their text
#[derive(Debug, Clone)]
pub enum MessageMatcher {
    /// Suppress messages whose text contains this literal substring
    Substring(String),
    /// Suppress messages whose text matches this pattern
    Pattern(Regex),
}

impl MessageMatcher {
    /// Does this text match the suppression rule?
    pub fn matches(&self, text: &str) -> bool {
        match self {
            MessageMatcher::Substring(needle) => text.contains(needle.as_str()),
            MessageMatcher::Pattern(pattern) => pattern.is_match(text),
        }
    }
}

/// Options for a single validate call
///
/// Exactly one of `html`, `filename`, or `website` must be set. Every
/// recognized option and its default is stated here; there is no
/// pass-through of unknown settings.
#[derive(Debug, Clone)]
pub struct ValidateRequest {
    /// Raw document text to validate
    pub html: Option<String>,

    /// Path of a document to read and validate
    pub filename: Option<PathBuf>,

    /// URL of a page for the checker to fetch and validate
    pub website: Option<String>,

    /// Checker endpoint
    pub check_url: String,

    /// Severity floor for message filtering
    pub ignore_level: IgnoreLevel,

    /// Optional text matcher for message suppression
    pub ignore_messages: Option<MessageMatcher>,

    /// Response format requested from the checker
    pub output: OutputFormat,
}

impl Default for ValidateRequest {
    fn default() -> Self {
        Self {
            html: None,
            filename: None,
            website: None,
            check_url: DEFAULT_CHECK_URL.to_string(),
            ignore_level: IgnoreLevel::None,
            ignore_messages: None,
            output: OutputFormat::Json,
        }
    }
}

impl ValidateRequest {
    /// Validate a raw HTML string
    pub fn html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Self::default()
        }
    }

    /// Validate the contents of a file
    pub fn file(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: Some(filename.into()),
            ..Self::default()
        }
    }

    /// Ask the checker to fetch and validate a remote page
    pub fn website(url: impl Into<String>) -> Self {
        Self {
            website: Some(url.into()),
            ..Self::default()
        }
    }

    /// Mode implied by which input is set; precedence html, filename,
    /// website. Absence of all three is a configuration error.
    pub fn mode(&self) -> Result<Mode> {
        if self.html.is_some() {
            Ok(Mode::Html)
        } else if self.filename.is_some() {
            Ok(Mode::Filename)
        } else if self.website.is_some() {
            Ok(Mode::Website)
        } else {
            Err(Error::configuration(
                "must specify the \"html\", \"filename\", or \"website\" option",
            ))
        }
    }
}

/// Top-level message category reported by the checker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    Info,
    Error,
    NonDocumentError,
    NetworkError,
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageType::Info => write!(f, "info"),
            MessageType::Error => write!(f, "error"),
            MessageType::NonDocumentError => write!(f, "non-document-error"),
            MessageType::NetworkError => write!(f, "network-error"),
        }
    }
}

/// Refinement of a message type
///
/// `warning` refines `info`, `fatal` refines `error`, and `io`, `schema`,
/// and `internal` refine `non-document-error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSubType {
    Warning,
    Fatal,
    Io,
    Schema,
    Internal,
}

impl fmt::Display for MessageSubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageSubType::Warning => write!(f, "warning"),
            MessageSubType::Fatal => write!(f, "fatal"),
            MessageSubType::Io => write!(f, "io"),
            MessageSubType::Schema => write!(f, "schema"),
            MessageSubType::Internal => write!(f, "internal"),
        }
    }
}

/// One diagnostic from the checker
///
/// Position and highlight metadata is 1-based and absent for messages
/// that do not point at a location in the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationMessage {
    /// Message category
    #[serde(rename = "type")]
    pub message_type: MessageType,

    /// Refinement of the category, when the checker supplies one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<MessageSubType>,

    /// Human-readable diagnostic text
    #[serde(default)]
    pub message: String,

    /// Snippet of the source surrounding the issue, with embedded newlines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_line: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_column: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_column: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hilite_start: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hilite_length: Option<u32>,
}

impl ValidationMessage {
    /// Create a message with no location metadata
    pub fn new(message_type: MessageType, message: impl Into<String>) -> Self {
        Self {
            message_type,
            sub_type: None,
            message: message.into(),
            extract: None,
            last_line: None,
            first_column: None,
            last_column: None,
            hilite_start: None,
            hilite_length: None,
        }
    }

    /// Synthetic diagnostic representing a transport-layer failure
    pub fn network_error(message: impl Into<String>) -> Self {
        Self::new(MessageType::NetworkError, message)
    }

    /// Tag used in console output: the subtype when present, else the type
    pub fn tag(&self) -> String {
        match self.sub_type {
            Some(sub_type) => sub_type.to_string(),
            None => self.message_type.to_string(),
        }
    }

    /// True when the subtype, if present, is a legal refinement of the type
    pub fn has_valid_sub_type(&self) -> bool {
        match (self.message_type, self.sub_type) {
            (_, None) => true,
            (MessageType::Info, Some(MessageSubType::Warning)) => true,
            (MessageType::Error, Some(MessageSubType::Fatal)) => true,
            (
                MessageType::NonDocumentError,
                Some(MessageSubType::Io | MessageSubType::Schema | MessageSubType::Internal),
            ) => true,
            _ => false,
        }
    }
}

/// Normalized, immutable outcome of one validate call
///
/// `messages` is present only for `json` output and `display` only for
/// `html` output. A transport failure is represented as a single
/// synthetic `network-error` message rather than an error from `validate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Did the document pass, after message filtering?
    pub validates: bool,

    /// Which input variant was used
    pub mode: Mode,

    /// Human-readable label for the input
    pub title: String,

    /// The input text (raw string or file contents), if any
    pub html: Option<String>,

    /// Echoed file path for filename mode
    pub filename: Option<PathBuf>,

    /// Echoed URL for website mode
    pub website: Option<String>,

    /// Echoed response format
    pub output: OutputFormat,

    /// HTTP status code, or `STATUS_UNAVAILABLE` when no response arrived
    pub status: i32,

    /// Filtered diagnostics (`json` output only)
    pub messages: Option<Vec<ValidationMessage>>,

    /// Raw HTML report text (`html` output only)
    pub display: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_precedence() {
        let mut request = ValidateRequest::html("<!doctype html>");
        request.filename = Some(PathBuf::from("index.html"));
        request.website = Some("https://example.org/".to_string());
        assert_eq!(request.mode().unwrap(), Mode::Html);

        request.html = None;
        assert_eq!(request.mode().unwrap(), Mode::Filename);

        request.filename = None;
        assert_eq!(request.mode().unwrap(), Mode::Website);
    }

    #[test]
    fn test_mode_requires_an_input() {
        let request = ValidateRequest::default();
        let err = request.mode().unwrap_err();
        assert!(err.to_string().contains("\"html\""));
    }

    #[test]
    fn test_request_defaults() {
        let request = ValidateRequest::default();
        assert_eq!(request.check_url, DEFAULT_CHECK_URL);
        assert_eq!(request.ignore_level, IgnoreLevel::None);
        assert_eq!(request.output, OutputFormat::Json);
        assert!(request.ignore_messages.is_none());
    }

    #[test]
    fn test_matcher_substring() {
        let matcher = MessageMatcher::Substring("lacks heading".to_string());
        assert!(matcher.matches("Section lacks heading."));
        assert!(!matcher.matches("Element not allowed here."));
    }

    #[test]
    fn test_matcher_pattern() {
        let matcher = MessageMatcher::Pattern(Regex::new(r"^Trailing slash").unwrap());
        assert!(matcher.matches("Trailing slash on void elements"));
        assert!(!matcher.matches("A trailing slash was found"));
    }

    #[test]
    fn test_message_deserializes_from_checker_json() {
        let json = r#"{
            "type": "info",
            "subType": "warning",
            "message": "Section lacks heading.",
            "extract": "<section>\nHi</section>",
            "lastLine": 9,
            "firstColumn": 4,
            "lastColumn": 12,
            "hiliteStart": 10,
            "hiliteLength": 9,
            "url": "ignored-by-this-client"
        }"#;
        let message: ValidationMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.message_type, MessageType::Info);
        assert_eq!(message.sub_type, Some(MessageSubType::Warning));
        assert_eq!(message.last_line, Some(9));
        assert_eq!(message.first_column, Some(4));
        assert_eq!(message.extract.as_deref(), Some("<section>\nHi</section>"));
    }

    #[test]
    fn test_message_without_location_metadata() {
        let json = r#"{"type": "non-document-error", "subType": "io", "message": "Timed out."}"#;
        let message: ValidationMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.message_type, MessageType::NonDocumentError);
        assert_eq!(message.sub_type, Some(MessageSubType::Io));
        assert!(message.last_line.is_none());
        assert!(message.extract.is_none());
    }

    #[test]
    fn test_sub_type_refinement() {
        let mut message = ValidationMessage::new(MessageType::Info, "note");
        assert!(message.has_valid_sub_type());

        message.sub_type = Some(MessageSubType::Warning);
        assert!(message.has_valid_sub_type());

        message.message_type = MessageType::Error;
        assert!(!message.has_valid_sub_type());

        message.sub_type = Some(MessageSubType::Fatal);
        assert!(message.has_valid_sub_type());

        message.message_type = MessageType::NetworkError;
        assert!(!message.has_valid_sub_type());
    }

    #[test]
    fn test_message_tag_prefers_sub_type() {
        let mut message = ValidationMessage::new(MessageType::Info, "note");
        assert_eq!(message.tag(), "info");
        message.sub_type = Some(MessageSubType::Warning);
        assert_eq!(message.tag(), "warning");
    }

    #[test]
    fn test_malformed_results_are_rejected() {
        // `validates` must be present and boolean for a result to
        // deserialize at all.
        let missing = r#"{"mode": "html", "title": "t", "html": null, "filename": null,
            "website": null, "output": "json", "status": 200, "messages": [], "display": null}"#;
        assert!(serde_json::from_str::<ValidationResult>(missing).is_err());

        let non_boolean = r#"{"validates": "yes", "mode": "html", "title": "t", "html": null,
            "filename": null, "website": null, "output": "json", "status": 200,
            "messages": [], "display": null}"#;
        assert!(serde_json::from_str::<ValidationResult>(non_boolean).is_err());
    }

    #[test]
    fn test_result_round_trip() {
        let result = ValidationResult {
            validates: true,
            mode: Mode::Website,
            title: "https://example.org/".to_string(),
            html: None,
            filename: None,
            website: Some("https://example.org/".to_string()),
            output: OutputFormat::Json,
            status: 200,
            messages: Some(vec![]),
            display: None,
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: ValidationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
