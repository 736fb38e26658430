//! The validate pipeline: input selection, checker dispatch, and response
//! normalization
//!
//! `validate` never surfaces a transport error to the caller. A failed
//! round trip is absorbed into the returned record as a single synthetic
//! `network-error` message with `validates` set to false. Only malformed
//! local input produces an `Err`.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::filter::MessageFilter;
use crate::http::{CheckOutcome, CheckResponse, HttpClient, HttpClientConfig};
use crate::types::{
    Mode, OutputFormat, ValidateRequest, ValidationMessage, ValidationResult, STATUS_UNAVAILABLE,
};

/// Substring of the checker's HTML report that marks a passing document
const SUCCESS_MARKER: &str = "<p class=\"success\">";

/// Wire shape of the checker's JSON report
#[derive(serde::Deserialize)]
struct CheckerReport {
    #[serde(default)]
    messages: Vec<ValidationMessage>,
}

/// Issues validate calls through a configured HTTP client
pub struct Validator {
    http: HttpClient,
}

impl Validator {
    /// Create a validator with an explicit transport configuration
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Create a validator with the default transport configuration
    pub fn with_default_config() -> Result<Self> {
        Self::new(HttpClientConfig::default())
    }

    /// Validate one document and normalize the checker's answer.
    ///
    /// Fails fast on malformed local input (no input mode selected,
    /// unreadable file); resolves to a well-formed result for everything
    /// else, including transport failures.
    pub async fn validate(&self, request: &ValidateRequest) -> Result<ValidationResult> {
        let mode = request.mode()?;
        let input_html = match mode {
            Mode::Html => request.html.clone(),
            Mode::Filename => {
                let path = request.filename.as_deref().unwrap_or(Path::new(""));
                Some(read_document(path).await?)
            }
            Mode::Website => None,
        };
        debug!(%mode, check_url = %request.check_url, output = %request.output, "validating");

        let outcome = self.http.execute(request, input_html.as_deref()).await?;
        Ok(normalize(request, mode, input_html, outcome))
    }
}

/// Validate with a freshly-built default client; one-shot convenience.
pub async fn validate(request: &ValidateRequest) -> Result<ValidationResult> {
    Validator::with_default_config()?.validate(request).await
}

/// Read the document, stripping carriage returns so line and column
/// numbers match across platforms.
async fn read_document(path: &Path) -> Result<String> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::Io {
            message: format!("cannot read \"{}\": {}", path.display(), e),
            source: e,
        })?;
    Ok(text.replace('\r', ""))
}

/// Convert a raw round-trip outcome into the normalized result record
fn normalize(
    request: &ValidateRequest,
    mode: Mode,
    input_html: Option<String>,
    outcome: CheckOutcome,
) -> ValidationResult {
    match outcome {
        CheckOutcome::Response(response) if response.is_success() => {
            normalize_response(request, mode, input_html, response)
        }
        CheckOutcome::Response(response) => {
            let detail = format!(
                "{} {} {}",
                response.status, response.status_text, response.url
            );
            network_error_result(request, mode, input_html, response.status as i32, detail)
        }
        CheckOutcome::Failed(failure) => {
            network_error_result(request, mode, input_html, STATUS_UNAVAILABLE, failure.detail)
        }
    }
}

/// Normalize a successful checker answer per the requested output format
fn normalize_response(
    request: &ValidateRequest,
    mode: Mode,
    input_html: Option<String>,
    response: CheckResponse,
) -> ValidationResult {
    let title = title_for(mode, request, input_html.as_deref());
    let status = response.status as i32;
    match request.output {
        OutputFormat::Json => {
            let messages = parse_report(&response.body);
            let filter = MessageFilter::new(request.ignore_level, request.ignore_messages.clone());
            let messages = filter.apply(messages);
            ValidationResult {
                validates: messages.is_empty(),
                mode,
                title,
                html: input_html,
                filename: request.filename.clone(),
                website: request.website.clone(),
                output: request.output,
                status,
                messages: Some(messages),
                display: None,
            }
        }
        OutputFormat::Html => ValidationResult {
            validates: response.body.contains(SUCCESS_MARKER),
            mode,
            title,
            html: input_html,
            filename: request.filename.clone(),
            website: request.website.clone(),
            output: request.output,
            status,
            messages: None,
            display: Some(response.body),
        },
    }
}

/// Build the failure result for a round trip that produced no usable report
fn network_error_result(
    request: &ValidateRequest,
    mode: Mode,
    input_html: Option<String>,
    status: i32,
    detail: String,
) -> ValidationResult {
    ValidationResult {
        validates: false,
        mode,
        title: title_for(mode, request, input_html.as_deref()),
        html: input_html,
        filename: request.filename.clone(),
        website: request.website.clone(),
        output: request.output,
        status,
        messages: Some(vec![ValidationMessage::network_error(detail)]),
        display: None,
    }
}

/// Parse the checker's JSON report; a body without a usable `messages`
/// array is treated as an empty report.
fn parse_report(body: &str) -> Vec<ValidationMessage> {
    match serde_json::from_str::<CheckerReport>(body) {
        Ok(report) => report.messages,
        Err(e) => {
            warn!(error = %e, "checker response was not a JSON report, assuming no messages");
            Vec::new()
        }
    }
}

/// Human-readable label for the input, per mode
fn title_for(mode: Mode, request: &ValidateRequest, input_html: Option<&str>) -> String {
    match mode {
        Mode::Html => format!(
            "HTML String (characters: {})",
            input_html.map(|html| html.chars().count()).unwrap_or(0)
        ),
        Mode::Filename => request
            .filename
            .as_deref()
            .unwrap_or(Path::new(""))
            .display()
            .to_string(),
        Mode::Website => request.website.clone().unwrap_or_default(),
    }
}
